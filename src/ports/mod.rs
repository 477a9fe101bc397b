//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the gateway and the outside world. Adapters implement these ports.
//!
//! ## Uniform Contract
//!
//! - `PaymentProvider` - create/check invoice, implemented once per provider
//!
//! ## Native Client Ports
//!
//! Narrow interfaces over each provider's own client library. The wire
//! protocols live behind these traits and are not part of this crate.
//!
//! - `QPayClient`, `TokipayClient`, `MonpayClient`, `GolomtClient`,
//!   `SocialPayClient`, `StorePayClient`, `PocketClient`, `SimpleClient`,
//!   `BalcClient`
//! - `ProviderConnector` - builds client handles from validated configuration

mod balc_client;
mod client_error;
mod golomt_client;
mod monpay_client;
mod payment_provider;
mod pocket_client;
mod provider_connector;
mod qpay_client;
mod simple_client;
mod socialpay_client;
mod storepay_client;
mod tokipay_client;

pub use balc_client::{BalcClient, BalcLimit};
pub use client_error::ClientError;
pub use golomt_client::{GolomtClient, GolomtInvoice, GolomtInvoiceRequest, GolomtReturnType};
pub use monpay_client::{MonpayCheckResponse, MonpayCheckResult, MonpayClient};
pub use payment_provider::{PaymentError, PaymentErrorCode, PaymentProvider};
pub use pocket_client::{PocketClient, PocketInvoice, PocketInvoiceRequest, PocketInvoiceStatus};
pub use provider_connector::ProviderConnector;
pub use qpay_client::{
    QPayClient, QPayDeeplink, QPayInvoice, QPayInvoiceRequest, QPayPaymentCheck, QPayPaymentRow,
};
pub use simple_client::{
    SimpleClient, SimpleInvoice, SimpleInvoiceData, SimpleInvoiceQuery, SimpleInvoiceRequest,
    SimpleInvoiceStatus,
};
pub use socialpay_client::{SocialPayClient, SocialPayInvoiceRequest, SocialPayResponse};
pub use storepay_client::{StorePayClient, StorePayLoanRequest};
pub use tokipay_client::{
    TokipayClient, TokipayPaymentRequest, TokipayPaymentResponse, TokipayStatusData,
    TokipayStatusResponse,
};
