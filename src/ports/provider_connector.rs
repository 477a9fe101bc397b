//! Provider connector port - builds native client handles from validated configuration.
//!
//! The gateway never constructs provider clients itself. When built from a
//! [`GatewayConfig`](crate::config::GatewayConfig) it validates each enabled
//! record and then asks the connector for a client handle. Connectors that
//! only know some providers leave the others at their default, which
//! reports [`ClientError::Unavailable`].
//!
//! Connect methods are called only with configuration that already passed
//! its validation gate.

use std::sync::Arc;

use super::balc_client::BalcClient;
use super::client_error::ClientError;
use super::golomt_client::GolomtClient;
use super::monpay_client::MonpayClient;
use super::pocket_client::PocketClient;
use super::qpay_client::QPayClient;
use super::simple_client::SimpleClient;
use super::socialpay_client::SocialPayClient;
use super::storepay_client::StorePayClient;
use super::tokipay_client::TokipayClient;
use crate::config::{
    BalcConfig, GolomtConfig, MonpayConfig, PocketConfig, QPayConfig, SimpleConfig,
    SocialPayConfig, StorePayConfig, TokipayConfig,
};
use crate::domain::invoice::PaymentType;

/// Port for constructing provider client handles.
pub trait ProviderConnector: Send + Sync {
    fn connect_qpay(&self, _config: &QPayConfig) -> Result<Arc<dyn QPayClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::QPay))
    }

    fn connect_tokipay(
        &self,
        _config: &TokipayConfig,
    ) -> Result<Arc<dyn TokipayClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::Tokipay))
    }

    fn connect_monpay(&self, _config: &MonpayConfig) -> Result<Arc<dyn MonpayClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::Monpay))
    }

    fn connect_golomt(&self, _config: &GolomtConfig) -> Result<Arc<dyn GolomtClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::Golomt))
    }

    fn connect_socialpay(
        &self,
        _config: &SocialPayConfig,
    ) -> Result<Arc<dyn SocialPayClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::SocialPay))
    }

    fn connect_storepay(
        &self,
        _config: &StorePayConfig,
    ) -> Result<Arc<dyn StorePayClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::StorePay))
    }

    /// `terminal_id` is the value parsed by [`PocketConfig::validate`].
    fn connect_pocket(
        &self,
        _config: &PocketConfig,
        _terminal_id: i64,
    ) -> Result<Arc<dyn PocketClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::Pocket))
    }

    fn connect_simple(&self, _config: &SimpleConfig) -> Result<Arc<dyn SimpleClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::Simple))
    }

    fn connect_balc(&self, _config: &BalcConfig) -> Result<Arc<dyn BalcClient>, ClientError> {
        Err(ClientError::Unavailable(PaymentType::Balc))
    }
}
