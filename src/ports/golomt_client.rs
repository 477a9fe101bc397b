//! Golomt e-commerce client port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the Golomt e-commerce client.
///
/// Settlement is reported to the merchant callback; the library offers no
/// status lookup.
#[async_trait]
pub trait GolomtClient: Send + Sync {
    async fn create_invoice(
        &self,
        request: GolomtInvoiceRequest,
    ) -> Result<GolomtInvoice, ClientError>;
}

/// How the payment page hands control back after payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GolomtReturnType {
    #[default]
    Get,
    Post,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolomtInvoiceRequest {
    pub return_type: GolomtReturnType,
    pub amount: Decimal,
    pub transaction_id: String,
    pub callback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GolomtInvoice {
    /// Invoice token used to open the hosted payment page.
    pub invoice: String,
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub transaction_id: String,
}
