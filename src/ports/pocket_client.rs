//! Pocket client port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the Pocket merchant client.
#[async_trait]
pub trait PocketClient: Send + Sync {
    async fn create_invoice(
        &self,
        request: PocketInvoiceRequest,
    ) -> Result<PocketInvoice, ClientError>;

    /// Look up an invoice by the merchant's order number.
    async fn check_invoice(&self, order_number: &str) -> Result<PocketInvoiceStatus, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketInvoiceRequest {
    pub amount: Decimal,
    pub order_number: String,
    pub invoice_type: String,
    pub channel: String,
    pub info: String,
}

impl PocketInvoiceRequest {
    /// Invoice type for a plain one-off charge.
    pub const INVOICE_TYPE_ZERO: &'static str = "ZERO";
    pub const CHANNEL_MERCHANT: &'static str = "merchant";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketInvoice {
    pub id: i64,
    #[serde(default)]
    pub qr: String,
    #[serde(default)]
    pub deep_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketInvoiceStatus {
    pub id: i64,
    pub state: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl PocketInvoiceStatus {
    pub const PAID: &'static str = "paid";
}
