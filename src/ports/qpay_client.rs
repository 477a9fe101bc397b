//! QPay client port - narrow interface over the QPay v2 merchant API.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the QPay v2 client.
#[async_trait]
pub trait QPayClient: Send + Sync {
    /// Create an invoice; the response carries the QR text and bank deeplinks.
    async fn create_invoice(&self, request: QPayInvoiceRequest) -> Result<QPayInvoice, ClientError>;

    /// List payments recorded against `object_id`, one page at a time.
    async fn check_payment(
        &self,
        object_id: &str,
        page_limit: u32,
        page_number: u32,
    ) -> Result<QPayPaymentCheck, ClientError>;
}

/// Invoice creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QPayInvoiceRequest {
    pub sender_code: String,
    pub receiver_code: String,
    pub description: String,
    /// Whole units (MNT).
    pub amount: i64,
    /// Echoed back to the merchant callback URL as query parameters.
    pub callback_param: HashMap<String, String>,
}

/// Created invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QPayInvoice {
    pub invoice_id: String,
    pub qr_text: String,
    #[serde(default)]
    pub qr_image: String,
    #[serde(default)]
    pub urls: Vec<QPayDeeplink>,
}

/// Bank app deeplink attached to an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QPayDeeplink {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub link: String,
}

/// One page of payment rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QPayPaymentCheck {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub rows: Vec<QPayPaymentRow>,
}

/// A single settlement row. QPay reports amounts as decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QPayPaymentRow {
    #[serde(default)]
    pub payment_id: String,
    pub payment_status: String,
    pub payment_amount: String,
    #[serde(default)]
    pub payment_currency: String,
}

impl QPayPaymentRow {
    /// Status value of a settled row.
    pub const PAID: &'static str = "PAID";
}
