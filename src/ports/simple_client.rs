//! Simple client port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the Simple hosted-invoice client.
#[async_trait]
pub trait SimpleClient: Send + Sync {
    async fn create_invoice(
        &self,
        request: SimpleInvoiceRequest,
    ) -> Result<SimpleInvoice, ClientError>;

    async fn get_invoice(
        &self,
        query: SimpleInvoiceQuery,
    ) -> Result<SimpleInvoiceStatus, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleInvoiceRequest {
    pub order_id: String,
    /// Whole units (MNT).
    pub total: i64,
    /// `YYYY-MM-DD HH:MM:SS`, local time.
    pub expire_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleInvoice {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub invoice_url: Option<String>,
}

/// Lookup by merchant order id or Simple's own id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleInvoiceQuery {
    pub order_id: String,
    pub simple_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleInvoiceStatus {
    #[serde(default)]
    pub success: bool,
    pub data: SimpleInvoiceData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleInvoiceData {
    pub invoice_status: String,
}

impl SimpleInvoiceData {
    pub const PAID: &'static str = "PAID";
}
