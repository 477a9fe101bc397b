//! SocialPay client port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the SocialPay client.
#[async_trait]
pub trait SocialPayClient: Send + Sync {
    async fn create_invoice_qr(
        &self,
        request: SocialPayInvoiceRequest,
    ) -> Result<SocialPayResponse, ClientError>;

    async fn check_invoice(
        &self,
        request: SocialPayInvoiceRequest,
    ) -> Result<SocialPayResponse, ClientError>;
}

/// Invoice reference and amount, used for both creation and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPayInvoiceRequest {
    pub invoice: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialPayResponse {
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub response_desc: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

impl SocialPayResponse {
    /// Response code of an approved transaction.
    pub const SUCCESS_CODE: &'static str = "00";
}
