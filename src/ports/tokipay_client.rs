//! Toki Pay client port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the Toki Pay client.
#[async_trait]
pub trait TokipayClient: Send + Sync {
    /// Push a payment request to the user's Toki app by phone number.
    async fn payment_sent_user(
        &self,
        request: TokipayPaymentRequest,
    ) -> Result<TokipayPaymentResponse, ClientError>;

    async fn payment_status(&self, order_id: &str) -> Result<TokipayStatusResponse, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokipayPaymentRequest {
    pub order_id: String,
    /// Whole units (MNT).
    pub amount: i64,
    pub phone_no: String,
    pub country_code: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokipayPaymentResponse {
    #[serde(default)]
    pub status_code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokipayStatusResponse {
    #[serde(default)]
    pub status_code: String,
    #[serde(default)]
    pub message: String,
    pub data: TokipayStatusData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokipayStatusData {
    pub status: String,
}

impl TokipayStatusData {
    /// Status of a finished payment.
    pub const COMPLETED: &'static str = "COMPLETED";
}
