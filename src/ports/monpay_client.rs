//! MonPay client port.
//!
//! MonPay's library only exposes QR generation and QR status checks; there is
//! no invoice creation call, so only the check is modelled here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the MonPay QR client.
#[async_trait]
pub trait MonpayClient: Send + Sync {
    /// Look up the payment state of a generated QR.
    async fn check_qr(&self, uuid: &str) -> Result<MonpayCheckResponse, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonpayCheckResponse {
    pub code: i32,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub result: Option<MonpayCheckResult>,
}

impl MonpayCheckResponse {
    /// Code reported for a paid QR.
    pub const SUCCESS_CODE: i32 = 0;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonpayCheckResult {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub used_at: Option<String>,
    #[serde(default)]
    pub used_by_id: Option<i64>,
}
