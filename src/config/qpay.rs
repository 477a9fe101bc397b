//! QPay configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// QPay v2 merchant configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QPayConfig {
    pub username: String,
    pub password: String,
    pub endpoint: String,
    pub callback: String,
    pub invoice_code: String,
    pub merchant_id: String,

    /// Derive sender/receiver codes from the payer's organization
    /// registration number when the payer is an organization.
    pub organization_sender_codes: bool,
}

impl QPayConfig {
    /// True iff any field is set
    pub fn enabled(&self) -> bool {
        !self.username.is_empty()
            || !self.password.is_empty()
            || !self.endpoint.is_empty()
            || !self.callback.is_empty()
            || !self.invoice_code.is_empty()
            || !self.merchant_id.is_empty()
            || self.organization_sender_codes
    }

    /// Validate QPay configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::QPay,
            &[
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
                ("endpoint", self.endpoint.as_str()),
                ("callback", self.callback.as_str()),
                ("invoice code", self.invoice_code.as_str()),
                ("merchant id", self.merchant_id.as_str()),
            ],
        )
    }
}
