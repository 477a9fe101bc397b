//! Pocket configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// Pocket merchant wallet configuration
///
/// The terminal id arrives as text (environment variables are strings) and
/// is parsed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PocketConfig {
    pub merchant: String,
    pub client_id: String,
    pub client_secret: String,
    pub environment: String,
    pub terminal_id: String,
}

impl PocketConfig {
    pub fn enabled(&self) -> bool {
        !self.merchant.is_empty()
            || !self.client_id.is_empty()
            || !self.client_secret.is_empty()
            || !self.environment.is_empty()
            || !self.terminal_id.is_empty()
    }

    /// Validate Pocket configuration, returning the parsed terminal id
    pub fn validate(&self) -> Result<i64, ValidationError> {
        first_missing(
            PaymentType::Pocket,
            &[
                ("merchant", self.merchant.as_str()),
                ("client id", self.client_id.as_str()),
                ("client secret", self.client_secret.as_str()),
                ("environment", self.environment.as_str()),
                ("terminal id", self.terminal_id.as_str()),
            ],
        )?;

        self.terminal_id
            .parse::<i64>()
            .map_err(|source| ValidationError::InvalidNumber {
                provider: PaymentType::Pocket,
                field: "terminal id",
                source,
            })
    }
}
