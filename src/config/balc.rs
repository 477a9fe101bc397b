//! Balc credit API configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// Balc consumer-credit API configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BalcConfig {
    pub endpoint: String,
    pub token: String,
}

impl BalcConfig {
    pub fn enabled(&self) -> bool {
        !self.endpoint.is_empty() || !self.token.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::Balc,
            &[
                ("endpoint", self.endpoint.as_str()),
                ("token", self.token.as_str()),
            ],
        )
    }
}
