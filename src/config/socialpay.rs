//! SocialPay configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// SocialPay terminal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SocialPayConfig {
    pub terminal: String,
    pub secret: String,
    pub endpoint: String,
}

impl SocialPayConfig {
    pub fn enabled(&self) -> bool {
        !self.terminal.is_empty() || !self.secret.is_empty() || !self.endpoint.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::SocialPay,
            &[
                ("terminal", self.terminal.as_str()),
                ("secret", self.secret.as_str()),
                ("endpoint", self.endpoint.as_str()),
            ],
        )
    }
}
