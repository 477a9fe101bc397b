//! Simple configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// Simple hosted-invoice configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimpleConfig {
    pub username: String,
    pub password: String,
    pub base_url: String,
    pub callback_url: String,
}

impl SimpleConfig {
    pub fn enabled(&self) -> bool {
        !self.username.is_empty()
            || !self.password.is_empty()
            || !self.base_url.is_empty()
            || !self.callback_url.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::Simple,
            &[
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
                ("base url", self.base_url.as_str()),
                ("callback url", self.callback_url.as_str()),
            ],
        )
    }
}
