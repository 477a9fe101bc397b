//! StorePay configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// StorePay store configuration
///
/// StorePay authenticates twice: once as the integrating application
/// (`app_username`/`app_password`) and once as the store user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorePayConfig {
    pub app_username: String,
    pub app_password: String,
    pub username: String,
    pub password: String,
    pub auth_url: String,
    pub base_url: String,
    pub store_id: String,
    pub callback_url: String,
}

impl StorePayConfig {
    pub fn enabled(&self) -> bool {
        !self.app_username.is_empty()
            || !self.app_password.is_empty()
            || !self.username.is_empty()
            || !self.password.is_empty()
            || !self.auth_url.is_empty()
            || !self.base_url.is_empty()
            || !self.store_id.is_empty()
            || !self.callback_url.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::StorePay,
            &[
                ("app username", self.app_username.as_str()),
                ("app password", self.app_password.as_str()),
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
                ("auth url", self.auth_url.as_str()),
                ("base url", self.base_url.as_str()),
                ("store id", self.store_id.as_str()),
                ("callback url", self.callback_url.as_str()),
            ],
        )
    }
}
