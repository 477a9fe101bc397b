//! Toki Pay configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// Toki Pay merchant configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokipayConfig {
    pub endpoint: String,
    pub api_key: String,
    pub im_api_key: String,
    pub authorization: String,
    pub merchant_id: String,
    pub success_url: String,
    pub failure_url: String,
    pub app_schema_ios: String,
}

impl TokipayConfig {
    pub fn enabled(&self) -> bool {
        !self.endpoint.is_empty()
            || !self.api_key.is_empty()
            || !self.im_api_key.is_empty()
            || !self.authorization.is_empty()
            || !self.merchant_id.is_empty()
            || !self.success_url.is_empty()
            || !self.failure_url.is_empty()
            || !self.app_schema_ios.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::Tokipay,
            &[
                ("endpoint", self.endpoint.as_str()),
                ("api key", self.api_key.as_str()),
                ("im api key", self.im_api_key.as_str()),
                ("authorization", self.authorization.as_str()),
                ("merchant id", self.merchant_id.as_str()),
                ("success url", self.success_url.as_str()),
                ("failure url", self.failure_url.as_str()),
                ("app schema ios", self.app_schema_ios.as_str()),
            ],
        )
    }
}
