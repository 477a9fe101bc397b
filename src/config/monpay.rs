//! MonPay configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// MonPay QR merchant configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MonpayConfig {
    pub endpoint: String,
    pub username: String,
    pub account_id: String,
    pub callback: String,
}

impl MonpayConfig {
    pub fn enabled(&self) -> bool {
        !self.endpoint.is_empty()
            || !self.username.is_empty()
            || !self.account_id.is_empty()
            || !self.callback.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::Monpay,
            &[
                ("endpoint", self.endpoint.as_str()),
                ("username", self.username.as_str()),
                ("account id", self.account_id.as_str()),
                ("callback", self.callback.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete() -> MonpayConfig {
        MonpayConfig {
            endpoint: "https://wallet.monpay.mn".to_string(),
            username: "shop".to_string(),
            account_id: "3001".to_string(),
            callback: "https://shop.mn/monpay".to_string(),
        }
    }

    #[test]
    fn test_default_is_disabled() {
        assert!(!MonpayConfig::default().enabled());
    }

    #[test]
    fn test_validation_missing_account_id() {
        let config = MonpayConfig {
            account_id: String::new(),
            ..complete()
        };
        assert!(config.enabled());
        assert_eq!(config.validate().unwrap_err().to_string(), "monpay account id is required");
    }

    const FIELDS: [&str; 4] = ["endpoint", "username", "account id", "callback"];

    fn with_fields(set: [bool; 4]) -> MonpayConfig {
        let full = complete();
        let pick = |on: bool, value: &str| if on { value.to_string() } else { String::new() };
        MonpayConfig {
            endpoint: pick(set[0], &full.endpoint),
            username: pick(set[1], &full.username),
            account_id: pick(set[2], &full.account_id),
            callback: pick(set[3], &full.callback),
        }
    }

    proptest! {
        #[test]
        fn enabled_iff_any_field_set(set in any::<[bool; 4]>()) {
            let config = with_fields(set);
            prop_assert_eq!(config.enabled(), set.iter().any(|s| *s));
        }

        #[test]
        fn validate_names_first_missing_field(set in any::<[bool; 4]>()) {
            let config = with_fields(set);
            match set.iter().position(|s| !*s) {
                Some(idx) => {
                    let err = config.validate().unwrap_err();
                    prop_assert_eq!(err.field(), FIELDS[idx]);
                    prop_assert_eq!(err.provider(), PaymentType::Monpay);
                }
                None => prop_assert!(config.validate().is_ok()),
            }
        }
    }
}
