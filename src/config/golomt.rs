//! Golomt e-commerce configuration

use serde::Deserialize;

use super::error::{first_missing, ValidationError};
use crate::domain::invoice::PaymentType;

/// Golomt e-commerce gateway configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GolomtConfig {
    pub base_url: String,
    pub secret: String,
    pub bearer_token: String,
}

impl GolomtConfig {
    pub fn enabled(&self) -> bool {
        !self.base_url.is_empty() || !self.secret.is_empty() || !self.bearer_token.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        first_missing(
            PaymentType::Golomt,
            &[
                ("base url", self.base_url.as_str()),
                ("secret", self.secret.as_str()),
                ("bearer token", self.bearer_token.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete() -> GolomtConfig {
        GolomtConfig {
            base_url: "https://ecommerce.golomtbank.com".to_string(),
            secret: "s".to_string(),
            bearer_token: "b".to_string(),
        }
    }

    #[test]
    fn test_default_is_disabled() {
        assert!(!GolomtConfig::default().enabled());
    }

    #[test]
    fn test_validation_missing_bearer_token() {
        let config = GolomtConfig {
            bearer_token: String::new(),
            ..complete()
        };
        assert_eq!(config.validate().unwrap_err().field(), "bearer token");
    }

    const FIELDS: [&str; 3] = ["base url", "secret", "bearer token"];

    fn with_fields(set: [bool; 3]) -> GolomtConfig {
        let full = complete();
        let pick = |on: bool, value: &str| if on { value.to_string() } else { String::new() };
        GolomtConfig {
            base_url: pick(set[0], &full.base_url),
            secret: pick(set[1], &full.secret),
            bearer_token: pick(set[2], &full.bearer_token),
        }
    }

    proptest! {
        #[test]
        fn enabled_iff_any_field_set(set in any::<[bool; 3]>()) {
            let config = with_fields(set);
            prop_assert_eq!(config.enabled(), set.iter().any(|s| *s));
        }

        #[test]
        fn validate_names_first_missing_field(set in any::<[bool; 3]>()) {
            let config = with_fields(set);
            match set.iter().position(|s| !*s) {
                Some(idx) => {
                    let err = config.validate().unwrap_err();
                    prop_assert_eq!(err.field(), FIELDS[idx]);
                    prop_assert_eq!(err.provider(), PaymentType::Golomt);
                }
                None => prop_assert!(config.validate().is_ok()),
            }
        }
    }
}
