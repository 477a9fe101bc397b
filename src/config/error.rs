//! Configuration error types

use std::num::ParseIntError;

use thiserror::Error;

use crate::domain::invoice::PaymentType;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during provider configuration validation
///
/// Validation stops at the first problem, so each error names exactly one
/// provider and one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{provider} {field} is required")]
    MissingRequired {
        provider: PaymentType,
        field: &'static str,
    },

    #[error("{provider} {field} parse: {source}")]
    InvalidNumber {
        provider: PaymentType,
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

impl ValidationError {
    pub fn missing(provider: PaymentType, field: &'static str) -> Self {
        ValidationError::MissingRequired { provider, field }
    }

    /// Provider whose configuration failed.
    pub fn provider(&self) -> PaymentType {
        match self {
            ValidationError::MissingRequired { provider, .. }
            | ValidationError::InvalidNumber { provider, .. } => *provider,
        }
    }

    /// Field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired { field, .. }
            | ValidationError::InvalidNumber { field, .. } => field,
        }
    }
}

/// Returns the first `(field, value)` pair whose value is empty.
pub(crate) fn first_missing(
    provider: PaymentType,
    fields: &[(&'static str, &str)],
) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(ValidationError::missing(provider, field)),
        None => Ok(()),
    }
}
