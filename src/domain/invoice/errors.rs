//! Invoice input error types.

use thiserror::Error;

/// A payment type tag outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported payment type: {0}")]
pub struct UnknownPaymentType(pub String);

/// Errors raised when a caller-supplied invoice input is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvoiceInputError {
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(String),

    #[error("uid is required")]
    MissingUid,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl InvoiceInputError {
    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        InvoiceInputError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
