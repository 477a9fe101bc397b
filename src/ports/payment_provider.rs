//! Payment provider port - the uniform contract every provider adapter meets.
//!
//! Callers see exactly two operations regardless of which provider serves
//! them: create a payment request, and ask whether it was paid. Each adapter
//! translates these into its provider's native calls.
//!
//! # Design
//!
//! - **Stateless**: adapters hold only an immutable client handle; invoice
//!   identity and paid status live with the remote provider
//! - **No retries**: every error is returned to the caller as-is, with
//!   provider context attached
//! - **Shareable**: `Send + Sync` so one gateway can serve concurrent callers

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceInputError, InvoiceResult,
    PaymentType, UnknownPaymentType,
};

/// Port for a single payment provider.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Provider served by this adapter.
    fn payment_type(&self) -> PaymentType;

    /// Create a payment request with the provider.
    ///
    /// Performs one remote call, or two for providers that check a credit
    /// limit first. `is_paid` on the result is true only when the provider
    /// settles synchronously.
    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError>;

    /// Ask the provider whether the payment identified by `input.uid` was made.
    ///
    /// Never cached: every call re-queries the provider.
    async fn check_invoice(
        &self,
        input: &CheckInvoiceInput,
    ) -> Result<CheckInvoiceResult, PaymentError>;
}

/// Errors from payment provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message. Business rejections may be localized.
    pub message: String,

    /// Provider involved, when known.
    pub provider: Option<PaymentType>,

    /// Provider's own error code (if available).
    pub provider_code: Option<String>,

    /// Whether the failure is typically transient. Informational only; the
    /// gateway never retries.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider: None,
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    /// Attach the provider.
    pub fn for_provider(mut self, provider: PaymentType) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// The tag is outside the supported set.
    pub fn unsupported_payment_type(tag: &str) -> Self {
        Self::new(
            PaymentErrorCode::UnsupportedPaymentType,
            format!("unsupported payment type: {}", tag),
        )
    }

    /// The tag is valid but no adapter was built for it.
    pub fn adapter_not_configured(provider: PaymentType) -> Self {
        Self::new(
            PaymentErrorCode::AdapterNotConfigured,
            format!("adapter for {} is not configured", provider),
        )
        .for_provider(provider)
    }

    /// The caller's input cannot be sent to this provider.
    pub fn invalid_input(provider: PaymentType, message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidInput, message).for_provider(provider)
    }

    /// Available credit does not cover the amount.
    pub fn insufficient_funds(provider: PaymentType, message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InsufficientFunds, message).for_provider(provider)
    }

    /// The provider's native API has no such operation.
    pub fn unsupported_operation(provider: PaymentType, message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::UnsupportedOperation, message).for_provider(provider)
    }

    /// Wrap a native client failure, keeping its kind.
    pub fn from_client(provider: PaymentType, operation: &str, err: ClientError) -> Self {
        let message = format!("{} {}: {}", provider, operation, err);
        match err {
            ClientError::Network(_) => Self::new(PaymentErrorCode::NetworkError, message),
            ClientError::Authentication(_) => {
                Self::new(PaymentErrorCode::AuthenticationError, message)
            }
            ClientError::Rejected { code, .. } => {
                let err = Self::new(PaymentErrorCode::ProviderRejected, message);
                match code {
                    Some(code) => err.with_provider_code(code),
                    None => err,
                }
            }
            ClientError::InvalidResponse(_) => {
                Self::new(PaymentErrorCode::InvalidResponse, message)
            }
            ClientError::Unavailable(_) => {
                Self::new(PaymentErrorCode::AdapterNotConfigured, message)
            }
        }
        .for_provider(provider)
    }

    /// The native response could not be captured for `raw`.
    pub fn invalid_response(provider: PaymentType, message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidResponse, message).for_provider(provider)
    }

    /// Wrap an input validation failure.
    pub fn from_input(provider: PaymentType, err: InvoiceInputError) -> Self {
        Self::invalid_input(provider, format!("{}: {}", provider, err))
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<UnknownPaymentType> for PaymentError {
    fn from(err: UnknownPaymentType) -> Self {
        PaymentError::unsupported_payment_type(&err.0)
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Tag outside the supported set.
    UnsupportedPaymentType,

    /// Provider exists but was not configured here.
    AdapterNotConfigured,

    /// Caller input is missing or malformed.
    InvalidInput,

    /// Credit limit does not cover the amount.
    InsufficientFunds,

    /// Provider refused the request on business grounds.
    ProviderRejected,

    /// Network connectivity issue.
    NetworkError,

    /// API authentication failed.
    AuthenticationError,

    /// Provider response could not be understood.
    InvalidResponse,

    /// Operation not offered by the provider.
    UnsupportedOperation,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentErrorCode::NetworkError)
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::UnsupportedPaymentType => "unsupported_payment_type",
            PaymentErrorCode::AdapterNotConfigured => "adapter_not_configured",
            PaymentErrorCode::InvalidInput => "invalid_input",
            PaymentErrorCode::InsufficientFunds => "insufficient_funds",
            PaymentErrorCode::ProviderRejected => "provider_rejected",
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationError => "authentication_error",
            PaymentErrorCode::InvalidResponse => "invalid_response",
            PaymentErrorCode::UnsupportedOperation => "unsupported_operation",
        };
        write!(f, "{}", s)
    }
}
