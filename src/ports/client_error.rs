//! Errors raised by native provider clients.
//!
//! Client handles are collaborators owned by each provider's integration
//! library. They report failures in these few shapes; adapters add the
//! provider context and turn them into `PaymentError`.

use thiserror::Error;

use crate::domain::invoice::PaymentType;

/// Failure of a native provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The provider could not be reached or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// Credentials were rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider understood the request and refused it.
    #[error("rejected by provider: {message}")]
    Rejected {
        code: Option<String>,
        message: String,
    },

    /// The provider answered with something the client could not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// No client can be built for this provider.
    #[error("no client available for {0}")]
    Unavailable(PaymentType),
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::Network(message.into())
    }

    pub fn rejected(code: Option<&str>, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        ClientError::InvalidResponse(message.into())
    }
}
