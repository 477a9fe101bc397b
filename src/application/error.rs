//! Gateway construction errors.

use thiserror::Error;

use crate::config::ValidationError;
use crate::domain::invoice::PaymentType;
use crate::ports::ClientError;

/// Errors that abort building a [`Gateway`](super::Gateway).
///
/// Construction is all-or-nothing: no gateway is returned if any enabled
/// provider fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayBuildError {
    /// An enabled provider record failed its validation gate.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// A client handle could not be constructed.
    #[error("init {provider}: {source}")]
    Init {
        provider: PaymentType,
        #[source]
        source: ClientError,
    },
}

impl GatewayBuildError {
    pub fn init(provider: PaymentType, source: ClientError) -> Self {
        GatewayBuildError::Init { provider, source }
    }

    /// Provider the failure belongs to.
    pub fn provider(&self) -> PaymentType {
        match self {
            GatewayBuildError::InvalidConfig(err) => err.provider(),
            GatewayBuildError::Init { provider, .. } => *provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_names_provider_and_cause() {
        let err = GatewayBuildError::init(
            PaymentType::StorePay,
            ClientError::Authentication("bad app credentials".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "init storepay: authentication failed: bad app credentials"
        );
        assert_eq!(err.provider(), PaymentType::StorePay);
    }

    #[test]
    fn validation_errors_convert() {
        let err: GatewayBuildError = ValidationError::missing(PaymentType::QPay, "username").into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: qpay username is required"
        );
        assert_eq!(err.provider(), PaymentType::QPay);
    }
}
