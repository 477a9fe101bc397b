//! Provider configuration module
//!
//! One configuration record per provider plus the aggregate [`GatewayConfig`].
//! Every record follows the same gate:
//!
//! - `enabled()` is true iff any field is set. An all-empty record means the
//!   provider is simply not used and is never validated.
//! - `validate()` checks the required fields in a fixed order and fails on
//!   the first missing one. Pocket also parses its terminal id.
//!
//! Configuration is loaded from environment variables with the
//! `PAYMENTS_GATEWAY` prefix; nested values use double underscores.
//!
//! # Example
//!
//! ```no_run
//! use payments_gateway::config::GatewayConfig;
//!
//! let config = GatewayConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! for provider in config.enabled_providers() {
//!     println!("{provider} enabled");
//! }
//! ```

mod balc;
mod error;
mod golomt;
mod monpay;
mod pocket;
mod qpay;
mod simple;
mod socialpay;
mod storepay;
mod tokipay;

pub use balc::BalcConfig;
pub use error::{ConfigError, ValidationError};
pub use golomt::GolomtConfig;
pub use monpay::MonpayConfig;
pub use pocket::PocketConfig;
pub use qpay::QPayConfig;
pub use simple::SimpleConfig;
pub use socialpay::SocialPayConfig;
pub use storepay::StorePayConfig;
pub use tokipay::TokipayConfig;

use serde::Deserialize;

use crate::domain::invoice::PaymentType;

/// Root gateway configuration
///
/// Every section defaults to empty, which leaves that provider disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub qpay: QPayConfig,
    pub tokipay: TokipayConfig,
    pub monpay: MonpayConfig,
    pub golomt: GolomtConfig,
    pub socialpay: SocialPayConfig,
    pub storepay: StorePayConfig,
    pub pocket: PocketConfig,
    pub simple: SimpleConfig,
    pub balc: BalcConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYMENTS_GATEWAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYMENTS_GATEWAY__QPAY__USERNAME=...` -> `qpay.username = ...`
    /// - `PAYMENTS_GATEWAY__POCKET__TERMINAL_ID=4021` -> `pocket.terminal_id = "4021"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Loading does not validate; call [`GatewayConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYMENTS_GATEWAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every enabled provider, stopping at the first error
    ///
    /// Disabled providers are skipped entirely.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.qpay.enabled() {
            self.qpay.validate()?;
        }
        if self.tokipay.enabled() {
            self.tokipay.validate()?;
        }
        if self.monpay.enabled() {
            self.monpay.validate()?;
        }
        if self.golomt.enabled() {
            self.golomt.validate()?;
        }
        if self.socialpay.enabled() {
            self.socialpay.validate()?;
        }
        if self.storepay.enabled() {
            self.storepay.validate()?;
        }
        if self.pocket.enabled() {
            self.pocket.validate()?;
        }
        if self.simple.enabled() {
            self.simple.validate()?;
        }
        if self.balc.enabled() {
            self.balc.validate()?;
        }
        Ok(())
    }

    /// Whether the record for `payment_type` has any field set
    pub fn is_enabled(&self, payment_type: PaymentType) -> bool {
        match payment_type {
            PaymentType::QPay => self.qpay.enabled(),
            PaymentType::Tokipay => self.tokipay.enabled(),
            PaymentType::Monpay => self.monpay.enabled(),
            PaymentType::Golomt => self.golomt.enabled(),
            PaymentType::SocialPay => self.socialpay.enabled(),
            PaymentType::StorePay => self.storepay.enabled(),
            PaymentType::Pocket => self.pocket.enabled(),
            PaymentType::Simple => self.simple.enabled(),
            PaymentType::Balc => self.balc.enabled(),
        }
    }

    /// Enabled providers in canonical order
    pub fn enabled_providers(&self) -> Vec<PaymentType> {
        PaymentType::all()
            .iter()
            .copied()
            .filter(|t| self.is_enabled(*t))
            .collect()
    }
}
