//! Configuration check for the payments gateway.
//!
//! Loads provider configuration from the environment, runs every enabled
//! provider's validation gate and reports which providers are usable.
//! Exits non-zero when configuration cannot be loaded or is invalid.

use std::process::ExitCode;

use payments_gateway::config::GatewayConfig;
use tracing_subscriber::EnvFilter;

const LOG_FORMAT_VAR: &str = "PAYMENTS_GATEWAY_LOG_FORMAT";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if std::env::var(LOG_FORMAT_VAR).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    init_tracing();

    let config = match GatewayConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!(
            provider = %e.provider(),
            field = e.field(),
            error = %e,
            "Invalid provider configuration"
        );
        return ExitCode::FAILURE;
    }

    let enabled = config.enabled_providers();
    if enabled.is_empty() {
        tracing::warn!("No payment providers configured");
    }
    for provider in &enabled {
        tracing::info!(provider = %provider, name = provider.display_name(), "Provider enabled");
    }
    tracing::info!(count = enabled.len(), "Configuration valid");

    ExitCode::SUCCESS
}
