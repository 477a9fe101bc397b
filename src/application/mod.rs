//! Application layer - the gateway facade over provider adapters.
//!
//! [`Gateway`] owns one adapter per configured provider and routes each
//! invoice operation by its payment type. It can be built three ways:
//!
//! - [`Gateway::from_config`] validates a [`GatewayConfig`](crate::config::GatewayConfig)
//!   and asks a [`ProviderConnector`](crate::ports::ProviderConnector) for clients
//! - [`Gateway::from_factories`] runs caller-supplied client factories
//! - [`Gateway::from_clients`] wraps ready client handles

mod clients;
mod error;
mod gateway;

pub use clients::{ClientFactory, ProviderClients, ProviderFactories};
pub use error::GatewayBuildError;
pub use gateway::Gateway;
