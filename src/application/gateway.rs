//! Gateway - routes invoice operations to the adapter for their payment type.
//!
//! The gateway is built once and is read-only afterwards, so a single
//! instance can be shared across tasks. Dispatch is a two-step lookup:
//!
//! 1. The tag must name a supported provider, otherwise the call fails with
//!    `UnsupportedPaymentType`.
//! 2. An adapter must have been built for it, otherwise the call fails with
//!    `AdapterNotConfigured`.
//!
//! Adapter results and errors are returned unchanged.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use payments_gateway::adapters::MonpayAdapter;
//! use payments_gateway::application::Gateway;
//! use payments_gateway::domain::invoice::PaymentType;
//! use payments_gateway::ports::PaymentErrorCode;
//!
//! let gateway = Gateway::new().with_provider(Arc::new(MonpayAdapter::default()));
//! assert_eq!(gateway.configured_types(), vec![PaymentType::Monpay]);
//!
//! let err = gateway.resolve(PaymentType::QPay).err().unwrap();
//! assert_eq!(err.code, PaymentErrorCode::AdapterNotConfigured);
//!
//! let err = gateway.resolve_tag("paypal").err().unwrap();
//! assert_eq!(err.code, PaymentErrorCode::UnsupportedPaymentType);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use super::clients::{ProviderClients, ProviderFactories};
use super::error::GatewayBuildError;
use crate::adapters::{
    BalcCreditAdapter, GolomtAdapter, MonpayAdapter, PocketAdapter, QPayAdapter, SimpleAdapter,
    SocialPayAdapter, StorePayAdapter, TokiPayAdapter,
};
use crate::config::GatewayConfig;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceResult, PaymentType,
};
use crate::ports::{ClientError, PaymentError, PaymentProvider, ProviderConnector};

/// Unified entry point over all configured payment providers.
#[derive(Clone, Default)]
pub struct Gateway {
    providers: HashMap<PaymentType, Arc<dyn PaymentProvider>>,
}

impl Gateway {
    /// Creates a gateway with no adapters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter under its own payment type, replacing any
    /// adapter already registered for it.
    pub fn with_provider(mut self, provider: Arc<dyn PaymentProvider>) -> Self {
        self.providers.insert(provider.payment_type(), provider);
        self
    }

    /// Builds one adapter per supplied client handle.
    pub fn from_clients(clients: ProviderClients) -> Self {
        let mut gateway = Self::new();

        if let Some(client) = clients.qpay {
            gateway = gateway.with_provider(Arc::new(
                QPayAdapter::new(client)
                    .with_organization_sender_codes(clients.qpay_organization_sender_codes),
            ));
        }
        if let Some(client) = clients.tokipay {
            gateway = gateway.with_provider(Arc::new(TokiPayAdapter::new(client)));
        }
        if let Some(client) = clients.monpay {
            gateway = gateway.with_provider(Arc::new(MonpayAdapter::new(client)));
        }
        if let Some(client) = clients.golomt {
            gateway = gateway.with_provider(Arc::new(GolomtAdapter::new(client)));
        }
        if let Some(client) = clients.socialpay {
            gateway = gateway.with_provider(Arc::new(SocialPayAdapter::new(client)));
        }
        if let Some(client) = clients.storepay {
            gateway = gateway.with_provider(Arc::new(StorePayAdapter::new(client)));
        }
        if let Some(client) = clients.pocket {
            gateway = gateway.with_provider(Arc::new(PocketAdapter::new(client)));
        }
        if let Some(client) = clients.simple {
            gateway = gateway.with_provider(Arc::new(SimpleAdapter::new(client)));
        }
        if let Some(client) = clients.balc {
            gateway = gateway.with_provider(Arc::new(BalcCreditAdapter::new(client)));
        }

        tracing::info!(providers = ?gateway.configured_types(), "Payment gateway ready");
        gateway
    }

    /// Validates every enabled provider record and builds its client through
    /// `connector`.
    ///
    /// Disabled records are skipped. The first validation or connection
    /// failure aborts construction.
    pub fn from_config(
        config: &GatewayConfig,
        connector: &dyn ProviderConnector,
    ) -> Result<Self, GatewayBuildError> {
        config.validate()?;

        let mut clients = ProviderClients {
            qpay_organization_sender_codes: config.qpay.organization_sender_codes,
            ..Default::default()
        };

        if config.qpay.enabled() {
            clients.qpay = Some(connect(PaymentType::QPay, connector.connect_qpay(&config.qpay))?);
        }
        if config.tokipay.enabled() {
            clients.tokipay = Some(connect(
                PaymentType::Tokipay,
                connector.connect_tokipay(&config.tokipay),
            )?);
        }
        if config.monpay.enabled() {
            clients.monpay = Some(connect(
                PaymentType::Monpay,
                connector.connect_monpay(&config.monpay),
            )?);
        }
        if config.golomt.enabled() {
            clients.golomt = Some(connect(
                PaymentType::Golomt,
                connector.connect_golomt(&config.golomt),
            )?);
        }
        if config.socialpay.enabled() {
            clients.socialpay = Some(connect(
                PaymentType::SocialPay,
                connector.connect_socialpay(&config.socialpay),
            )?);
        }
        if config.storepay.enabled() {
            clients.storepay = Some(connect(
                PaymentType::StorePay,
                connector.connect_storepay(&config.storepay),
            )?);
        }
        if config.pocket.enabled() {
            let terminal_id = config.pocket.validate()?;
            clients.pocket = Some(connect(
                PaymentType::Pocket,
                connector.connect_pocket(&config.pocket, terminal_id),
            )?);
        }
        if config.simple.enabled() {
            clients.simple = Some(connect(
                PaymentType::Simple,
                connector.connect_simple(&config.simple),
            )?);
        }
        if config.balc.enabled() {
            clients.balc = Some(connect(PaymentType::Balc, connector.connect_balc(&config.balc))?);
        }

        Ok(Self::from_clients(clients))
    }

    /// Runs the supplied factories and builds adapters from their clients.
    pub fn from_factories(factories: ProviderFactories) -> Result<Self, GatewayBuildError> {
        Ok(Self::from_clients(factories.build()?))
    }

    /// Looks up the adapter for `payment_type`.
    pub fn resolve(&self, payment_type: PaymentType) -> Result<&dyn PaymentProvider, PaymentError> {
        self.providers
            .get(&payment_type)
            .map(|provider| provider.as_ref())
            .ok_or_else(|| {
                tracing::warn!(provider = %payment_type, "No adapter configured for payment type");
                PaymentError::adapter_not_configured(payment_type)
            })
    }

    /// Looks up the adapter for a raw payment type tag.
    pub fn resolve_tag(&self, tag: &str) -> Result<&dyn PaymentProvider, PaymentError> {
        let payment_type = tag.parse::<PaymentType>().map_err(|e| {
            tracing::warn!(tag, "Unsupported payment type");
            PaymentError::from(e)
        })?;
        self.resolve(payment_type)
    }

    /// Creates an invoice with the provider named by `input.payment_type`.
    pub async fn create_invoice(
        &self,
        input: &InvoiceInput,
    ) -> Result<InvoiceResult, PaymentError> {
        self.resolve(input.payment_type)?.create_invoice(input).await
    }

    /// Checks payment status with the provider named by `input.payment_type`.
    pub async fn check_invoice(
        &self,
        input: &CheckInvoiceInput,
    ) -> Result<CheckInvoiceResult, PaymentError> {
        self.resolve(input.payment_type)?.check_invoice(input).await
    }

    /// Payment types with an adapter, in canonical order.
    pub fn configured_types(&self) -> Vec<PaymentType> {
        PaymentType::all()
            .iter()
            .copied()
            .filter(|t| self.providers.contains_key(t))
            .collect()
    }

    pub fn is_configured(&self, payment_type: PaymentType) -> bool {
        self.providers.contains_key(&payment_type)
    }
}

fn connect<C: ?Sized>(
    provider: PaymentType,
    result: Result<Arc<C>, ClientError>,
) -> Result<Arc<C>, GatewayBuildError> {
    result.map_err(|e| {
        tracing::error!(provider = %provider, error = %e, "Provider client construction failed");
        GatewayBuildError::init(provider, e)
    })
}
