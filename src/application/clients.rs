//! Client handle sets used to build a [`Gateway`](super::Gateway).
//!
//! [`ProviderClients`] holds ready client handles. [`ProviderFactories`]
//! holds closures that build them, for callers that fetch credentials from
//! somewhere other than the environment (a secret manager, for instance).
//! Any provider left as `None` gets no adapter.

use std::sync::Arc;

use super::error::GatewayBuildError;
use crate::domain::invoice::PaymentType;
use crate::ports::{
    BalcClient, ClientError, GolomtClient, MonpayClient, PocketClient, QPayClient, SimpleClient,
    SocialPayClient, StorePayClient, TokipayClient,
};

/// Builds one client handle, once.
pub type ClientFactory<C> = Box<dyn FnOnce() -> Result<Arc<C>, ClientError> + Send>;

/// Ready client handles, one optional slot per provider.
#[derive(Clone, Default)]
pub struct ProviderClients {
    pub qpay: Option<Arc<dyn QPayClient>>,
    pub tokipay: Option<Arc<dyn TokipayClient>>,
    pub monpay: Option<Arc<dyn MonpayClient>>,
    pub golomt: Option<Arc<dyn GolomtClient>>,
    pub socialpay: Option<Arc<dyn SocialPayClient>>,
    pub storepay: Option<Arc<dyn StorePayClient>>,
    pub pocket: Option<Arc<dyn PocketClient>>,
    pub simple: Option<Arc<dyn SimpleClient>>,
    pub balc: Option<Arc<dyn BalcClient>>,

    /// Route QPay sender codes through organization registration numbers.
    pub qpay_organization_sender_codes: bool,
}

impl ProviderClients {
    /// Providers that have a client handle, in canonical order.
    pub fn provided(&self) -> Vec<PaymentType> {
        PaymentType::all()
            .iter()
            .copied()
            .filter(|t| self.has(*t))
            .collect()
    }

    fn has(&self, payment_type: PaymentType) -> bool {
        match payment_type {
            PaymentType::QPay => self.qpay.is_some(),
            PaymentType::Tokipay => self.tokipay.is_some(),
            PaymentType::Monpay => self.monpay.is_some(),
            PaymentType::Golomt => self.golomt.is_some(),
            PaymentType::SocialPay => self.socialpay.is_some(),
            PaymentType::StorePay => self.storepay.is_some(),
            PaymentType::Pocket => self.pocket.is_some(),
            PaymentType::Simple => self.simple.is_some(),
            PaymentType::Balc => self.balc.is_some(),
        }
    }
}

/// Client factories, one optional slot per provider.
#[derive(Default)]
pub struct ProviderFactories {
    pub qpay: Option<ClientFactory<dyn QPayClient>>,
    pub tokipay: Option<ClientFactory<dyn TokipayClient>>,
    pub monpay: Option<ClientFactory<dyn MonpayClient>>,
    pub golomt: Option<ClientFactory<dyn GolomtClient>>,
    pub socialpay: Option<ClientFactory<dyn SocialPayClient>>,
    pub storepay: Option<ClientFactory<dyn StorePayClient>>,
    pub pocket: Option<ClientFactory<dyn PocketClient>>,
    pub simple: Option<ClientFactory<dyn SimpleClient>>,
    pub balc: Option<ClientFactory<dyn BalcClient>>,

    /// Route QPay sender codes through organization registration numbers.
    pub qpay_organization_sender_codes: bool,
}

impl ProviderFactories {
    /// Runs every supplied factory in canonical order.
    ///
    /// Stops at the first failure, wrapping it as an `init <provider>` error.
    pub fn build(self) -> Result<ProviderClients, GatewayBuildError> {
        let clients = ProviderClients {
            qpay: run(PaymentType::QPay, self.qpay)?,
            tokipay: run(PaymentType::Tokipay, self.tokipay)?,
            monpay: run(PaymentType::Monpay, self.monpay)?,
            golomt: run(PaymentType::Golomt, self.golomt)?,
            socialpay: run(PaymentType::SocialPay, self.socialpay)?,
            storepay: run(PaymentType::StorePay, self.storepay)?,
            pocket: run(PaymentType::Pocket, self.pocket)?,
            simple: run(PaymentType::Simple, self.simple)?,
            balc: run(PaymentType::Balc, self.balc)?,
            qpay_organization_sender_codes: self.qpay_organization_sender_codes,
        };

        tracing::debug!(providers = ?clients.provided(), "Client factories ran");
        Ok(clients)
    }
}

fn run<C: ?Sized>(
    provider: PaymentType,
    factory: Option<ClientFactory<C>>,
) -> Result<Option<Arc<C>>, GatewayBuildError> {
    factory
        .map(|build| {
            build().map_err(|e| {
                tracing::error!(provider = %provider, error = %e, "Client factory failed");
                GatewayBuildError::init(provider, e)
            })
        })
        .transpose()
}
