//! Monpay adapter - wallet QR status checks.
//!
//! The Monpay library only exposes a QR generation primitive whose semantics
//! differ from an invoice, so creation is not offered here.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceResult, PaymentType,
};
use crate::ports::{MonpayCheckResponse, MonpayClient, PaymentError, PaymentProvider};

const PROVIDER: PaymentType = PaymentType::Monpay;

/// Monpay implementation of `PaymentProvider`.
#[derive(Default)]
pub struct MonpayAdapter {
    client: Option<Arc<dyn MonpayClient>>,
}

impl MonpayAdapter {
    pub fn new(client: Arc<dyn MonpayClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn MonpayClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

#[async_trait]
impl PaymentProvider for MonpayAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, _input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        Err(PaymentError::unsupported_operation(
            PROVIDER,
            "monpay create invoice is not implemented, use the Monpay QR generation API directly",
        ))
    }

    async fn check_invoice(
        &self,
        input: &CheckInvoiceInput,
    ) -> Result<CheckInvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let response = client.check_qr(&input.uid).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Monpay check_qr failed"
            );
            PaymentError::from_client(PROVIDER, "check qr", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            code = response.code,
            "Monpay QR checked"
        );

        let result =
            CheckInvoiceResult::from_paid(response.code == MonpayCheckResponse::SUCCESS_CODE);
        Ok(if response.info.is_empty() {
            result
        } else {
            result.with_message(response.info)
        })
    }
}
