//! Tokipay adapter - payment requests pushed to the payer's phone.

use std::sync::Arc;

use async_trait::async_trait;

use super::{capture_raw, whole_units};
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceInputError, InvoiceResult,
    PaymentType,
};
use crate::ports::{
    PaymentError, PaymentProvider, TokipayClient, TokipayPaymentRequest, TokipayStatusData,
};

const PROVIDER: PaymentType = PaymentType::Tokipay;

/// Dialing prefix used when the caller supplies none.
const DEFAULT_COUNTRY_CODE: &str = "+976";

/// Tokipay implementation of `PaymentProvider`.
#[derive(Default)]
pub struct TokiPayAdapter {
    client: Option<Arc<dyn TokipayClient>>,
}

impl TokiPayAdapter {
    pub fn new(client: Arc<dyn TokipayClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn TokipayClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

#[async_trait]
impl PaymentProvider for TokiPayAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;
        let phone = input
            .phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                PaymentError::from_input(PROVIDER, InvoiceInputError::MissingField("phone"))
            })?;

        let request = TokipayPaymentRequest {
            order_id: input.uid.clone(),
            amount: whole_units(PROVIDER, input.amount)?,
            phone_no: phone.to_string(),
            country_code: input
                .country_code
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string()),
            notes: input.note_or_empty().to_string(),
        };

        let response = client.payment_sent_user(request).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Tokipay payment_sent_user failed"
            );
            PaymentError::from_client(PROVIDER, "send payment request", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            request_id = %response.request_id,
            "Tokipay payment request sent"
        );

        Ok(InvoiceResult::pending(
            input.uid.clone(),
            capture_raw(PROVIDER, &response)?,
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

        let status = client.payment_status(&input.uid).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Tokipay payment_status failed"
            );
            PaymentError::from_client(PROVIDER, "payment status", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            status = %status.data.status,
            "Tokipay status checked"
        );

        Ok(CheckInvoiceResult::from_paid(
            status.data.status == TokipayStatusData::COMPLETED,
        ))
    }
}
