//! SocialPay adapter - Golomt social QR invoices.

use std::sync::Arc;

use async_trait::async_trait;

use super::capture_raw;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceResult, PaymentType,
};
use crate::ports::{
    PaymentError, PaymentProvider, SocialPayClient, SocialPayInvoiceRequest, SocialPayResponse,
};

const PROVIDER: PaymentType = PaymentType::SocialPay;

/// SocialPay implementation of `PaymentProvider`.
#[derive(Default)]
pub struct SocialPayAdapter {
    client: Option<Arc<dyn SocialPayClient>>,
}

impl SocialPayAdapter {
    pub fn new(client: Arc<dyn SocialPayClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn SocialPayClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

#[async_trait]
impl PaymentProvider for SocialPayAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let response = client
            .create_invoice_qr(SocialPayInvoiceRequest {
                invoice: input.uid.clone(),
                amount: input.amount,
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = %PROVIDER,
                    uid = %input.uid,
                    error = %e,
                    "SocialPay create_invoice_qr failed"
                );
                PaymentError::from_client(PROVIDER, "create invoice qr", e)
            })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            response_code = %response.response_code,
            "SocialPay invoice created"
        );

        // The response carries no QR text; callers render one from the invoice reference.
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

        let response = client
            .check_invoice(SocialPayInvoiceRequest {
                invoice: input.uid.clone(),
                amount: input.amount,
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = %PROVIDER,
                    uid = %input.uid,
                    error = %e,
                    "SocialPay check_invoice failed"
                );
                PaymentError::from_client(PROVIDER, "check invoice", e)
            })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            response_code = %response.response_code,
            "SocialPay invoice checked"
        );

        Ok(CheckInvoiceResult::from_paid(
            response.response_code == SocialPayResponse::SUCCESS_CODE,
        ))
    }
}
