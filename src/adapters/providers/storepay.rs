//! StorePay adapter - in-store installment loans.

use std::sync::Arc;

use async_trait::async_trait;

use super::capture_raw;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceInputError, InvoiceResult,
    PaymentType,
};
use crate::ports::{PaymentError, PaymentProvider, StorePayClient, StorePayLoanRequest};

const PROVIDER: PaymentType = PaymentType::StorePay;

/// StorePay implementation of `PaymentProvider`.
#[derive(Default)]
pub struct StorePayAdapter {
    client: Option<Arc<dyn StorePayClient>>,
}

impl StorePayAdapter {
    pub fn new(client: Arc<dyn StorePayClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn StorePayClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

#[async_trait]
impl PaymentProvider for StorePayAdapter {
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

        let loan_id = client
            .loan(StorePayLoanRequest {
                amount: input.amount,
                mobile_number: phone.to_string(),
                description: input.note_or_empty().to_string(),
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = %PROVIDER,
                    uid = %input.uid,
                    error = %e,
                    "StorePay loan failed"
                );
                PaymentError::from_client(PROVIDER, "loan", e)
            })?;

        tracing::debug!(provider = %PROVIDER, uid = %input.uid, loan_id, "StorePay loan requested");

        Ok(InvoiceResult::pending(
            loan_id.to_string(),
            capture_raw(PROVIDER, &loan_id)?,
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

        let confirmed = client.loan_check(&input.uid).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "StorePay loan_check failed"
            );
            PaymentError::from_client(PROVIDER, "loan check", e)
        })?;

        tracing::debug!(provider = %PROVIDER, uid = %input.uid, confirmed, "StorePay loan checked");

        Ok(CheckInvoiceResult::from_paid(confirmed))
    }
}
