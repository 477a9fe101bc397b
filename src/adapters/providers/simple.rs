//! Simple adapter - hosted invoices with an expiry window.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local};

use super::{capture_raw, whole_units};
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceResult, PaymentType,
};
use crate::ports::{
    ClientError, PaymentError, PaymentProvider, SimpleClient, SimpleInvoiceData,
    SimpleInvoiceQuery, SimpleInvoiceRequest,
};

const PROVIDER: PaymentType = PaymentType::Simple;

/// Invoice lifetime when the caller gives no positive window.
const DEFAULT_EXPIRE_MINUTES: u32 = 20;

const EXPIRE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Simple implementation of `PaymentProvider`.
#[derive(Default)]
pub struct SimpleAdapter {
    client: Option<Arc<dyn SimpleClient>>,
}

impl SimpleAdapter {
    pub fn new(client: Arc<dyn SimpleClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn SimpleClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

fn expire_date(now: DateTime<Local>, minutes: Option<u32>) -> String {
    let minutes = minutes.filter(|m| *m > 0).unwrap_or(DEFAULT_EXPIRE_MINUTES);
    (now + Duration::minutes(i64::from(minutes)))
        .format(EXPIRE_DATE_FORMAT)
        .to_string()
}

#[async_trait]
impl PaymentProvider for SimpleAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let request = SimpleInvoiceRequest {
            order_id: input.uid.clone(),
            total: whole_units(PROVIDER, input.amount)?,
            expire_date: expire_date(Local::now(), input.expire_minutes),
        };

        let invoice = client.create_invoice(request).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Simple create_invoice failed"
            );
            PaymentError::from_client(PROVIDER, "create invoice", e)
        })?;

        if !invoice.success {
            tracing::warn!(
                provider = %PROVIDER,
                uid = %input.uid,
                reason = %invoice.message,
                "Simple invoice rejected"
            );
            return Err(PaymentError::from_client(
                PROVIDER,
                "create invoice",
                ClientError::rejected(None, invoice.message),
            ));
        }

        tracing::debug!(provider = %PROVIDER, uid = %input.uid, "Simple invoice created");

        Ok(InvoiceResult::pending(
            input.uid.clone(),
            capture_raw(PROVIDER, &invoice)?,
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

        let status = client
            .get_invoice(SimpleInvoiceQuery {
                order_id: input.uid.clone(),
                simple_id: String::new(),
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = %PROVIDER,
                    uid = %input.uid,
                    error = %e,
                    "Simple get_invoice failed"
                );
                PaymentError::from_client(PROVIDER, "get invoice", e)
            })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            invoice_status = %status.data.invoice_status,
            "Simple invoice checked"
        );

        Ok(CheckInvoiceResult::from_paid(
            status.data.invoice_status == SimpleInvoiceData::PAID,
        ))
    }
}
