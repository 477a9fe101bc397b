//! Pocket adapter - merchant wallet invoices.

use std::sync::Arc;

use async_trait::async_trait;

use super::capture_raw;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, Deeplink, InvoiceInput, InvoiceResult, PaymentType,
};
use crate::ports::{
    PaymentError, PaymentProvider, PocketClient, PocketInvoiceRequest, PocketInvoiceStatus,
};

const PROVIDER: PaymentType = PaymentType::Pocket;

const DEEPLINK_NAME: &str = "Pocket";

/// Pocket implementation of `PaymentProvider`.
#[derive(Default)]
pub struct PocketAdapter {
    client: Option<Arc<dyn PocketClient>>,
}

impl PocketAdapter {
    pub fn new(client: Arc<dyn PocketClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn PocketClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

/// Invoice info text: the note, or the caller's order reference without one.
fn info(input: &InvoiceInput) -> &str {
    input
        .note
        .as_deref()
        .filter(|n| !n.is_empty())
        .or(input.order_ref.as_deref())
        .unwrap_or_default()
}

#[async_trait]
impl PaymentProvider for PocketAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let request = PocketInvoiceRequest {
            amount: input.amount,
            order_number: input.uid.clone(),
            invoice_type: PocketInvoiceRequest::INVOICE_TYPE_ZERO.to_string(),
            channel: PocketInvoiceRequest::CHANNEL_MERCHANT.to_string(),
            info: info(input).to_string(),
        };

        let invoice = client.create_invoice(request).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Pocket create_invoice failed"
            );
            PaymentError::from_client(PROVIDER, "create invoice", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            invoice_id = invoice.id,
            "Pocket invoice created"
        );

        let deeplink = Deeplink {
            name: DEEPLINK_NAME.to_string(),
            description: DEEPLINK_NAME.to_string(),
            link: invoice.deep_link.clone(),
            logo: None,
        };

        Ok(
            InvoiceResult::pending(invoice.id.to_string(), capture_raw(PROVIDER, &invoice)?)
                .with_qr_code(invoice.qr.clone())
                .with_deeplinks(vec![deeplink]),
        )
    }

    async fn check_invoice(
        &self,
        input: &CheckInvoiceInput,
    ) -> Result<CheckInvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let status = client.check_invoice(&input.uid).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Pocket check_invoice failed"
            );
            PaymentError::from_client(PROVIDER, "check invoice", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            state = %status.state,
            "Pocket invoice checked"
        );

        Ok(CheckInvoiceResult::from_paid(
            status.state == PocketInvoiceStatus::PAID,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ClientError, PaymentErrorCode, PocketInvoice};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubPocket {
        state: String,
        fail_auth: bool,
        requests: Mutex<Vec<PocketInvoiceRequest>>,
        lookups: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PocketClient for StubPocket {
        async fn create_invoice(
            &self,
            request: PocketInvoiceRequest,
        ) -> Result<PocketInvoice, ClientError> {
            if self.fail_auth {
                return Err(ClientError::Authentication("token expired".to_string()));
            }
            self.requests.lock().unwrap().push(request);
            Ok(PocketInvoice {
                id: 5521,
                qr: "pocket-qr-text".to_string(),
                deep_link: "pocket://invoice/5521".to_string(),
            })
        }

        async fn check_invoice(
            &self,
            order_number: &str,
        ) -> Result<PocketInvoiceStatus, ClientError> {
            self.lookups.lock().unwrap().push(order_number.to_string());
            Ok(PocketInvoiceStatus {
                id: 5521,
                state: self.state.clone(),
                amount: None,
            })
        }
    }

    #[tokio::test]
    async fn create_returns_qr_and_single_deeplink() {
        let stub = Arc::new(StubPocket::default());
        let adapter = PocketAdapter::new(stub.clone());
        let input = InvoiceInput::new(PaymentType::Pocket, dec!(9900), "pk-1").with_note("coffee");

        let result = adapter.create_invoice(&input).await.unwrap();

        assert_eq!(result.bank_invoice_id, "5521");
        assert_eq!(result.bank_qr_code.as_deref(), Some("pocket-qr-text"));
        assert_eq!(
            result.deeplinks,
            vec![Deeplink {
                name: "Pocket".to_string(),
                description: "Pocket".to_string(),
                link: "pocket://invoice/5521".to_string(),
                logo: None,
            }]
        );

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].order_number, "pk-1");
        assert_eq!(requests[0].invoice_type, "ZERO");
        assert_eq!(requests[0].channel, "merchant");
        assert_eq!(requests[0].info, "coffee");
    }

    #[tokio::test]
    async fn order_reference_never_changes_the_lookup_key() {
        let stub = Arc::new(StubPocket {
            state: "paid".to_string(),
            ..Default::default()
        });
        let adapter = PocketAdapter::new(stub.clone());
        let input =
            InvoiceInput::new(PaymentType::Pocket, dec!(100), "pk-2").with_order_ref("ORD-77");

        adapter.create_invoice(&input).await.unwrap();
        let result = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::Pocket, "pk-2", dec!(100)))
            .await
            .unwrap();

        let created_under = stub.requests.lock().unwrap()[0].order_number.clone();
        let checked_under = stub.lookups.lock().unwrap()[0].clone();
        assert_eq!(created_under, checked_under);
        assert_eq!(created_under, "pk-2");
        assert_eq!(stub.requests.lock().unwrap()[0].info, "ORD-77");
        assert!(result.is_paid);
    }

    #[tokio::test]
    async fn note_takes_precedence_over_order_reference_in_info() {
        let stub = Arc::new(StubPocket::default());
        let adapter = PocketAdapter::new(stub.clone());
        let input = InvoiceInput::new(PaymentType::Pocket, dec!(100), "pk-4")
            .with_order_ref("ORD-78")
            .with_note("lunch");

        adapter.create_invoice(&input).await.unwrap();
        assert_eq!(stub.requests.lock().unwrap()[0].info, "lunch");
    }

    #[tokio::test]
    async fn authentication_failure_keeps_its_kind() {
        let adapter = PocketAdapter::new(Arc::new(StubPocket {
            fail_auth: true,
            ..Default::default()
        }));

        let err = adapter
            .create_invoice(&InvoiceInput::new(PaymentType::Pocket, dec!(100), "pk-3"))
            .await
            .unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::AuthenticationError);
        assert!(!err.retryable);
    }

    #[tokio::test]
    async fn check_compares_state_with_paid() {
        for (state, expected) in [("paid", true), ("pending", false), ("PAID", false)] {
            let stub = Arc::new(StubPocket {
                state: state.to_string(),
                ..Default::default()
            });
            let adapter = PocketAdapter::new(stub.clone());

            let result = adapter
                .check_invoice(&CheckInvoiceInput::new(PaymentType::Pocket, "pk-1", dec!(100)))
                .await
                .unwrap();

            assert_eq!(result.is_paid, expected, "state {}", state);
            assert_eq!(stub.lookups.lock().unwrap()[0], "pk-1");
        }
    }
}
