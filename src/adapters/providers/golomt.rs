//! Golomt adapter - hosted e-commerce payment page.

use std::sync::Arc;

use async_trait::async_trait;

use super::capture_raw;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceInputError, InvoiceResult,
    PaymentType,
};
use crate::ports::{
    GolomtClient, GolomtInvoiceRequest, GolomtReturnType, PaymentError, PaymentProvider,
};

const PROVIDER: PaymentType = PaymentType::Golomt;

const CHECK_STUB_MESSAGE: &str =
    "golomt has no status lookup; settlement is reported to the callback url";

/// Golomt implementation of `PaymentProvider`.
///
/// Golomt reports settlement only to the merchant callback, so
/// `check_invoice` always answers paid without contacting the bank.
#[derive(Default)]
pub struct GolomtAdapter {
    client: Option<Arc<dyn GolomtClient>>,
}

impl GolomtAdapter {
    pub fn new(client: Arc<dyn GolomtClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn GolomtClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

/// Parses the caller's return type. Empty means the default.
fn parse_return_type(value: Option<&str>) -> Result<GolomtReturnType, InvoiceInputError> {
    match value.unwrap_or_default() {
        "" => Ok(GolomtReturnType::default()),
        "GET" | "get" => Ok(GolomtReturnType::Get),
        "POST" | "post" => Ok(GolomtReturnType::Post),
        "MOBILE" | "mobile" => Ok(GolomtReturnType::Mobile),
        other => Err(InvoiceInputError::invalid_value("return_type", other)),
    }
}

#[async_trait]
impl PaymentProvider for GolomtAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;
        let return_type = parse_return_type(input.return_type.as_deref())
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let request = GolomtInvoiceRequest {
            return_type,
            amount: input.amount,
            transaction_id: input.uid.clone(),
            callback: input.callback_url.clone().unwrap_or_default(),
        };

        let invoice = client.create_invoice(request).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Golomt create_invoice failed"
            );
            PaymentError::from_client(PROVIDER, "create invoice", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            ?return_type,
            "Golomt invoice created"
        );

        Ok(InvoiceResult::pending(
            invoice.invoice.clone(),
            capture_raw(PROVIDER, &invoice)?,
        ))
    }

    async fn check_invoice(
        &self,
        input: &CheckInvoiceInput,
    ) -> Result<CheckInvoiceResult, PaymentError> {
        self.client()?;
        tracing::warn!(
            provider = %PROVIDER,
            uid = %input.uid,
            "Golomt status lookup unavailable, reporting paid"
        );
        Ok(CheckInvoiceResult::paid().with_message(CHECK_STUB_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ClientError, GolomtInvoice, PaymentErrorCode};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubGolomt {
        requests: Mutex<Vec<GolomtInvoiceRequest>>,
    }

    #[async_trait]
    impl GolomtClient for StubGolomt {
        async fn create_invoice(
            &self,
            request: GolomtInvoiceRequest,
        ) -> Result<GolomtInvoice, ClientError> {
            let transaction_id = request.transaction_id.clone();
            self.requests.lock().unwrap().push(request);
            Ok(GolomtInvoice {
                invoice: "16787ab2c9".to_string(),
                checksum: "abc".to_string(),
                transaction_id,
            })
        }
    }

    #[test]
    fn return_type_accepts_either_case() {
        assert_eq!(parse_return_type(None).unwrap(), GolomtReturnType::Get);
        assert_eq!(parse_return_type(Some("")).unwrap(), GolomtReturnType::Get);
        assert_eq!(parse_return_type(Some("post")).unwrap(), GolomtReturnType::Post);
        assert_eq!(parse_return_type(Some("MOBILE")).unwrap(), GolomtReturnType::Mobile);
        assert!(parse_return_type(Some("Post")).is_err());
    }

    #[tokio::test]
    async fn create_maps_invoice_token() {
        let stub = Arc::new(StubGolomt::default());
        let adapter = GolomtAdapter::new(stub.clone());
        let input = InvoiceInput::new(PaymentType::Golomt, dec!(1200.50), "txn-1")
            .with_return_type("mobile")
            .with_callback_url("https://shop.mn/golomt/callback");

        let result = adapter.create_invoice(&input).await.unwrap();

        assert_eq!(result.bank_invoice_id, "16787ab2c9");
        assert!(!result.is_paid);

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].return_type, GolomtReturnType::Mobile);
        assert_eq!(requests[0].amount, dec!(1200.50));
        assert_eq!(requests[0].transaction_id, "txn-1");
        assert_eq!(requests[0].callback, "https://shop.mn/golomt/callback");
    }

    #[tokio::test]
    async fn invalid_return_type_fails_before_remote_call() {
        let stub = Arc::new(StubGolomt::default());
        let adapter = GolomtAdapter::new(stub.clone());
        let input =
            InvoiceInput::new(PaymentType::Golomt, dec!(100), "txn-2").with_return_type("PUT");

        let err = adapter.create_invoice(&input).await.unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::InvalidInput);
        assert!(err.message.contains("PUT"));
        assert!(stub.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn check_reports_paid_without_remote_call() {
        let stub = Arc::new(StubGolomt::default());
        let adapter = GolomtAdapter::new(stub.clone());

        let result = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::Golomt, "txn-1", dec!(100)))
            .await
            .unwrap();

        assert!(result.is_paid);
        assert!(result.msg.is_some());
        assert!(stub.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_adapter_rejects_check() {
        let err = GolomtAdapter::default()
            .check_invoice(&CheckInvoiceInput::new(PaymentType::Golomt, "txn-1", dec!(100)))
            .await
            .unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::AdapterNotConfigured);
    }
}
