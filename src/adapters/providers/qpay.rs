//! QPay adapter - bank QR invoicing.
//!
//! Invoices are addressed by sender/receiver codes derived from the caller's
//! uid. Payment status comes back as itemized settlement rows, so an invoice
//! counts as paid only once the `PAID` rows add up to the requested amount.
//! This guards against partial payments.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::{capture_raw, whole_units};
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, Deeplink, InvoiceInput, InvoiceResult, PaymentType,
};
use crate::ports::{
    PaymentError, PaymentProvider, QPayClient, QPayInvoiceRequest, QPayPaymentRow,
};

const PROVIDER: PaymentType = PaymentType::QPay;

/// Sender prefix for payers without an organization code.
const PERSONAL_PREFIX: &str = "personal";

/// Invoice description shown in the payer's bank app ("Order").
const INVOICE_DESCRIPTION: &str = "Захиалга";

/// Payment rows fetched per status check.
const CHECK_PAGE_LIMIT: u32 = 100;

/// QPay implementation of `PaymentProvider`.
#[derive(Default)]
pub struct QPayAdapter {
    client: Option<Arc<dyn QPayClient>>,
    organization_sender_codes: bool,
}

impl QPayAdapter {
    pub fn new(client: Arc<dyn QPayClient>) -> Self {
        Self {
            client: Some(client),
            organization_sender_codes: false,
        }
    }

    /// Use the payer's organization registration number as the sender and
    /// receiver prefix when the payer is an organization.
    pub fn with_organization_sender_codes(mut self, enabled: bool) -> Self {
        self.organization_sender_codes = enabled;
        self
    }

    fn client(&self) -> Result<&dyn QPayClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }

    fn code_prefix<'a>(&self, input: &'a InvoiceInput) -> &'a str {
        let use_org = self.organization_sender_codes && input.is_org;
        match input.org_reg_no.as_deref() {
            Some(reg_no) if use_org && !reg_no.is_empty() => reg_no,
            _ => PERSONAL_PREFIX,
        }
    }

    fn build_request(&self, input: &InvoiceInput) -> Result<QPayInvoiceRequest, PaymentError> {
        let prefix = self.code_prefix(input);
        Ok(QPayInvoiceRequest {
            sender_code: format!("{}-{}", prefix, input.uid),
            receiver_code: prefix.to_string(),
            description: INVOICE_DESCRIPTION.to_string(),
            amount: whole_units(PROVIDER, input.amount)?,
            callback_param: HashMap::from([("payment_uid".to_string(), input.uid.clone())]),
        })
    }
}

/// Sum of amounts on rows marked paid. Rows with unparseable amounts are skipped.
fn settled_amount(rows: &[QPayPaymentRow]) -> Decimal {
    rows.iter()
        .filter(|row| row.payment_status == QPayPaymentRow::PAID)
        .filter_map(|row| Decimal::from_str(row.payment_amount.trim()).ok())
        .sum()
}

#[async_trait]
impl PaymentProvider for QPayAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;

        let request = self.build_request(input)?;
        let invoice = client.create_invoice(request).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "QPay create_invoice failed"
            );
            PaymentError::from_client(PROVIDER, "create invoice", e)
        })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            invoice_id = %invoice.invoice_id,
            "QPay invoice created"
        );

        let deeplinks = invoice
            .urls
            .iter()
            .map(|url| Deeplink {
                name: url.name.clone(),
                description: url.description.clone(),
                link: url.link.clone(),
                logo: Some(url.logo.clone()).filter(|logo| !logo.is_empty()),
            })
            .collect();

        Ok(
            InvoiceResult::pending(invoice.invoice_id.clone(), capture_raw(PROVIDER, &invoice)?)
                .with_qr_code(invoice.qr_text.clone())
                .with_deeplinks(deeplinks),
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

        let check = client
            .check_payment(&input.uid, CHECK_PAGE_LIMIT, 1)
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = %PROVIDER,
                    uid = %input.uid,
                    error = %e,
                    "QPay check_payment failed"
                );
                PaymentError::from_client(PROVIDER, "check payment", e)
            })?;

        let settled = settled_amount(&check.rows);
        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            settled = %settled,
            requested = %input.amount,
            rows = check.rows.len(),
            "QPay payment checked"
        );

        Ok(CheckInvoiceResult::from_paid(settled >= input.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ClientError, PaymentErrorCode, QPayDeeplink, QPayInvoice, QPayPaymentCheck};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubQPay {
        rows: Vec<QPayPaymentRow>,
        fail_with: Option<ClientError>,
        requests: Mutex<Vec<QPayInvoiceRequest>>,
        checks: Mutex<Vec<(String, u32, u32)>>,
    }

    #[async_trait]
    impl QPayClient for StubQPay {
        async fn create_invoice(
            &self,
            request: QPayInvoiceRequest,
        ) -> Result<QPayInvoice, ClientError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.requests.lock().unwrap().push(request);
            Ok(QPayInvoice {
                invoice_id: "inv-42".to_string(),
                qr_text: "0002010102121531...".to_string(),
                qr_image: String::new(),
                urls: vec![QPayDeeplink {
                    name: "Khan bank".to_string(),
                    description: "Хаан банк".to_string(),
                    logo: "https://qpay.mn/q/logo/khanbank.png".to_string(),
                    link: "khanbank://q?qPay_QRcode=0002".to_string(),
                }],
            })
        }

        async fn check_payment(
            &self,
            object_id: &str,
            page_limit: u32,
            page_number: u32,
        ) -> Result<QPayPaymentCheck, ClientError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.checks
                .lock()
                .unwrap()
                .push((object_id.to_string(), page_limit, page_number));
            Ok(QPayPaymentCheck {
                count: self.rows.len() as u32,
                rows: self.rows.clone(),
            })
        }
    }

    fn row(status: &str, amount: &str) -> QPayPaymentRow {
        QPayPaymentRow {
            payment_id: String::new(),
            payment_status: status.to_string(),
            payment_amount: amount.to_string(),
            payment_currency: "MNT".to_string(),
        }
    }

    fn adapter_with(stub: StubQPay) -> (QPayAdapter, Arc<StubQPay>) {
        let stub = Arc::new(stub);
        (QPayAdapter::new(stub.clone()), stub)
    }

    #[tokio::test]
    async fn create_maps_invoice_qr_and_deeplinks() {
        let (adapter, stub) = adapter_with(StubQPay::default());
        let input = InvoiceInput::new(PaymentType::QPay, dec!(1500.75), "pay-1");

        let result = adapter.create_invoice(&input).await.unwrap();

        assert_eq!(result.bank_invoice_id, "inv-42");
        assert_eq!(result.bank_qr_code.as_deref(), Some("0002010102121531..."));
        assert_eq!(result.deeplinks.len(), 1);
        assert_eq!(result.deeplinks[0].name, "Khan bank");
        assert!(result.deeplinks[0].logo.is_some());
        assert!(!result.is_paid);
        assert_eq!(result.raw.as_document().unwrap()["invoice_id"], "inv-42");

        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].sender_code, "personal-pay-1");
        assert_eq!(requests[0].receiver_code, "personal");
        assert_eq!(requests[0].amount, 1500);
        assert_eq!(requests[0].description, "Захиалга");
        assert_eq!(
            requests[0].callback_param.get("payment_uid").map(String::as_str),
            Some("pay-1")
        );
    }

    #[tokio::test]
    async fn organization_codes_apply_only_when_policy_enabled() {
        let input =
            InvoiceInput::new(PaymentType::QPay, dec!(100), "pay-2").with_organization("6543210");

        let (adapter, stub) = adapter_with(StubQPay::default());
        adapter.create_invoice(&input).await.unwrap();
        assert_eq!(stub.requests.lock().unwrap()[0].sender_code, "personal-pay-2");

        let stub = Arc::new(StubQPay::default());
        let adapter = QPayAdapter::new(stub.clone()).with_organization_sender_codes(true);
        adapter.create_invoice(&input).await.unwrap();
        let requests = stub.requests.lock().unwrap();
        assert_eq!(requests[0].sender_code, "6543210-pay-2");
        assert_eq!(requests[0].receiver_code, "6543210");
    }

    #[tokio::test]
    async fn organization_without_reg_no_stays_personal() {
        let stub = Arc::new(StubQPay::default());
        let adapter = QPayAdapter::new(stub.clone()).with_organization_sender_codes(true);
        let mut input = InvoiceInput::new(PaymentType::QPay, dec!(100), "pay-3");
        input.is_org = true;

        adapter.create_invoice(&input).await.unwrap();
        assert_eq!(stub.requests.lock().unwrap()[0].receiver_code, "personal");
    }

    #[tokio::test]
    async fn check_sums_paid_rows_against_amount() {
        let (adapter, stub) = adapter_with(StubQPay {
            rows: vec![row("PAID", "50"), row("PAID", "60")],
            ..Default::default()
        });

        let result = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::QPay, "pay-1", dec!(100)))
            .await
            .unwrap();

        assert!(result.is_paid);
        assert_eq!(stub.checks.lock().unwrap()[0], ("pay-1".to_string(), 100, 1));
    }

    #[tokio::test]
    async fn check_ignores_rows_that_are_not_paid() {
        let (adapter, _) = adapter_with(StubQPay {
            rows: vec![row("PENDING", "200")],
            ..Default::default()
        });

        let result = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::QPay, "pay-1", dec!(100)))
            .await
            .unwrap();

        assert!(!result.is_paid);
    }

    #[tokio::test]
    async fn check_partial_payment_is_unpaid() {
        let (adapter, _) = adapter_with(StubQPay {
            rows: vec![row("PAID", "40"), row("PAID", "not-a-number"), row("FAILED", "60")],
            ..Default::default()
        });

        let result = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::QPay, "pay-1", dec!(100)))
            .await
            .unwrap();

        assert!(!result.is_paid);
    }

    #[tokio::test]
    async fn transport_errors_keep_kind_and_provider() {
        let (adapter, _) = adapter_with(StubQPay {
            fail_with: Some(ClientError::network("timeout")),
            ..Default::default()
        });

        let err = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::QPay, "pay-1", dec!(100)))
            .await
            .unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::NetworkError);
        assert_eq!(err.provider, Some(PaymentType::QPay));
    }

    #[tokio::test]
    async fn unconfigured_adapter_rejects_calls() {
        let adapter = QPayAdapter::default();
        let err = adapter
            .create_invoice(&InvoiceInput::new(PaymentType::QPay, dec!(100), "pay-1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::AdapterNotConfigured);
    }

    #[tokio::test]
    async fn invalid_amount_never_reaches_provider() {
        let (adapter, stub) = adapter_with(StubQPay::default());
        let err = adapter
            .create_invoice(&InvoiceInput::new(PaymentType::QPay, dec!(0), "pay-1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::InvalidInput);
        assert!(stub.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_amount_check_is_rejected_before_lookup() {
        let (adapter, stub) = adapter_with(StubQPay::default());

        let err = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::QPay, "pay-1", dec!(0)))
            .await
            .unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::InvalidInput);
        assert!(stub.checks.lock().unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn settled_amount_counts_only_paid_rows(
            rows in proptest::collection::vec((any::<bool>(), 0u32..1_000_000), 0..20)
        ) {
            let native: Vec<QPayPaymentRow> = rows
                .iter()
                .map(|(paid, amount)| row(if *paid { "PAID" } else { "NEW" }, &amount.to_string()))
                .collect();
            let expected: u64 = rows.iter().filter(|(paid, _)| *paid).map(|(_, a)| *a as u64).sum();
            prop_assert_eq!(settled_amount(&native), Decimal::from(expected));
        }
    }
}
