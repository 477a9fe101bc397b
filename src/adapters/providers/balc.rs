//! Balc adapter - consumer credit loans.
//!
//! Balc has no invoice concept. Creating an "invoice" checks the customer's
//! available credit and then issues a loan, which is disbursed immediately,
//! so the result is already settled and every status check answers paid.

use std::sync::Arc;

use async_trait::async_trait;

use super::whole_units;
use crate::domain::invoice::{
    CheckInvoiceInput, CheckInvoiceResult, InvoiceInput, InvoiceInputError, InvoiceResult,
    PaymentType, RawResponse,
};
use crate::ports::{BalcClient, PaymentError, PaymentProvider};

const PROVIDER: PaymentType = PaymentType::Balc;

/// Loan description sent to Balc ("Loan").
const LOAN_DESCRIPTION: &str = "Зээл";

/// Shown to the payer when the credit limit does not cover the amount.
const INSUFFICIENT_LIMIT_MESSAGE: &str = "таны кредит гүйлгээний дүнд хүрэхгүй байна";

/// Balc implementation of `PaymentProvider`.
#[derive(Default)]
pub struct BalcCreditAdapter {
    client: Option<Arc<dyn BalcClient>>,
}

impl BalcCreditAdapter {
    pub fn new(client: Arc<dyn BalcClient>) -> Self {
        Self { client: Some(client) }
    }

    fn client(&self) -> Result<&dyn BalcClient, PaymentError> {
        self.client
            .as_deref()
            .ok_or_else(|| PaymentError::adapter_not_configured(PROVIDER))
    }
}

#[async_trait]
impl PaymentProvider for BalcCreditAdapter {
    fn payment_type(&self) -> PaymentType {
        PROVIDER
    }

    async fn create_invoice(&self, input: &InvoiceInput) -> Result<InvoiceResult, PaymentError> {
        let client = self.client()?;
        input
            .validate()
            .map_err(|e| PaymentError::from_input(PROVIDER, e))?;
        let customer_id = input.customer_id.ok_or_else(|| {
            PaymentError::from_input(PROVIDER, InvoiceInputError::MissingField("customer_id"))
        })?;
        let amount = whole_units(PROVIDER, input.amount)?;

        let limit = client.limit_check(customer_id).await.map_err(|e| {
            tracing::error!(
                provider = %PROVIDER,
                uid = %input.uid,
                error = %e,
                "Balc limit_check failed"
            );
            PaymentError::from_client(PROVIDER, "limit check", e)
        })?;

        if limit.avail_limit < input.amount {
            tracing::warn!(
                provider = %PROVIDER,
                uid = %input.uid,
                customer_id,
                avail_limit = %limit.avail_limit,
                amount = %input.amount,
                "Balc credit limit below amount"
            );
            return Err(PaymentError::insufficient_funds(
                PROVIDER,
                INSUFFICIENT_LIMIT_MESSAGE,
            ));
        }

        let loan_ref = client
            .loan(amount, LOAN_DESCRIPTION, customer_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    provider = %PROVIDER,
                    uid = %input.uid,
                    error = %e,
                    "Balc loan failed"
                );
                PaymentError::from_client(PROVIDER, "loan", e)
            })?;

        tracing::debug!(
            provider = %PROVIDER,
            uid = %input.uid,
            loan_ref = %loan_ref,
            "Balc loan disbursed"
        );

        Ok(InvoiceResult {
            is_paid: PROVIDER.settles_on_create(),
            ..InvoiceResult::pending(loan_ref.clone(), RawResponse::Reference(loan_ref))
        })
    }

    async fn check_invoice(
        &self,
        _input: &CheckInvoiceInput,
    ) -> Result<CheckInvoiceResult, PaymentError> {
        self.client()?;
        Ok(CheckInvoiceResult::from_paid(PROVIDER.settles_on_create()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{BalcLimit, ClientError, PaymentErrorCode};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct StubBalc {
        avail_limit: Decimal,
        limit_checks: Mutex<Vec<u64>>,
        loans: Mutex<Vec<(i64, String, u64)>>,
    }

    impl StubBalc {
        fn with_limit(avail_limit: Decimal) -> Self {
            Self {
                avail_limit,
                limit_checks: Mutex::new(Vec::new()),
                loans: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl BalcClient for StubBalc {
        async fn limit_check(&self, customer_id: u64) -> Result<BalcLimit, ClientError> {
            self.limit_checks.lock().unwrap().push(customer_id);
            Ok(BalcLimit {
                avail_limit: self.avail_limit,
                total_limit: None,
            })
        }

        async fn loan(
            &self,
            amount: i64,
            description: &str,
            customer_id: u64,
        ) -> Result<String, ClientError> {
            self.loans
                .lock()
                .unwrap()
                .push((amount, description.to_string(), customer_id));
            Ok("LN-2024-0042".to_string())
        }
    }

    fn input(amount: Decimal) -> InvoiceInput {
        InvoiceInput::new(PaymentType::Balc, amount, "bl-1").with_customer_id(77)
    }

    #[tokio::test]
    async fn insufficient_limit_never_issues_loan() {
        let stub = Arc::new(StubBalc::with_limit(dec!(99.99)));
        let adapter = BalcCreditAdapter::new(stub.clone());

        let err = adapter.create_invoice(&input(dec!(100))).await.unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::InsufficientFunds);
        assert_eq!(err.message, "таны кредит гүйлгээний дүнд хүрэхгүй байна");
        assert_eq!(*stub.limit_checks.lock().unwrap(), vec![77]);
        assert!(stub.loans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sufficient_limit_disburses_loan() {
        let stub = Arc::new(StubBalc::with_limit(dec!(100)));
        let adapter = BalcCreditAdapter::new(stub.clone());

        let result = adapter.create_invoice(&input(dec!(100))).await.unwrap();

        assert!(result.is_paid);
        assert_eq!(result.bank_invoice_id, "LN-2024-0042");
        assert_eq!(result.raw, RawResponse::reference("LN-2024-0042"));
        assert_eq!(
            *stub.loans.lock().unwrap(),
            vec![(100, "Зээл".to_string(), 77)]
        );
    }

    #[tokio::test]
    async fn customer_id_is_required() {
        let stub = Arc::new(StubBalc::with_limit(dec!(1000)));
        let adapter = BalcCreditAdapter::new(stub.clone());

        let err = adapter
            .create_invoice(&InvoiceInput::new(PaymentType::Balc, dec!(100), "bl-2"))
            .await
            .unwrap_err();

        assert_eq!(err.code, PaymentErrorCode::InvalidInput);
        assert!(err.message.contains("customer_id"));
        assert!(stub.limit_checks.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn check_always_reports_paid() {
        let adapter = BalcCreditAdapter::new(Arc::new(StubBalc::with_limit(Decimal::ZERO)));
        let result = adapter
            .check_invoice(&CheckInvoiceInput::new(PaymentType::Balc, "bl-1", dec!(100)))
            .await
            .unwrap();
        assert!(result.is_paid);
    }

    #[tokio::test]
    async fn unconfigured_adapter_rejects_create() {
        let err = BalcCreditAdapter::default()
            .create_invoice(&input(dec!(100)))
            .await
            .unwrap_err();
        assert_eq!(err.code, PaymentErrorCode::AdapterNotConfigured);
    }
}
