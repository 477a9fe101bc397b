//! StorePay client port.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the StorePay installment client.
#[async_trait]
pub trait StorePayClient: Send + Sync {
    /// Request an installment loan; returns the loan id.
    async fn loan(&self, request: StorePayLoanRequest) -> Result<i64, ClientError>;

    /// Whether the loan request was confirmed by the customer.
    async fn loan_check(&self, id: &str) -> Result<bool, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePayLoanRequest {
    pub amount: Decimal,
    pub mobile_number: String,
    pub description: String,
}
