//! Balc client port - consumer credit limit and loan issuance.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::client_error::ClientError;

/// Port for the Balc credit API.
#[async_trait]
pub trait BalcClient: Send + Sync {
    /// Current credit limit of a customer.
    async fn limit_check(&self, customer_id: u64) -> Result<BalcLimit, ClientError>;

    /// Issue a loan; the money is disbursed immediately. Returns the loan
    /// account reference.
    async fn loan(
        &self,
        amount: i64,
        description: &str,
        customer_id: u64,
    ) -> Result<String, ClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalcLimit {
    pub avail_limit: Decimal,
    #[serde(default)]
    pub total_limit: Option<Decimal>,
}
