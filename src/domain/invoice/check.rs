//! Payment status lookup request and result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::InvoiceInputError;
use super::payment_type::PaymentType;

/// Request accepted by `check_invoice`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInvoiceInput {
    /// The same uid used at creation.
    pub uid: String,

    /// Originally requested amount, compared against settled rows by
    /// providers that report itemized payments.
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub payment_type: PaymentType,
}

impl CheckInvoiceInput {
    pub fn new(payment_type: PaymentType, uid: impl Into<String>, amount: Decimal) -> Self {
        Self {
            uid: uid.into(),
            amount,
            payment_type,
        }
    }

    /// Same universal invariants as creation: positive amount and non-empty uid.
    pub fn validate(&self) -> Result<(), InvoiceInputError> {
        if self.amount <= Decimal::ZERO {
            return Err(InvoiceInputError::NonPositiveAmount(self.amount.to_string()));
        }
        if self.uid.trim().is_empty() {
            return Err(InvoiceInputError::MissingUid);
        }
        Ok(())
    }
}

/// Normalized payment status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInvoiceResult {
    pub is_paid: bool,
    #[serde(default)]
    pub msg: Option<String>,
}

impl CheckInvoiceResult {
    pub fn paid() -> Self {
        Self {
            is_paid: true,
            msg: None,
        }
    }

    pub fn unpaid() -> Self {
        Self {
            is_paid: false,
            msg: None,
        }
    }

    /// Result from a boolean verdict.
    pub fn from_paid(is_paid: bool) -> Self {
        Self { is_paid, msg: None }
    }

    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }
}
