//! PaymentType enum representing the 9 supported providers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownPaymentType;

/// The 9 supported payment providers.
///
/// The wire values are routing keys that callers may persist, so they must
/// never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    #[serde(rename = "qpay")]
    QPay,
    #[serde(rename = "tokipay")]
    Tokipay,
    #[serde(rename = "monpay")]
    Monpay,
    #[serde(rename = "golomt")]
    Golomt,
    #[serde(rename = "socialpay")]
    SocialPay,
    #[serde(rename = "storepay")]
    StorePay,
    #[serde(rename = "pocket")]
    Pocket,
    #[serde(rename = "simple")]
    Simple,
    #[serde(rename = "balc")]
    Balc,
}

impl PaymentType {
    /// Returns all payment types in canonical order.
    pub fn all() -> &'static [PaymentType] {
        &[
            PaymentType::QPay,
            PaymentType::Tokipay,
            PaymentType::Monpay,
            PaymentType::Golomt,
            PaymentType::SocialPay,
            PaymentType::StorePay,
            PaymentType::Pocket,
            PaymentType::Simple,
            PaymentType::Balc,
        ]
    }

    /// Returns the stable wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::QPay => "qpay",
            PaymentType::Tokipay => "tokipay",
            PaymentType::Monpay => "monpay",
            PaymentType::Golomt => "golomt",
            PaymentType::SocialPay => "socialpay",
            PaymentType::StorePay => "storepay",
            PaymentType::Pocket => "pocket",
            PaymentType::Simple => "simple",
            PaymentType::Balc => "balc",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::QPay => "QPay",
            PaymentType::Tokipay => "Toki Pay",
            PaymentType::Monpay => "MonPay",
            PaymentType::Golomt => "Golomt E-commerce",
            PaymentType::SocialPay => "SocialPay",
            PaymentType::StorePay => "StorePay",
            PaymentType::Pocket => "Pocket",
            PaymentType::Simple => "Simple",
            PaymentType::Balc => "Balc Credit",
        }
    }

    /// Returns true if a created invoice settles synchronously.
    pub fn settles_on_create(&self) -> bool {
        matches!(self, PaymentType::Balc)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = UnknownPaymentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPaymentType(s.to_string()))
    }
}
