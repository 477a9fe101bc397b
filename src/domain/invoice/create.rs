//! Invoice creation request and normalized result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::InvoiceInputError;
use super::payment_type::PaymentType;
use super::raw::RawResponse;

/// Unified request accepted by `create_invoice`.
///
/// Only `payment_type`, `amount` and `uid` are universal. The optional
/// fields are read by the providers that need them and ignored elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInput {
    /// Provider to route to.
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// Amount to charge. Providers that take whole units truncate.
    pub amount: Decimal,

    /// Caller-supplied reference, reused by `check_invoice`.
    pub uid: String,

    /// Payer phone number (Tokipay, StorePay).
    #[serde(default)]
    pub phone: Option<String>,

    /// Phone country code (Tokipay, defaults to +976).
    #[serde(default)]
    pub country_code: Option<String>,

    /// Provider-side customer identifier (Balc).
    #[serde(default)]
    pub customer_id: Option<u64>,

    /// Whether the payer is an organization (QPay).
    #[serde(default)]
    pub is_org: bool,

    /// Organization registration number (QPay).
    #[serde(default)]
    pub org_reg_no: Option<String>,

    /// Free-text description of the invoice.
    #[serde(default)]
    pub note: Option<String>,

    /// Callback URL (Golomt).
    #[serde(default)]
    pub callback_url: Option<String>,

    /// Golomt return type: GET, POST or MOBILE.
    #[serde(default)]
    pub return_type: Option<String>,

    /// Invoice expiry window in minutes (Simple).
    #[serde(default)]
    pub expire_minutes: Option<u32>,

    /// Merchant order reference (Pocket). Informational only, never a lookup key.
    #[serde(default)]
    pub order_ref: Option<String>,
}

impl InvoiceInput {
    /// Creates an input with only the universal fields set.
    pub fn new(payment_type: PaymentType, amount: Decimal, uid: impl Into<String>) -> Self {
        Self {
            payment_type,
            amount,
            uid: uid.into(),
            phone: None,
            country_code: None,
            customer_id: None,
            is_org: false,
            org_reg_no: None,
            note: None,
            callback_url: None,
            return_type: None,
            expire_minutes: None,
            order_ref: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn with_customer_id(mut self, customer_id: u64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Marks the payer as an organization with the given registration number.
    pub fn with_organization(mut self, reg_no: impl Into<String>) -> Self {
        self.is_org = true;
        self.org_reg_no = Some(reg_no.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_expire_minutes(mut self, minutes: u32) -> Self {
        self.expire_minutes = Some(minutes);
        self
    }

    pub fn with_order_ref(mut self, order_ref: impl Into<String>) -> Self {
        self.order_ref = Some(order_ref.into());
        self
    }

    /// Checks the universal invariants: positive amount and non-empty uid.
    pub fn validate(&self) -> Result<(), InvoiceInputError> {
        if self.amount <= Decimal::ZERO {
            return Err(InvoiceInputError::NonPositiveAmount(self.amount.to_string()));
        }
        if self.uid.trim().is_empty() {
            return Err(InvoiceInputError::MissingUid);
        }
        Ok(())
    }

    /// Note text, or an empty string when none was supplied.
    pub fn note_or_empty(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}

/// A provider deeplink, usually opening a banking app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deeplink {
    pub name: String,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Normalized result of invoice creation across providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResult {
    /// Provider-assigned invoice or reference identifier.
    pub bank_invoice_id: String,

    /// QR payload, when the provider returns one.
    #[serde(default)]
    pub bank_qr_code: Option<String>,

    #[serde(default)]
    pub deeplinks: Vec<Deeplink>,

    /// True only for flows that settle during creation (Balc loans).
    pub is_paid: bool,

    /// Provider's native response, for diagnostics only.
    pub raw: RawResponse,
}

impl InvoiceResult {
    /// Creates an unpaid result with no QR code or deeplinks.
    pub fn pending(bank_invoice_id: impl Into<String>, raw: RawResponse) -> Self {
        Self {
            bank_invoice_id: bank_invoice_id.into(),
            bank_qr_code: None,
            deeplinks: Vec::new(),
            is_paid: false,
            raw,
        }
    }

    pub fn with_qr_code(mut self, qr: impl Into<String>) -> Self {
        self.bank_qr_code = Some(qr.into());
        self
    }

    pub fn with_deeplinks(mut self, deeplinks: Vec<Deeplink>) -> Self {
        self.deeplinks = deeplinks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn validate_accepts_positive_amount_and_uid() {
        let input = InvoiceInput::new(PaymentType::QPay, dec!(1000), "order-1");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_amount() {
        let input = InvoiceInput::new(PaymentType::QPay, Decimal::ZERO, "order-1");
        assert!(matches!(
            input.validate(),
            Err(InvoiceInputError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let input = InvoiceInput::new(PaymentType::QPay, dec!(-5), "order-1");
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_uid() {
        let input = InvoiceInput::new(PaymentType::QPay, dec!(10), "  ");
        assert_eq!(input.validate(), Err(InvoiceInputError::MissingUid));
    }

    #[test]
    fn with_organization_sets_flag_and_reg_no() {
        let input =
            InvoiceInput::new(PaymentType::QPay, dec!(10), "u").with_organization("1234567");
        assert!(input.is_org);
        assert_eq!(input.org_reg_no.as_deref(), Some("1234567"));
    }

    #[test]
    fn deserializes_with_type_tag_and_defaults() {
        let input: InvoiceInput = serde_json::from_value(json!({
            "type": "tokipay",
            "amount": "1500.50",
            "uid": "abc",
            "phone": "99112233"
        }))
        .unwrap();
        assert_eq!(input.payment_type, PaymentType::Tokipay);
        assert_eq!(input.amount, dec!(1500.50));
        assert_eq!(input.phone.as_deref(), Some("99112233"));
        assert!(!input.is_org);
        assert!(input.note.is_none());
    }

    #[test]
    fn result_serializes_with_compatibility_field_names() {
        let result = InvoiceResult::pending("inv-1", RawResponse::reference("inv-1"))
            .with_qr_code("qr-text")
            .with_deeplinks(vec![Deeplink {
                name: "Khan bank".into(),
                description: "Khan bank app".into(),
                link: "khanbank://q?qPay_QRcode=abc".into(),
                logo: None,
            }]);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["bank_invoice_id"], "inv-1");
        assert_eq!(value["bank_qr_code"], "qr-text");
        assert_eq!(value["deeplinks"][0]["name"], "Khan bank");
        assert_eq!(value["deeplinks"][0]["link"], "khanbank://q?qPay_QRcode=abc");
        assert_eq!(value["is_paid"], false);
        assert_eq!(value["raw"], "inv-1");
    }
}
