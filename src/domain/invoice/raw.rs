//! Opaque passthrough of a provider's native response.
//!
//! The gateway never parses `raw`; it exists so callers can inspect what the
//! provider actually returned. Shapes per provider:
//!
//! | Provider | Shape |
//! |----------|-------|
//! | qpay, tokipay, golomt, socialpay, pocket, simple | `Document` (native response as JSON) |
//! | storepay | `Document` (the loan id as a JSON number) |
//! | balc | `Reference` (the loan account reference) |

use serde::{Deserialize, Serialize};

/// Native provider response kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    /// A bare reference string returned by the provider.
    Reference(String),

    /// A structured provider response.
    Document(serde_json::Value),
}

impl RawResponse {
    pub fn reference(value: impl Into<String>) -> Self {
        RawResponse::Reference(value.into())
    }

    /// Serializes a native response into a document.
    pub fn document<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(RawResponse::Document)
    }

    pub fn as_document(&self) -> Option<&serde_json::Value> {
        match self {
            RawResponse::Document(value) => Some(value),
            RawResponse::Reference(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Native {
        invoice_id: String,
        amount: i64,
    }

    #[test]
    fn document_keeps_native_fields() {
        let raw = RawResponse::document(&Native {
            invoice_id: "inv".into(),
            amount: 10,
        })
        .unwrap();
        assert_eq!(raw.as_document().unwrap()["invoice_id"], "inv");
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!({"invoice_id": "inv", "amount": 10}));
    }

    #[test]
    fn reference_serializes_as_plain_string() {
        let raw = RawResponse::reference("LN-1");
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!("LN-1"));
        assert!(raw.as_document().is_none());
    }
}
