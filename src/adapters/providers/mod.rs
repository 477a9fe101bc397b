//! Provider adapters - one `PaymentProvider` implementation per provider.
//!
//! Each adapter exclusively owns one native client handle and translates the
//! uniform invoice contract to and from that provider's API:
//!
//! | Adapter | Create | Paid when |
//! |---------|--------|-----------|
//! | `QPayAdapter` | invoice with sender/receiver codes from uid | sum of `PAID` rows >= amount |
//! | `BalcCreditAdapter` | limit check, then loan | always (loan disbursed on create) |
//! | `MonpayAdapter` | unsupported | response code is the success code |
//! | `GolomtAdapter` | invoice with return type | always (settled via callback) |
//! | `SocialPayAdapter` | QR invoice keyed by uid | response code `00` |
//! | `StorePayAdapter` | installment loan by phone | provider boolean |
//! | `PocketAdapter` | invoice with QR and deeplink | state `paid` |
//! | `SimpleAdapter` | invoice with expiry | invoice status `PAID` |
//! | `TokiPayAdapter` | payment pushed to phone | status `COMPLETED` |
//!
//! A default-constructed adapter has no client and rejects every call with
//! an adapter-not-configured error.

mod balc;
mod golomt;
mod monpay;
mod pocket;
mod qpay;
mod simple;
mod socialpay;
mod storepay;
mod tokipay;

pub use balc::BalcCreditAdapter;
pub use golomt::GolomtAdapter;
pub use monpay::MonpayAdapter;
pub use pocket::PocketAdapter;
pub use qpay::QPayAdapter;
pub use simple::SimpleAdapter;
pub use socialpay::SocialPayAdapter;
pub use storepay::StorePayAdapter;
pub use tokipay::TokiPayAdapter;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::invoice::{PaymentType, RawResponse};
use crate::ports::PaymentError;

/// Amount in whole currency units, truncating any fraction.
fn whole_units(provider: PaymentType, amount: Decimal) -> Result<i64, PaymentError> {
    amount.trunc().to_i64().ok_or_else(|| {
        PaymentError::invalid_input(
            provider,
            format!("{} amount out of range: {}", provider, amount),
        )
    })
}

/// Capture a native response for the `raw` field.
fn capture_raw<T: Serialize>(
    provider: PaymentType,
    response: &T,
) -> Result<RawResponse, PaymentError> {
    RawResponse::document(response).map_err(|e| {
        PaymentError::invalid_response(provider, format!("{} raw response: {}", provider, e))
    })
}
