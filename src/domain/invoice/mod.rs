//! Invoice module - the uniform request/result model shared by every provider.
//!
//! - `PaymentType` - closed set of providers, used as the dispatch key
//! - `InvoiceInput` / `InvoiceResult` - invoice creation
//! - `CheckInvoiceInput` / `CheckInvoiceResult` - payment status lookup
//! - `RawResponse` - opaque native response passthrough

mod check;
mod create;
mod errors;
mod payment_type;
mod raw;

pub use check::{CheckInvoiceInput, CheckInvoiceResult};
pub use create::{Deeplink, InvoiceInput, InvoiceResult};
pub use errors::{InvoiceInputError, UnknownPaymentType};
pub use payment_type::PaymentType;
pub use raw::RawResponse;
