//! Domain layer containing the provider-independent payment model.
//!
//! # Module Organization
//!
//! - `invoice` - Payment types, invoice requests/results and status checks

pub mod invoice;
