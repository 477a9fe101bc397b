//! Adapters - Implementations of port interfaces.
//!
//! Each provider adapter implements [`PaymentProvider`](crate::ports::PaymentProvider)
//! on top of that provider's native client port.

pub mod providers;

pub use providers::{
    BalcCreditAdapter, GolomtAdapter, MonpayAdapter, PocketAdapter, QPayAdapter, SimpleAdapter,
    SocialPayAdapter, StorePayAdapter, TokiPayAdapter,
};
