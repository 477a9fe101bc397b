//! Payments Gateway - one invoice API over many payment providers
//!
//! This crate puts QPay, Tokipay, Monpay, Golomt, SocialPay, StorePay,
//! Pocket, Simple and Balc behind a single create/check invoice contract.
//! Callers pick a provider by [`PaymentType`](domain::invoice::PaymentType);
//! the [`Gateway`](application::Gateway) routes the call to that provider's
//! adapter.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
