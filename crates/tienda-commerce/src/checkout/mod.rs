//! Checkout module.
//!
//! Turns a validated cart into a confirmed order payload.

mod order;

pub use order::ConfirmedOrder;
