//! Shopping cart module.
//!
//! Contains the session-scoped cart, its line items, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartLineItem};
pub use pricing::{CartPricing, LinePricing};
