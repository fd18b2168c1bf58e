//! Order types.

use crate::cart::{Cart, CartLineItem};
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A confirmed order, ready to hand to an order-transmission collaborator
/// (spreadsheet export, database, fulfillment service).
///
/// This crate only produces the payload; transmitting it is the caller's
/// concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmedOrder {
    /// Human-readable order number, unique within the process.
    pub order_number: String,
    /// Customer name or code entered at confirmation.
    pub customer: String,
    /// The cart's lines at confirmation time, in cart order.
    pub line_items: Vec<CartLineItem>,
    /// Grand total across all lines.
    pub total: Money,
    /// Unix timestamp of confirmation.
    pub confirmed_at: i64,
}

impl ConfirmedOrder {
    /// Confirm the cart as an order for the given customer.
    ///
    /// Fails with `MissingCustomerId` if the identifier is blank and with
    /// `EmptyCart` if there is nothing to order; the cart is untouched in
    /// both cases. On success the cart is drained (left empty) and its
    /// lines move into the returned order.
    pub fn confirm(cart: &mut Cart, customer: impl Into<String>) -> Result<Self, StoreError> {
        let customer = customer.into();
        if customer.trim().is_empty() {
            return Err(StoreError::MissingCustomerId);
        }
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let total = cart.total()?;
        Ok(Self {
            order_number: generate_order_number(),
            customer,
            line_items: cart.take_items(),
            total,
            confirmed_at: current_timestamp(),
        })
    }
}

/// Generate an order number from the clock and an atomic counter.
fn generate_order_number() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(1);

    let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("ORD-{}-{:04}", current_timestamp(), seq)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
