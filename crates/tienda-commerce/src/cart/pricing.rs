//! Cart pricing calculations.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart, one entry per line plus the total.
///
/// `lines` follows the cart's insertion order, so line `i` here prices line
/// `i` of the cart view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Per-line pricing breakdown.
    pub lines: Vec<LinePricing>,
    /// Sum of all line subtotals.
    pub total: Money,
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}
