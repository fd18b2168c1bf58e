//! Cart and line item types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::ProductVariant;
use crate::error::StoreError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A session-scoped shopping cart.
///
/// One cart belongs to exactly one user session; the hosting layer owns the
/// instance and serializes all operations on it, so no synchronization is
/// needed here. Line items keep insertion order, and removal is positional:
/// removing a line shifts every later line down by one, so callers must not
/// cache indices across a removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
    currency: Currency,
}

impl Cart {
    /// Create a new empty cart priced in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add a selection from the catalog to the end of the cart.
    ///
    /// Validates the selection against the variant before anything changes:
    /// - `size` must be one of the variant's offered sizes
    /// - `color` must be one of the variant's offered colors
    /// - `quantity` must be at least 1
    ///
    /// The widget layer constrains these already, but the contract still
    /// rejects invalid input with `InvalidSelection` and leaves the cart
    /// untouched. Each add appends a new line; lines are never merged.
    pub fn add(
        &mut self,
        variant: &ProductVariant,
        size: u32,
        color: &str,
        quantity: u32,
    ) -> Result<(), StoreError> {
        if quantity < 1 {
            return Err(StoreError::InvalidSelection(format!(
                "quantity must be at least 1, got {}",
                quantity
            )));
        }
        if !variant.has_size(size) {
            return Err(StoreError::InvalidSelection(format!(
                "size {} is not offered for {}",
                size,
                variant.display_name()
            )));
        }
        if !variant.has_color(color) {
            return Err(StoreError::InvalidSelection(format!(
                "color {:?} is not offered for {}",
                color,
                variant.display_name()
            )));
        }
        if variant.unit_price.currency != self.currency {
            return Err(StoreError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: variant.unit_price.currency.code().to_string(),
            });
        }

        self.items.push(CartLineItem {
            category: variant.category.clone(),
            brand: variant.brand.clone(),
            size,
            color: color.to_string(),
            quantity,
            unit_price: variant.unit_price,
        });
        Ok(())
    }

    /// Remove and return the line at the given position.
    ///
    /// Lines after `index` shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<CartLineItem, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Sum of `quantity * unit_price` over all lines. Zero for an empty cart.
    pub fn total(&self) -> Result<Money, StoreError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            let subtotal = item.subtotal()?;
            total = total.try_add(&subtotal).ok_or(StoreError::Overflow)?;
        }
        Ok(total)
    }

    /// Per-line subtotals plus the cart total, the shape the cart view
    /// renders.
    pub fn pricing(&self) -> Result<CartPricing, StoreError> {
        let mut lines = Vec::with_capacity(self.items.len());
        for item in &self.items {
            lines.push(LinePricing {
                unit_price: item.unit_price,
                quantity: item.quantity,
                subtotal: item.subtotal()?,
            });
        }
        Ok(CartPricing {
            total: self.total()?,
            lines,
        })
    }

    /// Remove all lines. Called after a successful order confirmation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current lines, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of lines (not summed quantities).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currency every line in this cart is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Drain all lines out of the cart, leaving it empty.
    pub(crate) fn take_items(&mut self) -> Vec<CartLineItem> {
        std::mem::take(&mut self.items)
    }
}

/// One added selection in a cart.
///
/// The unit price is copied from the variant at add time, so later catalog
/// changes never reprice a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Category of the originating variant.
    pub category: String,
    /// Brand of the originating variant.
    pub brand: String,
    /// Chosen size (one of the variant's offered sizes).
    pub size: u32,
    /// Chosen color (one of the variant's offered colors).
    pub color: String,
    /// Units ordered, always at least 1.
    pub quantity: u32,
    /// Price per unit at add time.
    pub unit_price: Money,
}

impl CartLineItem {
    /// `quantity * unit_price`, overflow-checked.
    pub fn subtotal(&self) -> Result<Money, StoreError> {
        self.unit_price
            .try_multiply(self.quantity as i64)
            .ok_or(StoreError::Overflow)
    }

    /// Display name (e.g., "Nike - Tenis").
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.brand, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn cart_and_catalog() -> (Cart, Catalog) {
        (Cart::new(Currency::MXN), Catalog::demo())
    }

    #[test]
    fn test_add_appends_matching_line() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();

        cart.add(nike, 25, "Negro", 2).unwrap();

        assert_eq!(cart.len(), 1);
        let line = cart.items().last().unwrap();
        assert_eq!(line.category, "Tenis");
        assert_eq!(line.brand, "Nike");
        assert_eq!(line.size, 25);
        assert_eq!(line.color, "Negro");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price.amount_cents, 60000);
    }

    #[test]
    fn test_add_never_merges_lines() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();

        cart.add(nike, 25, "Negro", 1).unwrap();
        cart.add(nike, 25, "Negro", 1).unwrap();

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_rejects_unknown_size() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();

        let err = cart.add(nike, 30, "Negro", 1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSelection(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_color() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();

        let err = cart.add(nike, 25, "Verde", 1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSelection(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();

        let err = cart.add(nike, 25, "Negro", 0).unwrap_err();
        assert!(matches!(err, StoreError::InvalidSelection(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let catalog = Catalog::demo();
        let nike = catalog.variant("Tenis", "Nike").unwrap();

        let err = cart.add(nike, 25, "Negro", 1).unwrap_err();
        assert!(matches!(err, StoreError::CurrencyMismatch { .. }));
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        let (cart, _) = cart_and_catalog();
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_total_sums_line_subtotals() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        let reebok = catalog.variant("Tenis", "Reebok").unwrap();

        cart.add(nike, 25, "Negro", 2).unwrap();
        cart.add(reebok, 24, "Rojo", 1).unwrap();

        // 2 * 600.00 + 1 * 500.00
        assert_eq!(cart.total().unwrap().amount_cents, 170000);
    }

    #[test]
    fn test_remove_shifts_later_lines() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        let reebok = catalog.variant("Tenis", "Reebok").unwrap();

        cart.add(nike, 25, "Negro", 1).unwrap();
        cart.add(reebok, 24, "Rojo", 1).unwrap();

        // Removing index 0 twice drains a two-line cart.
        let first = cart.remove(0).unwrap();
        assert_eq!(first.brand, "Nike");
        let second = cart.remove(0).unwrap();
        assert_eq!(second.brand, "Reebok");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        cart.add(nike, 25, "Negro", 1).unwrap();

        let err = cart.remove(1).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IndexOutOfRange { index: 1, len: 1 }
        ));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_pricing_lines_match_items() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        cart.add(nike, 25, "Negro", 2).unwrap();

        let pricing = cart.pricing().unwrap();
        assert_eq!(pricing.lines.len(), 1);
        assert_eq!(pricing.lines[0].subtotal.amount_cents, 120000);
        assert_eq!(pricing.total.amount_cents, 120000);
    }

    #[test]
    fn test_clear() {
        let (mut cart, catalog) = cart_and_catalog();
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        cart.add(nike, 25, "Negro", 1).unwrap();

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_subtotal_overflow() {
        let line = CartLineItem {
            category: "Tenis".into(),
            brand: "Nike".into(),
            size: 25,
            color: "Negro".into(),
            quantity: u32::MAX,
            unit_price: Money::new(i64::MAX, Currency::MXN),
        };
        assert!(matches!(line.subtotal(), Err(StoreError::Overflow)));
    }
}
