//! Product variant types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One brand's offering within a category, with its allowed sizes, colors,
/// and unit price.
///
/// Variants are defined at startup and never mutated. The order of `colors`
/// and `sizes` is preserved for display in selection widgets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Category this variant belongs to (e.g., "Tenis").
    pub category: String,
    /// Brand name (e.g., "Nike").
    pub brand: String,
    /// Colors offered for this variant.
    pub colors: Vec<String>,
    /// Sizes offered for this variant.
    pub sizes: Vec<u32>,
    /// Price per unit, fixed at catalog definition time.
    pub unit_price: Money,
}

impl ProductVariant {
    /// Create a new variant.
    pub fn new(
        category: impl Into<String>,
        brand: impl Into<String>,
        colors: Vec<String>,
        sizes: Vec<u32>,
        unit_price: Money,
    ) -> Self {
        Self {
            category: category.into(),
            brand: brand.into(),
            colors,
            sizes,
            unit_price,
        }
    }

    /// Check whether this variant is offered in the given size.
    pub fn has_size(&self, size: u32) -> bool {
        self.sizes.contains(&size)
    }

    /// Check whether this variant is offered in the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Display name (e.g., "Nike - Tenis").
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.brand, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn nike_tenis() -> ProductVariant {
        ProductVariant::new(
            "Tenis",
            "Nike",
            vec!["Blanco".into(), "Negro".into(), "Rojo".into()],
            vec![24, 25, 26, 27],
            Money::new(60000, Currency::MXN),
        )
    }

    #[test]
    fn test_has_size() {
        let v = nike_tenis();
        assert!(v.has_size(25));
        assert!(!v.has_size(30));
    }

    #[test]
    fn test_has_color() {
        let v = nike_tenis();
        assert!(v.has_color("Negro"));
        assert!(!v.has_color("Verde"));
        // Exact match, not case-insensitive
        assert!(!v.has_color("negro"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(nike_tenis().display_name(), "Nike - Tenis");
    }
}
