//! Catalog definition files.
//!
//! A catalog file replaces the built-in demo catalog:
//!
//! ```toml
//! currency = "MXN"
//!
//! [[category]]
//! name = "Tenis"
//!
//! [[category.variant]]
//! brand = "Nike"
//! colors = ["Blanco", "Negro", "Rojo"]
//! sizes = [24, 25, 26, 27]
//! price = 600.00
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use tienda_commerce::catalog::{Catalog, ProductVariant};
use tienda_commerce::{Currency, Money};

/// Parsed catalog definition file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Currency code every price is denominated in.
    #[serde(default)]
    pub currency: Option<String>,

    /// Category sections in display order.
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
}

/// One category section in a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Category name.
    pub name: String,

    /// Variants sold under this category.
    #[serde(default, rename = "variant")]
    pub variants: Vec<VariantEntry>,
}

/// One variant definition in a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantEntry {
    /// Brand name.
    pub brand: String,

    /// Colors offered, in display order.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Sizes offered, in display order.
    #[serde(default)]
    pub sizes: Vec<u32>,

    /// Unit price as a decimal amount (e.g., 600.00).
    pub price: f64,
}

impl CatalogFile {
    /// Load a catalog definition from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path))
        }
    }

    /// Convert into the immutable catalog the session sells from.
    pub fn into_catalog(self) -> Result<(Catalog, Currency)> {
        let currency = match self.currency.as_deref() {
            Some(code) => Currency::from_code(code)
                .with_context(|| format!("Unknown currency code: {}", code))?,
            None => Currency::default(),
        };

        let mut sections = Vec::with_capacity(self.categories.len());
        for category in self.categories {
            let mut variants = Vec::with_capacity(category.variants.len());
            for entry in category.variants {
                if !entry.price.is_finite() || entry.price < 0.0 {
                    bail!(
                        "Invalid price {} for {} / {}",
                        entry.price,
                        category.name,
                        entry.brand
                    );
                }
                variants.push(ProductVariant::new(
                    category.name.clone(),
                    entry.brand,
                    entry.colors,
                    entry.sizes,
                    Money::from_decimal(entry.price, currency),
                ));
            }
            sections.push((category.name, variants));
        }

        Ok((Catalog::from_sections(sections), currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_catalog_round_trip() {
        let toml = r#"
currency = "MXN"

[[category]]
name = "Tenis"

[[category.variant]]
brand = "Nike"
colors = ["Blanco", "Negro"]
sizes = [24, 25]
price = 600.00
"#;
        let file: CatalogFile = toml::from_str(toml).unwrap();
        let (catalog, currency) = file.into_catalog().unwrap();

        assert_eq!(currency, Currency::MXN);
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        assert_eq!(nike.unit_price.amount_cents, 60000);
        assert_eq!(nike.sizes, vec![24, 25]);
    }

    #[test]
    fn test_negative_price_rejected() {
        let file = CatalogFile {
            currency: None,
            categories: vec![CategoryEntry {
                name: "Tenis".into(),
                variants: vec![VariantEntry {
                    brand: "Nike".into(),
                    colors: vec![],
                    sizes: vec![],
                    price: -1.0,
                }],
            }],
        };
        assert!(file.into_catalog().is_err());
    }

    #[test]
    fn test_unknown_currency_rejected() {
        let file = CatalogFile {
            currency: Some("XYZ".into()),
            categories: vec![],
        };
        assert!(file.into_catalog().is_err());
    }
}
