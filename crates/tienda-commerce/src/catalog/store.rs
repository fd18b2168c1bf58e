//! The catalog store: an immutable, ordered category registry.

use crate::catalog::ProductVariant;
use crate::error::StoreError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Registry of purchasable product variants, grouped by category.
///
/// Read-only after construction and safe to share across sessions. Category
/// order and variant order within a category follow insertion order, so the
/// storefront renders sections the way the catalog was defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Section {
    name: String,
    variants: Vec<ProductVariant>,
}

impl Catalog {
    /// Build a catalog from (category, variants) pairs.
    ///
    /// A repeated category name merges its variants into the first
    /// occurrence, so positional iteration over categories never sees
    /// duplicates.
    pub fn from_sections(
        sections: impl IntoIterator<Item = (String, Vec<ProductVariant>)>,
    ) -> Self {
        let mut catalog = Catalog {
            sections: Vec::new(),
        };
        for (name, variants) in sections {
            match catalog.sections.iter_mut().find(|s| s.name == name) {
                Some(existing) => existing.variants.extend(variants),
                None => catalog.sections.push(Section { name, variants }),
            }
        }
        catalog
    }

    /// Category names in definition order.
    pub fn categories(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.name.as_str()).collect()
    }

    /// Variants for a category, in definition order.
    pub fn get(&self, category: &str) -> Result<&[ProductVariant], StoreError> {
        self.sections
            .iter()
            .find(|s| s.name == category)
            .map(|s| s.variants.as_slice())
            .ok_or_else(|| StoreError::NotFound(category.to_string()))
    }

    /// Look up a single variant by category and brand.
    pub fn variant(&self, category: &str, brand: &str) -> Result<&ProductVariant, StoreError> {
        self.get(category)?
            .iter()
            .find(|v| v.brand == brand)
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", category, brand)))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The built-in shoe catalog used by the demo storefront.
    pub fn demo() -> Self {
        let mxn = |pesos: i64| Money::new(pesos * 100, Currency::MXN);
        let colors = |names: &[&str]| names.iter().map(|c| c.to_string()).collect::<Vec<_>>();

        Self::from_sections([
            (
                "Tenis".to_string(),
                vec![
                    ProductVariant::new(
                        "Tenis",
                        "Reebok",
                        colors(&["Rojo", "Azul", "Negro"]),
                        vec![24, 25, 26, 27],
                        mxn(500),
                    ),
                    ProductVariant::new(
                        "Tenis",
                        "Nike",
                        colors(&["Blanco", "Negro", "Rojo"]),
                        vec![24, 25, 26, 27],
                        mxn(600),
                    ),
                    ProductVariant::new(
                        "Tenis",
                        "Adidas",
                        colors(&["Negro", "Blanco", "Azul"]),
                        vec![24, 25, 26, 27],
                        mxn(550),
                    ),
                ],
            ),
            (
                "Zapatos Escolares".to_string(),
                vec![
                    ProductVariant::new(
                        "Zapatos Escolares",
                        "Nike",
                        colors(&["Blanco", "Negro"]),
                        vec![22, 23, 24, 25],
                        mxn(420),
                    ),
                    ProductVariant::new(
                        "Zapatos Escolares",
                        "Adidas",
                        colors(&["Negro", "Azul"]),
                        vec![22, 23, 24, 25],
                        mxn(450),
                    ),
                ],
            ),
            (
                "Botines de Moda".to_string(),
                vec![
                    ProductVariant::new(
                        "Botines de Moda",
                        "Puma",
                        colors(&["Negro", "Marrón", "Beige"]),
                        vec![23, 24, 25, 26],
                        mxn(620),
                    ),
                    ProductVariant::new(
                        "Botines de Moda",
                        "Reebok",
                        colors(&["Negro", "Blanco", "Gris"]),
                        vec![23, 24, 25, 26],
                        mxn(650),
                    ),
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_sections() {
        let catalog = Catalog::demo();
        assert_eq!(
            catalog.categories(),
            vec!["Tenis", "Zapatos Escolares", "Botines de Moda"]
        );
        assert_eq!(catalog.get("Tenis").unwrap().len(), 3);
        assert_eq!(catalog.get("Zapatos Escolares").unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_category() {
        let catalog = Catalog::demo();
        let err = catalog.get("Sandalias").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_variant_lookup() {
        let catalog = Catalog::demo();
        let nike = catalog.variant("Tenis", "Nike").unwrap();
        assert_eq!(nike.unit_price.amount_cents, 60000);
        assert!(nike.has_color("Negro"));

        assert!(catalog.variant("Tenis", "Converse").is_err());
    }

    #[test]
    fn test_duplicate_categories_merge() {
        let v = |brand: &str| {
            ProductVariant::new(
                "Tenis",
                brand,
                vec!["Negro".into()],
                vec![25],
                Money::new(50000, Currency::MXN),
            )
        };
        let catalog = Catalog::from_sections([
            ("Tenis".to_string(), vec![v("Reebok")]),
            ("Tenis".to_string(), vec![v("Nike")]),
        ]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Tenis").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_sections([]);
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }
}
