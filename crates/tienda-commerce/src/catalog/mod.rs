//! Product catalog module.
//!
//! Contains the immutable variant registry the storefront sells from.

mod store;
mod variant;

pub use store::Catalog;
pub use variant::ProductVariant;
