//! Storefront catalog and cart domain logic for Tienda.
//!
//! This crate holds the in-memory domain core of the storefront:
//!
//! - **Catalog**: an immutable registry of product variants by category
//! - **Cart**: a session-scoped ordered list of line items
//! - **Checkout**: validation and confirmation of a cart as an order
//!
//! Rendering and order transmission live in the calling layer; everything
//! here is synchronous, in-memory, and free of IO.
//!
//! # Example
//!
//! ```rust
//! use tienda_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let mut cart = Cart::new(Currency::MXN);
//!
//! let nike = catalog.variant("Tenis", "Nike")?;
//! cart.add(nike, 25, "Negro", 2)?;
//!
//! assert_eq!(cart.total()?.display(), "$1200.00");
//!
//! let order = ConfirmedOrder::confirm(&mut cart, "Juan")?;
//! assert!(cart.is_empty());
//! assert_eq!(order.line_items.len(), 1);
//! # Ok::<(), tienda_commerce::StoreError>(())
//! ```

pub mod error;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::StoreError;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, ProductVariant};

    // Cart
    pub use crate::cart::{Cart, CartLineItem, CartPricing, LinePricing};

    // Checkout
    pub use crate::checkout::ConfirmedOrder;
}
