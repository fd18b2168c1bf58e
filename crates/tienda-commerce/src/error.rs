//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Every error is recoverable: the caller surfaces a warning and lets the
/// user retry. No operation leaves a partial side effect behind on failure.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Requested category does not exist in the catalog.
    #[error("category not found: {0}")]
    NotFound(String),

    /// Size, color, or quantity is not valid for the chosen variant.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Removal index points past the end of the cart.
    #[error("no cart line at position {index} (cart has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Order confirmation requires a customer name or code.
    #[error("customer identifier is required to confirm an order")]
    MissingCustomerId,

    /// Order confirmation requires at least one line item.
    #[error("cannot confirm an empty cart")]
    EmptyCart,

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("arithmetic overflow in money calculation")]
    Overflow,
}
