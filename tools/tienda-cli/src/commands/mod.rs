//! CLI command implementations.

pub mod catalog;
pub mod shop;

use clap::Args;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Customer name or code to use at order confirmation (prompted otherwise).
    #[arg(long)]
    pub customer: Option<String>,
}
