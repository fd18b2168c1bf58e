//! CLI execution context.

use anyhow::Result;

use tienda_commerce::catalog::Catalog;
use tienda_commerce::Currency;

use crate::config::CatalogFile;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// The catalog this session sells from.
    pub catalog: Catalog,
    /// Currency of every catalog price.
    pub currency: Currency,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context, reading the catalog from a file when one is given and
    /// falling back to the built-in demo catalog otherwise.
    pub fn load(catalog_path: Option<&str>, output: Output) -> Result<Self> {
        let (catalog, currency) = match catalog_path {
            Some(path) => {
                output.debug(&format!("Loading catalog from {}", path));
                CatalogFile::load(path)?.into_catalog()?
            }
            None => (Catalog::demo(), Currency::MXN),
        };

        Ok(Self {
            catalog,
            currency,
            output,
        })
    }
}
