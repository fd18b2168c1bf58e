//! Render the product catalog.

use anyhow::Result;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.catalog);
        return Ok(());
    }

    let categories: Vec<&str> = match args.category.as_deref() {
        Some(name) => {
            // Fails up front if the category does not exist
            ctx.catalog.get(name)?;
            vec![name]
        }
        None => ctx.catalog.categories(),
    };

    for category in categories {
        ctx.output.header(category);
        for variant in ctx.catalog.get(category)? {
            ctx.output
                .list_item(&format!("{} — {}", variant.brand, variant.unit_price));
            ctx.output.kv(
                "sizes",
                &variant
                    .sizes
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            ctx.output.kv("colors", &variant.colors.join(", "));
        }
    }

    Ok(())
}
