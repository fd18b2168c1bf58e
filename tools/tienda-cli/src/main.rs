//! Tienda CLI - Interactive storefront over the tienda-commerce core.
//!
//! Commands:
//! - `tienda catalog` - Render the product catalog
//! - `tienda shop` - Run an interactive shopping session

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CatalogArgs, ShopArgs};

/// Tienda CLI - Browse the catalog and place orders from the terminal
#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Catalog definition file (TOML or JSON); defaults to the built-in demo catalog
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the product catalog
    Catalog(CatalogArgs),

    /// Run an interactive shopping session
    Shop(ShopArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load the catalog the session sells from
    let ctx = context::Context::load(cli.catalog.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Shop(args) => commands::shop::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
