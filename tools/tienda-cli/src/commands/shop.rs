//! Interactive shopping session.
//!
//! One invocation is one session: the cart lives here, every user action
//! maps to a single domain call, and the view is re-rendered explicitly
//! afterwards. Domain errors surface as warnings and the loop continues.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};

use tienda_commerce::prelude::*;

use super::ShopArgs;
use crate::context::Context;

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and does not support --json");
    }
    if ctx.catalog.is_empty() {
        bail!("The catalog has no categories to sell from");
    }

    let mut cart = Cart::new(ctx.currency);

    ctx.output.header("Tienda");
    loop {
        let choice = Select::new()
            .with_prompt("Menu")
            .items(&["Browse catalog", "View cart", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => browse(ctx, &mut cart)?,
            1 => {
                if view_cart(ctx, &mut cart, args.customer.as_deref())? {
                    break;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// Pick a variant and selection from the catalog and add it to the cart.
fn browse(ctx: &Context, cart: &mut Cart) -> Result<()> {
    let categories = ctx.catalog.categories();
    let cat_idx = Select::new()
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;

    let variants = ctx.catalog.get(categories[cat_idx])?;
    let labels: Vec<String> = variants
        .iter()
        .map(|v| format!("{} — {}", v.brand, v.unit_price))
        .collect();
    let var_idx = Select::new()
        .with_prompt("Product")
        .items(&labels)
        .default(0)
        .interact()?;
    let variant = &variants[var_idx];

    let sizes: Vec<String> = variant.sizes.iter().map(|s| s.to_string()).collect();
    let size_idx = Select::new()
        .with_prompt("Size")
        .items(&sizes)
        .default(0)
        .interact()?;

    let color_idx = Select::new()
        .with_prompt("Color")
        .items(&variant.colors)
        .default(0)
        .interact()?;

    let quantity: u32 = Input::new()
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;

    // The widgets constrain the choices already, but the cart validates
    // again and we surface whatever it rejects.
    match cart.add(
        variant,
        variant.sizes[size_idx],
        &variant.colors[color_idx],
        quantity,
    ) {
        Ok(()) => ctx.output.success(&format!(
            "{} ({}) added to cart",
            variant.display_name(),
            variant.colors[color_idx]
        )),
        Err(e) => ctx.output.warn(&e.to_string()),
    }

    Ok(())
}

/// Render the cart and offer remove/confirm. Returns true once an order has
/// been confirmed and the session is over.
fn view_cart(ctx: &Context, cart: &mut Cart, preset_customer: Option<&str>) -> Result<bool> {
    if cart.is_empty() {
        ctx.output
            .info("Your cart is empty. Add products from the catalog.");
        return Ok(false);
    }

    render_cart(ctx, cart)?;

    let action = Select::new()
        .with_prompt("Cart")
        .items(&["Keep shopping", "Remove a line", "Confirm order"])
        .default(0)
        .interact()?;

    match action {
        1 => {
            let labels: Vec<String> = cart
                .items()
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    format!(
                        "{}. {} — size {}, {}, x{}",
                        i + 1,
                        line.display_name(),
                        line.size,
                        line.color,
                        line.quantity
                    )
                })
                .collect();
            let idx = Select::new()
                .with_prompt("Remove which line?")
                .items(&labels)
                .default(0)
                .interact()?;

            match cart.remove(idx) {
                Ok(line) => ctx
                    .output
                    .success(&format!("Removed {}", line.display_name())),
                Err(e) => ctx.output.warn(&e.to_string()),
            }
            Ok(false)
        }
        2 => {
            let customer = match preset_customer {
                Some(c) => c.to_string(),
                None => Input::<String>::new()
                    .with_prompt("Customer name or code")
                    .allow_empty(true)
                    .interact_text()?,
            };

            // Blank identifiers and empty carts are rejected here; warn and
            // let the user fix it.
            match ConfirmedOrder::confirm(cart, customer) {
                Ok(order) => {
                    ctx.output.success("Order confirmed. Thank you!");
                    ctx.output.kv("order", &order.order_number);
                    ctx.output.kv("customer", &order.customer);
                    ctx.output.kv("total", &order.total.to_string());
                    Ok(true)
                }
                Err(e) => {
                    ctx.output.warn(&e.to_string());
                    Ok(false)
                }
            }
        }
        _ => Ok(false),
    }
}

/// Print the cart view: one row per line plus the total.
fn render_cart(ctx: &Context, cart: &Cart) -> Result<()> {
    ctx.output.header("Cart");
    let pricing = cart.pricing()?;
    for (i, (line, price)) in cart.items().iter().zip(&pricing.lines).enumerate() {
        let cols = [
            format!("{}.", i + 1),
            line.display_name(),
            format!("size {}", line.size),
            line.color.clone(),
            format!("x{}", line.quantity),
            price.subtotal.to_string(),
        ];
        let cols: Vec<&str> = cols.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &[3, 28, 8, 10, 4, 10]);
    }
    ctx.output.kv("total", &pricing.total.to_string());
    Ok(())
}
