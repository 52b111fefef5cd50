//! Restaurant detail page.

use anyhow::Result;
use bite_commerce::{fixtures, Currency, Money};

use super::MenuArgs;
use crate::context::Context;

/// Run the menu command.
pub async fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let restaurant = fixtures::find_restaurant(&args.restaurant)?;

    if ctx.output.is_json() {
        ctx.output.json(&restaurant);
        return Ok(());
    }

    let currency: Currency = ctx.config.storefront.currency;

    ctx.output.header(&restaurant.name);
    ctx.output.kv("Cuisine", &restaurant.cuisine);
    ctx.output.kv(
        "Rating",
        &format!("{} {:.1}", restaurant.stars().render(), restaurant.rating),
    );
    ctx.output.kv("Address", &restaurant.address);
    ctx.output.kv("Hours", &restaurant.hours);
    ctx.output.kv("Phone", &restaurant.phone);

    for section in &restaurant.menu {
        ctx.output.header(&section.title);
        for item in &section.items {
            let price = Money::new(item.price, currency);
            ctx.output.table_row(&[item.id.as_str(), &item.name, &price.display()], &[8, 24, 8]);
            if let Some(ref options) = item.options {
                if !options.sizes.is_empty() {
                    ctx.output.kv("      sizes", &options.sizes.join(" | "));
                }
                if !options.toppings.is_empty() {
                    ctx.output.kv("      toppings", &options.toppings.join(", "));
                }
            }
        }
    }

    ctx.output.info("");
    ctx.output.info(&format!(
        "Add a dish with `bite cart --restaurant {} --add <ITEM>`.",
        restaurant.id
    ));

    Ok(())
}
