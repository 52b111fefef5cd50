//! Cart page: view the cart and change it.

use anyhow::{bail, Context as _, Result};
use bite_commerce::cart::{controls, CartStore, CartTotals, StepOutcome};
use bite_commerce::catalog::ItemSelection;
use bite_commerce::{fixtures, LineItemId, MenuItemId, Money};
use serde::Serialize;

use super::CartArgs;
use crate::context::Context;
use crate::output::{discount, price};

/// What `--json` prints for the cart.
#[derive(Serialize)]
struct CartView<'a> {
    cart: &'a CartStore,
    totals: CartTotals,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut badge = ctx.cart.subscribe();

    ctx.cart.update(|cart| apply(&args, cart, ctx))?;

    if badge.has_changed()? {
        let snapshot = badge.borrow_and_update().clone();
        tracing::debug!(
            items = snapshot.item_count,
            lines = snapshot.line_count,
            "cart updated"
        );
    }

    ctx.cart.read(|cart| show(cart, ctx))
}

/// Apply every requested change in a fixed order.
fn apply(args: &CartArgs, cart: &mut CartStore, ctx: &Context) -> Result<()> {
    if args.clear {
        cart.clear();
        ctx.output.success("Cart emptied");
    }

    if let Some(ref item_id) = args.add {
        let restaurant = fixtures::find_restaurant(&args.restaurant)?;
        let item = restaurant.find_item(&MenuItemId::new(item_id.as_str()))?;
        let selection = selection_for(item.default_selection(), args);
        cart.add_item(item, &selection, args.qty)?;
        ctx.output
            .success(&format!("Added {} x {} to cart", args.qty, item.name));
    }

    if let Some(ref id) = args.inc {
        report_step(controls::increment(cart, &LineItemId::new(id.as_str()))?, id, ctx);
    }

    if let Some(ref id) = args.dec {
        report_step(controls::decrement(cart, &LineItemId::new(id.as_str()))?, id, ctx);
    }

    if let Some(ref spec) = args.set {
        let (id, quantity) = parse_set(spec)?;
        report_step(controls::set_quantity(cart, &id, quantity)?, id.as_str(), ctx);
    }

    if let Some(ref id) = args.remove {
        if !cart.remove_item(&LineItemId::new(id.as_str())) {
            bail!("No line {} in the cart", id);
        }
        ctx.output.success(&format!("Removed line {}", id));
    }

    if let Some(ref code) = args.promo {
        let outcome = cart.apply_promo_code(code);
        if outcome.is_applied() {
            ctx.output.success(&outcome.message());
        } else {
            ctx.output.warn(&outcome.message());
        }
    }

    Ok(())
}

fn selection_for(default: ItemSelection, args: &CartArgs) -> ItemSelection {
    let mut selection = match args.size {
        Some(ref size) => default.with_size(size.as_str()),
        None => default,
    };
    for topping in &args.topping {
        selection = selection.with_topping(topping.as_str());
    }
    selection
}

fn report_step(outcome: StepOutcome, id: &str, ctx: &Context) {
    match outcome {
        StepOutcome::Changed(q) => ctx.output.success(&format!("Line {} quantity is now {}", id, q)),
        StepOutcome::AtMinimum => ctx
            .output
            .warn(&format!("Line {} is already at 1; use --remove to delete it", id)),
        StepOutcome::AtMaximum => ctx
            .output
            .warn(&format!("Line {} is already at the maximum quantity", id)),
    }
}

/// Parse `LINE=QTY`.
fn parse_set(spec: &str) -> Result<(LineItemId, i64)> {
    let (id, quantity) = spec
        .split_once('=')
        .with_context(|| format!("Expected LINE=QTY, got '{}'", spec))?;
    let quantity = quantity
        .trim()
        .parse()
        .with_context(|| format!("Invalid quantity '{}'", quantity))?;
    Ok((LineItemId::new(id.trim()), quantity))
}

fn show(cart: &CartStore, ctx: &Context) -> Result<()> {
    let totals = cart.totals().rounded();

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            cart,
            totals: cart.totals(),
        });
        return Ok(());
    }

    ctx.output.header("Your Shopping Cart");

    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
        ctx.output.info("Run `bite restaurants` to find something to eat.");
        return Ok(());
    }

    let currency = cart.policy().currency;
    let widths = [14, 24, 4, 10];
    ctx.output.table_row(&["LINE", "ITEM", "QTY", "TOTAL"], &widths);
    for item in cart.items() {
        let line_total = Money::new(item.line_total(), currency).display();
        ctx.output.table_row(
            &[item.id.as_str(), &item.name, &item.quantity.to_string(), &line_total],
            &widths,
        );
        for option in &item.options {
            ctx.output.list_item(option);
        }
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    if totals.has_discount() {
        let code = cart.applied_promo_code().unwrap_or_default();
        ctx.output
            .kv(&format!("Discount ({})", code), &discount(&totals.discount));
    }
    ctx.output.kv("Delivery Fee", &totals.delivery_fee.display());
    if !totals.tax.is_zero() {
        ctx.output.kv("Tax", &totals.tax.display());
    }
    ctx.output.kv("Total", &price(&totals.total));
    ctx.output.kv("Items", &cart.item_count().to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        let (id, q) = parse_set("2 = 3").unwrap();
        assert_eq!(id.as_str(), "2");
        assert_eq!(q, 3);
        assert!(parse_set("2").is_err());
        assert!(parse_set("2=x").is_err());
    }

    #[test]
    fn test_parse_set_passes_zero_through_to_controls() {
        let (_, q) = parse_set("1=0").unwrap();
        assert_eq!(q, 0);
    }
}
