//! Checkout: validate the form, confirm, and place the order.

use std::path::Path;

use anyhow::{Context as _, Result};
use bite_commerce::checkout::{place_order, CheckoutForm, CheckoutSummary};
use bite_commerce::{fixtures, CommerceError};
use chrono::Local;
use dialoguer::Confirm;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::{discount, price};

/// Estimate shown for a freshly placed order.
const NEW_ORDER_ESTIMATE: &str = "Approx. 30-40 mins";

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let form = load_form(&ctx.resolve_path(&args.form))?;

    let (items, cart_promo) = if args.from_cart {
        ctx.cart.read(|cart| {
            (
                cart.items().to_vec(),
                cart.applied_promo_code().map(str::to_string),
            )
        })
    } else {
        (fixtures::checkout_items(), None)
    };
    let promo = form.promo_code.as_deref().or(cart_promo.as_deref());
    let summary = CheckoutSummary::new(&items, promo, &ctx.config.checkout_policy());

    if !ctx.output.is_json() {
        print_summary(&summary, &form, ctx);
    }

    if !args.yes && !ctx.output.is_json() {
        ctx.output.info("");
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Place order for {}?",
                summary.totals.rounded().total.display()
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let result = place_order(&form, &summary, ctx.config.submit_delay()).await;
    spinner.finish_and_clear();

    let order = match result {
        Ok(order) => order,
        Err(CommerceError::Validation(errors)) => {
            for error in errors.iter() {
                ctx.output.error(&format!("{}: {}", error.field, error.message));
            }
            return Err(CommerceError::Validation(errors).into());
        }
        Err(e) => return Err(e.into()),
    };

    if args.from_cart {
        ctx.cart.update(|cart| cart.clear());
    }

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Order placed successfully! Your order ID is {}.",
        order.order_id
    ));
    ctx.output.kv(
        "Placed at",
        &order
            .placed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
    );
    ctx.output.kv("Total", &price(&order.total.rounded()));

    super::track::render(&order.tracking(NEW_ORDER_ESTIMATE), ctx);

    Ok(())
}

/// Read a checkout form from a JSON or TOML file.
fn load_form(path: &Path) -> Result<CheckoutForm> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read checkout form: {}", path.display()))?;

    if path.extension().map_or(false, |e| e == "json") {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON form: {}", path.display()))
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML form: {}", path.display()))
    }
}

fn print_summary(summary: &CheckoutSummary, form: &CheckoutForm, ctx: &Context) {
    let totals = summary.totals.rounded();

    ctx.output.header("Order Summary");
    for line in &summary.lines {
        ctx.output.table_row(
            &[
                &format!("{} x {}", line.quantity, line.name),
                &line.line_total.display(),
            ],
            &[32, 10],
        );
    }
    ctx.output.info("");
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    if totals.has_discount() {
        ctx.output.kv("Discount", &discount(&totals.discount));
    }
    ctx.output.kv("Delivery Fee", &totals.delivery_fee.display());
    ctx.output.kv("Taxes", &totals.tax.display());
    ctx.output.kv("Total", &price(&totals.total));

    ctx.output.header("Deliver To");
    ctx.output.kv("Name", &form.address.full_name);
    ctx.output.kv("Address", &form.address.one_line());
    ctx.output.kv("Payment", &form.payment.label());
}
