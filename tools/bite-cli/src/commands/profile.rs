//! Customer profile page.

use anyhow::Result;
use bite_commerce::fixtures;
use bite_commerce::profile::UserProfile;

use super::ProfileArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the profile command.
pub async fn run(args: ProfileArgs, ctx: &Context) -> Result<()> {
    let profile = fixtures::demo_profile();

    if ctx.output.is_json() {
        if args.orders {
            ctx.output.json(&profile.recent_orders());
        } else {
            ctx.output.json(&profile);
        }
        return Ok(());
    }

    if !args.orders {
        show_details(&profile, ctx);
    }
    show_orders(&profile, ctx);

    Ok(())
}

fn show_details(profile: &UserProfile, ctx: &Context) {
    ctx.output.header(&format!("{} ({})", profile.name, profile.initials()));
    ctx.output.kv("Email", &profile.email);
    ctx.output.kv("Phone", &profile.phone);

    ctx.output.header("Delivery Addresses");
    for address in &profile.addresses {
        let default = if address.is_default { " (default)" } else { "" };
        ctx.output
            .list_item(&format!("{}{}", address.one_line(), default));
    }

    ctx.output.header("Payment Methods");
    for method in &profile.payment_methods {
        let default = if method.is_default() { " (default)" } else { "" };
        ctx.output.list_item(&format!("{}{}", method.label(), default));
    }
}

fn show_orders(profile: &UserProfile, ctx: &Context) {
    ctx.output.header("Order History");
    if profile.order_history.is_empty() {
        ctx.output.info("You have no past orders.");
        return;
    }

    let widths = [8, 12, 16, 10, 20];
    ctx.output
        .table_row(&["ORDER", "DATE", "ITEMS", "TOTAL", "STATUS"], &widths);
    for entry in profile.recent_orders() {
        ctx.output.table_row(
            &[
                entry.id.as_str(),
                &entry.date.format("%Y-%m-%d").to_string(),
                &entry.items,
                &entry.total.display(),
                &status_badge(entry.status),
            ],
            &widths,
        );
    }
}
