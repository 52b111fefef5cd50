//! Order tracking page.

use anyhow::Result;
use bite_commerce::order::{Connector, OrderStatus, StageState, TrackedOrder, TrackerView};
use bite_commerce::fixtures;
use console::style;

use super::TrackArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the track command.
pub async fn run(args: TrackArgs, ctx: &Context) -> Result<()> {
    let mut order = fixtures::demo_tracked_order();
    if let Some(ref status) = args.status {
        order = order.at_status(status.parse::<OrderStatus>()?);
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "order": order,
            "view": order.view(),
            "driver_notice": order.driver_notice(),
            "shows_map_placeholder": order.shows_map_placeholder(),
            "notice": order.terminal_notice(),
        }));
        return Ok(());
    }

    render(&order, ctx);
    Ok(())
}

/// Draw the tracking page for `order`.
pub(crate) fn render(order: &TrackedOrder, ctx: &Context) {
    ctx.output.header(&format!("Tracking Order #{}", order.order_id));
    ctx.output.kv("Status", &status_badge(order.status));
    ctx.output.kv("Estimated Delivery", &order.estimated_delivery);
    ctx.output.kv("Delivering to", &order.delivery_address);
    if let Some(ref restaurant) = order.restaurant_name {
        ctx.output.kv("From", restaurant);
    }
    ctx.output.info("");

    match order.view() {
        TrackerView::Cancelled => {
            ctx.output.error("Order Cancelled");
        }
        TrackerView::Stepper { stages, progress } => {
            for stage in &stages {
                let marker = match stage.state {
                    StageState::Completed => style("●").green(),
                    StageState::Active => style("◉").cyan().bold(),
                    StageState::Pending => style("○").dim(),
                };
                let label = match stage.state {
                    StageState::Active => style(stage.label).bold(),
                    StageState::Completed => style(stage.label),
                    StageState::Pending => style(stage.label).dim(),
                };
                ctx.output.list_item(&format!("{} {}", marker, label));
                match stage.connector {
                    Some(Connector::Done) => ctx.output.list_item(&style("│").green().to_string()),
                    Some(Connector::Current) => ctx.output.list_item(&style("┊").cyan().to_string()),
                    Some(Connector::Upcoming) => ctx.output.list_item(&style("┊").dim().to_string()),
                    None => {}
                }
            }

            if let Some(percent) = progress {
                ctx.output.info("");
                let bar = ctx.output.progress(100, "Overall Progress");
                bar.set_position(u64::from(percent));
                bar.abandon();
            }
        }
    }

    if let Some(notice) = order.driver_notice() {
        ctx.output.info("");
        ctx.output.info(&notice);
    }
    if order.shows_map_placeholder() {
        ctx.output.info("Live map tracking is not available in the terminal.");
    }
    if let Some(notice) = order.terminal_notice() {
        ctx.output.info("");
        match order.status {
            OrderStatus::Cancelled => ctx.output.warn(notice),
            _ => ctx.output.success(notice),
        }
    }
}
