//! Homepage restaurant listing.

use anyhow::Result;
use bite_commerce::catalog::{by_cuisine, search_restaurants, RestaurantSummary};
use bite_commerce::fixtures;

use super::RestaurantsArgs;
use crate::context::Context;

/// Run the restaurants command.
pub async fn run(args: RestaurantsArgs, ctx: &Context) -> Result<()> {
    let all = fixtures::restaurants();
    let mut shown: Vec<&RestaurantSummary> =
        search_restaurants(&all, args.search.as_deref().unwrap_or(""));
    if let Some(ref cuisine) = args.cuisine {
        let in_cuisine = by_cuisine(&all, cuisine);
        shown.retain(|r| in_cuisine.iter().any(|c| c.id == r.id));
    }
    tracing::debug!(matched = shown.len(), "filtered restaurants");

    if ctx.output.is_json() {
        ctx.output.json(&shown);
        return Ok(());
    }

    match args.search {
        Some(ref q) => ctx.output.header(&format!("Restaurants matching \"{}\"", q)),
        None => ctx.output.header("Popular Restaurants"),
    }

    if shown.is_empty() {
        ctx.output.info("No restaurants found.");
        return Ok(());
    }

    let widths = [4, 22, 10, 8, 10];
    ctx.output
        .table_row(&["ID", "NAME", "CUISINE", "RATING", "DELIVERY"], &widths);
    for r in &shown {
        let rating = format!("{} {:.1}", r.stars().render(), r.rating);
        ctx.output.table_row(
            &[r.id.as_str(), &r.name, &r.cuisine, &rating, &r.delivery_time],
            &widths,
        );
    }

    ctx.output.info("");
    let categories: Vec<String> = fixtures::cuisine_categories()
        .into_iter()
        .map(|c| c.name)
        .collect();
    ctx.output.kv("Cuisines", &categories.join(", "));
    ctx.output.info("Run `bite menu <ID>` to see a menu.");

    Ok(())
}
