//! Configuration management commands.

use anyhow::{bail, Result};
use bite_commerce::StorefrontConfig;
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using built-in defaults)"),
    }

    let config = &ctx.config;

    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output.kv("currency", config.storefront.currency.code());

    ctx.output.info("");
    ctx.output.info("[cart]");
    ctx.output.kv("delivery_fee", &config.cart.delivery_fee.to_string());
    ctx.output.kv("tax_rate", &format!("{}%", config.cart.tax_rate));

    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("delivery_fee", &config.checkout.delivery_fee.to_string());
    ctx.output.kv("tax_rate", &format!("{}%", config.checkout.tax_rate));
    ctx.output
        .kv("submit_delay_ms", &config.checkout.submit_delay_ms.to_string());

    ctx.output.info("");
    ctx.output.info("[promo]");
    ctx.output.kv("code", &config.promo.code);
    ctx.output.kv("percent_off", &format!("{}%", config.promo.percent_off));

    if let Some(ref filter) = config.log_filter {
        ctx.output.info("");
        ctx.output.kv("log_filter", filter);
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("bite.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let Some(ref path) = ctx.config_path else {
        ctx.output.info("No config file found. Run `bite config init` to create one.");
        return Ok(());
    };
    ctx.output.kv("file", &path.display().to_string());

    // Loading the context already rejected unparseable files and
    // out-of-range values; these are the softer checks.
    let warnings = lint(&ctx.config);

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Settings that load fine but are probably mistakes.
fn lint(config: &StorefrontConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.checkout.submit_delay_ms > 30_000 {
        warnings.push(format!(
            "checkout.submit_delay_ms is {}ms; orders will take over 30s to place",
            config.checkout.submit_delay_ms
        ));
    }

    if config.promo.code.trim() != config.promo.code {
        warnings.push("promo.code has surrounding whitespace; codes are matched exactly".into());
    }

    if config.promo.percent_off.is_zero() {
        warnings.push("promo.percent_off is 0; the promo code will have no effect".into());
    }

    if let Some(ref filter) = config.log_filter {
        if let Err(e) = EnvFilter::try_new(filter) {
            warnings.push(format!("log_filter '{}' is not a valid filter: {}", filter, e));
        }
    }

    warnings
}
