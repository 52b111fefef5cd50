//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bite_commerce::StorefrontConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["bite.toml", ".bite.toml", "bite.json"];

/// Load config from a file. `.json` files are parsed as JSON, anything
/// else as TOML.
pub fn load(path: &Path) -> Result<StorefrontConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    if is_json(path) {
        StorefrontConfig::from_json_str(&content)
            .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
    } else {
        StorefrontConfig::from_toml_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }
}

/// Save config to a file.
pub fn save(config: &StorefrontConfig, path: &Path) -> Result<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        config.to_toml_string()?
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

/// Find the nearest config file walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "json")
}

/// Generate a default bite.toml config file.
pub fn generate_default_config() -> String {
    r#"# BiteDash storefront configuration
#
# Every value below is the built-in default; delete a line to keep it.

# Tracing filter used when RUST_LOG is unset.
# log_filter = "bite_commerce=debug"

[storefront]
currency = "USD"

[cart]
delivery_fee = 5.00
tax_rate = 0

[checkout]
delivery_fee = 3.50
tax_rate = 8
submit_delay_ms = 1500

[promo]
code = "SAVE10"
percent_off = 10
"#
    .to_string()
}
