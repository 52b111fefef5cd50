//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bite_commerce::cart::CartContext;
use bite_commerce::{fixtures, StorefrontConfig};

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
///
/// One invocation is one storefront session: the cart starts from the
/// placeholder items and is gone when the command exits.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// The session's cart, shared by every view.
    pub cart: CartContext,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from the given config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    pub fn load_in(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => config::find_config_file(&cwd),
        };
        let config = match config_path {
            Some(ref path) => config::load(path)?,
            None => StorefrontConfig::default(),
        };
        let cart = CartContext::new(fixtures::placeholder_cart(config.cart_policy()));

        Ok(Self {
            config,
            config_path,
            cart,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bite-ctx-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_session_cart_starts_from_placeholder() {
        let dir = scratch_dir("placeholder");
        let ctx = Context::load_in(dir.clone(), None, Output::new(false, true)).unwrap();
        let snapshot = ctx.cart.snapshot();
        assert_eq!(snapshot.line_count, 3);
        assert_eq!(snapshot.item_count, 6);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_cart_priced_with_configured_policy() {
        let dir = scratch_dir("policy");
        std::fs::write(dir.join("bite.toml"), "[cart]\ndelivery_fee = 0").unwrap();
        let ctx = Context::load_in(dir.clone(), None, Output::new(false, true)).unwrap();
        assert!(ctx.cart.snapshot().totals.delivery_fee.is_zero());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_explicit_config_path_is_relative_to_cwd() {
        let dir = scratch_dir("explicit");
        std::fs::write(dir.join("custom.toml"), "[checkout]\nsubmit_delay_ms = 0").unwrap();
        let ctx =
            Context::load_in(dir.clone(), Some("custom.toml"), Output::new(false, true)).unwrap();
        assert_eq!(ctx.config.checkout.submit_delay_ms, 0);
        assert_eq!(ctx.config_path, Some(dir.join("custom.toml")));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
