// src/core/config.rs
use crate::models::Config;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads and parses a TOML config file.
///
/// # Arguments
///
/// * `path` - Location of the config file
///
/// # Returns
///
/// * `Ok(Config)` with the roots and filter rules in file order
///
/// # Errors
///
/// This function may return an error if:
/// * The file does not exist or cannot be read
/// * The file is not valid TOML or has fields of the wrong type
#[inline]
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    debug!(
        roots = config.roots.len(),
        filters = config.filters.len(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Like [`load_config`], but a missing or broken config is logged and
/// replaced by the empty config so the run still produces an (empty) listing.
#[inline]
#[must_use]
pub fn load_config_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err:#}");
            Config::default()
        }
    }
}
