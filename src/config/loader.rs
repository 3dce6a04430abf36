//! Configuration loading with defaults and environment overrides

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::{KoiError, Result};
use crate::fs;
use crate::schemas::Config;

pub const ENV_API_BASE_URL: &str = "KOI_API_BASE_URL";
pub const ENV_MEDIA_BASE_URL: &str = "KOI_MEDIA_BASE_URL";
pub const ENV_DATA_DIR: &str = "KOI_DATA_DIR";
pub const ENV_PAGE_SIZE: &str = "KOI_PAGE_SIZE";

/// Load configuration for a project, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
/// Environment variables are applied on top.
///
/// # Arguments
/// * `root` - Path to the project root
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Override config fields from `lookup`, which maps a variable name to its
/// value. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get(ENV_API_BASE_URL) {
        debug!(value = %url, "{} override", ENV_API_BASE_URL);
        config.api_base_url = url;
    }
    if let Some(url) = get(ENV_MEDIA_BASE_URL) {
        debug!(value = %url, "{} override", ENV_MEDIA_BASE_URL);
        config.media_base_url = url;
    }
    if let Some(dir) = get(ENV_DATA_DIR) {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(raw) = get(ENV_PAGE_SIZE) {
        config.page_size = raw.trim().parse().map_err(|_| {
            KoiError::ConfigError(format!(
                "{} must be a non-negative integer, got '{}'",
                ENV_PAGE_SIZE, raw
            ))
        })?;
    }

    Ok(config)
}
