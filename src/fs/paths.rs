//! Path resolution utilities
//!
//! Provides functions to locate the project root and construct paths
//! to the config file and the entity snapshot files.

use std::path::{Path, PathBuf};

use crate::errors::{KoiError, Result};

pub const BOOKINGS_FILE: &str = "bookings.json";
pub const TRIPS_FILE: &str = "trips.json";
pub const FISH_ORDERS_FILE: &str = "fish_orders.json";
pub const FARMS_FILE: &str = "farms.json";
pub const VARIETIES_FILE: &str = "varieties.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Find the project root: the nearest ancestor holding a .koi directory.
///
/// Falls back to `start_cwd` itself when no ancestor has one, so a bare
/// directory of snapshot files still works with default configuration.
///
/// # Errors
/// * `FileNotFound` - If `start_cwd` cannot be resolved
pub fn find_project_root(start_cwd: &Path) -> Result<PathBuf> {
    let start = start_cwd.canonicalize().map_err(|e| {
        KoiError::FileNotFound(format!("Cannot resolve path {}: {}", start_cwd.display(), e))
    })?;

    let mut current = start.as_path();
    loop {
        if current.join(".koi").is_dir() {
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Ok(start),
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .koi directory.
pub fn get_koi_dir(root: &Path) -> PathBuf {
    root.join(".koi")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_koi_dir(root).join("config.json")
}

/// Resolve the snapshot directory; relative paths hang off the root.
pub fn get_data_dir(root: &Path, data_dir: &Path) -> PathBuf {
    if data_dir.is_absolute() {
        data_dir.to_path_buf()
    } else {
        root.join(data_dir)
    }
}
