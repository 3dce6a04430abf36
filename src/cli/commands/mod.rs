//! CLI command implementations

pub mod assign;
pub mod check;
pub mod config;
pub mod export;
pub mod list;
pub mod set_status;
pub mod statuses;
pub mod summary;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::load_config;
use crate::errors::{KoiError, Result};
use crate::fs::{find_project_root, get_data_dir, load_store, resolve_cwd};
use crate::schemas::{Config, EntityKind, EntityStore};

/// Resolved project root, configuration and snapshot directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: Config,
    pub data_dir: PathBuf,
}

impl Workspace {
    /// Resolve the workspace for a command.
    ///
    /// A `--data-dir` override is relative to the working directory; the
    /// configured `data_dir` is relative to the project root.
    pub fn open(cwd: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let cwd = resolve_cwd(cwd);
        let root = find_project_root(&cwd)?;
        let config = load_config(&root)?;
        let data_dir = match data_dir {
            Some(dir) => cwd.join(dir),
            None => get_data_dir(&root, &config.data_dir),
        };
        debug!(root = %root.display(), data_dir = %data_dir.display(), "resolved workspace");
        Ok(Workspace {
            root,
            config,
            data_dir,
        })
    }

    pub async fn load_store(&self) -> Result<EntityStore> {
        load_store(&self.data_dir).await
    }
}

/// Current raw status of an entity, or `NotFound`
pub(crate) fn current_status(store: &EntityStore, kind: EntityKind, id: i64) -> Result<String> {
    let status = match kind {
        EntityKind::Booking => store.require_booking(id)?.status.clone(),
        EntityKind::Trip => store.require_trip(id)?.status.clone(),
        EntityKind::FishOrder => store.require_fish_order(id)?.status.clone(),
    };
    Ok(status.unwrap_or_default())
}

/// Pretty-print a value as JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| KoiError::InvalidJson(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
