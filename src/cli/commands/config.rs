//! Config command - Print the resolved configuration

use serde::Serialize;

use crate::errors::Result;
use crate::schemas::Config;

use super::{print_json, Workspace};

#[derive(Debug, Serialize)]
struct ResolvedConfig<'a> {
    root: String,
    resolved_data_dir: String,
    #[serde(flatten)]
    config: &'a Config,
}

pub async fn run(ws: &Workspace) -> Result<()> {
    print_json(&ResolvedConfig {
        root: ws.root.display().to_string(),
        resolved_data_dir: ws.data_dir.display().to_string(),
        config: &ws.config,
    })
}
