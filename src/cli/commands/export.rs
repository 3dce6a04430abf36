//! Export command - Write a table as CSV

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::cli::ExportKind;
use crate::errors::{KoiError, Result};
use crate::export::{export_bookings_csv, export_fish_orders_csv};
use crate::schemas::EntityStore;

use super::Workspace;

fn write_table<W: Write>(store: &EntityStore, kind: ExportKind, writer: W) -> Result<()> {
    match kind {
        ExportKind::Bookings => export_bookings_csv(store, writer),
        ExportKind::FishOrders => export_fish_orders_csv(store, writer),
    }
}

pub async fn run(ws: &Workspace, kind: ExportKind, output: Option<&Path>) -> Result<()> {
    let store = ws.load_store().await?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| KoiError::wrap(e, format!("Creating {}", path.display())))?;
            write_table(&store, kind, BufWriter::new(file))?;
            info!(?kind, path = %path.display(), "exported CSV");
        }
        None => write_table(&store, kind, io::stdout().lock())?,
    }
    Ok(())
}
