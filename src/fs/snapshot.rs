//! Loading and saving entity snapshots
//!
//! A snapshot directory holds one JSON array per collection. The six
//! files are read concurrently; the load fails as a whole if any one of
//! them fails.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::errors::{KoiError, Result};
use crate::schemas::{Booking, EntityStore, FishOrder, Snapshot, Trip};

use super::json::{parse_json, write_json};
use super::paths::{
    ACCOUNTS_FILE, BOOKINGS_FILE, FARMS_FILE, FISH_ORDERS_FILE, TRIPS_FILE, VARIETIES_FILE,
};

/// Read one collection file. A missing file is an empty collection.
async fn read_collection<T: DeserializeOwned>(path: PathBuf) -> Result<Vec<T>> {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => parse_json(&content, &path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "collection file missing, treating as empty");
            Ok(Vec::new())
        }
        Err(e) => Err(KoiError::wrap(e, format!("Reading {}", path.display()))),
    }
}

/// Load every collection in `dir` concurrently
pub async fn load_snapshot(dir: &Path) -> Result<Snapshot> {
    let (bookings, trips, fish_orders, farms, varieties, accounts) = tokio::try_join!(
        read_collection(dir.join(BOOKINGS_FILE)),
        read_collection(dir.join(TRIPS_FILE)),
        read_collection(dir.join(FISH_ORDERS_FILE)),
        read_collection(dir.join(FARMS_FILE)),
        read_collection(dir.join(VARIETIES_FILE)),
        read_collection(dir.join(ACCOUNTS_FILE)),
    )?;

    let snapshot = Snapshot {
        bookings,
        trips,
        fish_orders,
        farms,
        varieties,
        accounts,
    };
    info!(
        dir = %dir.display(),
        bookings = snapshot.bookings.len(),
        trips = snapshot.trips.len(),
        fish_orders = snapshot.fish_orders.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

pub async fn load_store(dir: &Path) -> Result<EntityStore> {
    Ok(EntityStore::from_snapshot(load_snapshot(dir).await?))
}

pub fn save_bookings(dir: &Path, bookings: &[Booking]) -> Result<()> {
    write_json(&dir.join(BOOKINGS_FILE), bookings)
}

pub fn save_trips(dir: &Path, trips: &[Trip]) -> Result<()> {
    write_json(&dir.join(TRIPS_FILE), trips)
}

pub fn save_fish_orders(dir: &Path, orders: &[FishOrder]) -> Result<()> {
    write_json(&dir.join(FISH_ORDERS_FILE), orders)
}
