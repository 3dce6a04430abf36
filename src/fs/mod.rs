//! File system utilities
//!
//! Provides path resolution, JSON file operations and snapshot loading.

mod json;
mod paths;
mod snapshot;

pub use json::{read_config, read_json, write_json};
pub use paths::{
    find_project_root, get_config_path, get_data_dir, get_koi_dir, resolve_cwd, ACCOUNTS_FILE,
    BOOKINGS_FILE, FARMS_FILE, FISH_ORDERS_FILE, TRIPS_FILE, VARIETIES_FILE,
};
pub use snapshot::{load_snapshot, load_store, save_bookings, save_fish_orders, save_trips};
