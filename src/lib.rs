//! Koi workflow - booking, trip and fish-order status rules for the koi import dashboards
//!
//! This library provides the core functionality for the koi CLI, including:
//! - Schema definitions for bookings, trips, fish orders, farms and accounts
//! - The status registry, transition validator and staff assignment rules
//! - Aggregation helpers for dashboards (counts, sums, search, sort)
//! - CSV export
//! - File system utilities for loading and saving entity snapshots

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use domain::{validate_transition, Decision, TransitionContext};
pub use errors::{KoiError, Result};
pub use schemas::{
    Booking, BookingStatus, Config, EntityKind, EntityStore, FishOrder, FishOrderStatus, Role,
    Trip, TripStatus,
};
