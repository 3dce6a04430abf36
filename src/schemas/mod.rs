//! Schema types for the booking workflow
//!
//! Field names follow the camelCase JSON the booking API returns.

mod account;
mod booking;
mod config;
mod farm;
mod fish_order;
mod status;
mod store;
mod trip;

pub use account::Account;
pub use booking::Booking;
pub use config::Config;
pub use farm::{Farm, Variety};
pub use fish_order::{FishOrder, FishOrderDetail, FishPackOrderDetail};
pub use status::{BookingStatus, EntityKind, FishOrderStatus, PaymentStatus, Role, TripStatus};
pub use store::{EntityStore, Snapshot};
pub use trip::{Trip, TripDestination};
