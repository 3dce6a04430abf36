//! In-memory entity store keyed by id
//!
//! One store is built per loaded snapshot. Mutations go through
//! `replace_*` so every view reads the same copy of an entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{KoiError, Result};

use super::{Account, Booking, Farm, FishOrder, Trip, Variety};

/// Raw entity collections as fetched from the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub trips: Vec<Trip>,
    #[serde(default)]
    pub fish_orders: Vec<FishOrder>,
    #[serde(default)]
    pub farms: Vec<Farm>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    bookings: BTreeMap<i64, Booking>,
    trips: BTreeMap<i64, Trip>,
    fish_orders: BTreeMap<i64, FishOrder>,
    farms: BTreeMap<i64, Farm>,
    varieties: BTreeMap<i64, Variety>,
    accounts: BTreeMap<i64, Account>,
}

fn keyed<T, F: Fn(&T) -> i64>(items: Vec<T>, id: F) -> BTreeMap<i64, T> {
    items.into_iter().map(|item| (id(&item), item)).collect()
}

impl EntityStore {
    /// Build a store from a snapshot. A later duplicate id replaces an earlier one.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        EntityStore {
            bookings: keyed(snapshot.bookings, |b| b.id),
            trips: keyed(snapshot.trips, |t| t.id),
            fish_orders: keyed(snapshot.fish_orders, |o| o.id),
            farms: keyed(snapshot.farms, |f| f.id),
            varieties: keyed(snapshot.varieties, |v| v.id),
            accounts: keyed(snapshot.accounts, |a| a.id),
        }
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            bookings: self.bookings(),
            trips: self.trips(),
            fish_orders: self.fish_orders(),
            farms: self.farms.values().cloned().collect(),
            varieties: self.varieties.values().cloned().collect(),
            accounts: self.accounts.values().cloned().collect(),
        }
    }

    // ===== LOOKUPS =====

    pub fn booking(&self, id: i64) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    pub fn trip(&self, id: i64) -> Option<&Trip> {
        self.trips.get(&id)
    }

    pub fn fish_order(&self, id: i64) -> Option<&FishOrder> {
        self.fish_orders.get(&id)
    }

    pub fn farm(&self, id: i64) -> Option<&Farm> {
        self.farms.get(&id)
    }

    pub fn variety(&self, id: i64) -> Option<&Variety> {
        self.varieties.get(&id)
    }

    pub fn account(&self, id: i64) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn require_booking(&self, id: i64) -> Result<&Booking> {
        self.booking(id)
            .ok_or_else(|| KoiError::NotFound(format!("booking {}", id)))
    }

    pub fn require_trip(&self, id: i64) -> Result<&Trip> {
        self.trip(id)
            .ok_or_else(|| KoiError::NotFound(format!("trip {}", id)))
    }

    pub fn require_fish_order(&self, id: i64) -> Result<&FishOrder> {
        self.fish_order(id)
            .ok_or_else(|| KoiError::NotFound(format!("fish order {}", id)))
    }

    pub fn require_account(&self, id: i64) -> Result<&Account> {
        self.account(id)
            .ok_or_else(|| KoiError::NotFound(format!("account {}", id)))
    }

    /// Fish orders placed under a booking, ordered by id
    pub fn fish_orders_for(&self, booking_id: i64) -> Vec<&FishOrder> {
        self.fish_orders
            .values()
            .filter(|o| o.booking_id == booking_id)
            .collect()
    }

    /// The booking that references a trip (lowest id wins if several do)
    pub fn booking_for_trip(&self, trip_id: i64) -> Option<&Booking> {
        self.bookings.values().find(|b| b.trip_id == Some(trip_id))
    }

    pub fn varieties_of(&self, farm_id: i64) -> Vec<&Variety> {
        match self.farm(farm_id) {
            Some(farm) => farm
                .variety_ids
                .iter()
                .filter_map(|id| self.variety(*id))
                .collect(),
            None => Vec::new(),
        }
    }

    // ===== ORDERED VIEWS =====

    pub fn bookings(&self) -> Vec<Booking> {
        self.bookings.values().cloned().collect()
    }

    pub fn trips(&self) -> Vec<Trip> {
        self.trips.values().cloned().collect()
    }

    pub fn fish_orders(&self) -> Vec<FishOrder> {
        self.fish_orders.values().cloned().collect()
    }

    pub fn farms(&self) -> Vec<Farm> {
        self.farms.values().cloned().collect()
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.values().cloned().collect()
    }

    // ===== MUTATION =====

    /// Replace (or insert) a booking, returning the previous copy
    pub fn replace_booking(&mut self, booking: Booking) -> Option<Booking> {
        self.bookings.insert(booking.id, booking)
    }

    pub fn replace_trip(&mut self, trip: Trip) -> Option<Trip> {
        self.trips.insert(trip.id, trip)
    }

    pub fn replace_fish_order(&mut self, order: FishOrder) -> Option<FishOrder> {
        self.fish_orders.insert(order.id, order)
    }
}
