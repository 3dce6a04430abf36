//! Dashboard figures built from a loaded store

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::booking_rank;
use crate::schemas::{BookingStatus, EntityKind, EntityStore, FishOrder, FishOrderStatus, Trip};

use super::count::{count_by_status, ordered_counts, StatusCount};
use super::sum::{sum_by_key, sum_values};

const UNASSIGNED_FARM: &str = "Unassigned";
const UNSCHEDULED: &str = "Unscheduled";

fn earns(order: &FishOrder) -> bool {
    !matches!(order.status(), Ok(FishOrderStatus::Canceled))
}

/// Whether the booking behind a trip has been paid for
fn trip_is_paid(store: &EntityStore, trip: &Trip) -> bool {
    let paid = booking_rank(BookingStatus::PaidBooking);
    store
        .booking_for_trip(trip.id)
        .and_then(|b| b.status().ok())
        .map(|status| booking_rank(status) >= paid)
        .unwrap_or(false)
}

/// Fish-order revenue per farm name. Canceled orders are excluded.
pub fn revenue_by_farm(store: &EntityStore) -> BTreeMap<String, f64> {
    let orders: Vec<FishOrder> = store.fish_orders().into_iter().filter(earns).collect();
    sum_by_key(
        &orders,
        |o| match o.farm_id {
            Some(id) => store
                .farm(id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| format!("Farm #{}", id)),
            None => UNASSIGNED_FARM.to_string(),
        },
        |o| Some(o.effective_total()),
    )
}

/// Trip prices per start month ("YYYY-MM") for paid bookings
pub fn trip_revenue_by_month(store: &EntityStore) -> BTreeMap<String, f64> {
    let trips: Vec<Trip> = store
        .trips()
        .into_iter()
        .filter(|t| trip_is_paid(store, t))
        .collect();
    sum_by_key(
        &trips,
        |t| match t.start_date {
            Some(date) => date.format("%Y-%m").to_string(),
            None => UNSCHEDULED.to_string(),
        },
        |t| t.price,
    )
}

/// Paid trip prices plus every fish order that was not canceled
pub fn total_revenue(store: &EntityStore) -> f64 {
    let orders: Vec<FishOrder> = store.fish_orders().into_iter().filter(earns).collect();
    let trips: Vec<Trip> = store
        .trips()
        .into_iter()
        .filter(|t| trip_is_paid(store, t))
        .collect();
    sum_values(&orders, |o| Some(o.effective_total())) + sum_values(&trips, |t| t.price)
}

/// Everything the manager dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub bookings_by_status: Vec<StatusCount>,
    pub trips_by_status: Vec<StatusCount>,
    pub fish_orders_by_status: Vec<StatusCount>,
    pub total_revenue: f64,
    pub revenue_by_farm: BTreeMap<String, f64>,
    pub trip_revenue_by_month: BTreeMap<String, f64>,
}

impl DashboardSummary {
    pub fn from_store(store: &EntityStore) -> Self {
        let bookings = count_by_status(&store.bookings(), EntityKind::Booking);
        let trips = count_by_status(&store.trips(), EntityKind::Trip);
        let fish_orders = count_by_status(&store.fish_orders(), EntityKind::FishOrder);
        DashboardSummary {
            bookings_by_status: ordered_counts(&bookings, EntityKind::Booking),
            trips_by_status: ordered_counts(&trips, EntityKind::Trip),
            fish_orders_by_status: ordered_counts(&fish_orders, EntityKind::FishOrder),
            total_revenue: total_revenue(store),
            revenue_by_farm: revenue_by_farm(store),
            trip_revenue_by_month: trip_revenue_by_month(store),
        }
    }
}
