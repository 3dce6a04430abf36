//! CSV export of booking and fish-order tables

use std::io::Write;

use serde::Serialize;

use crate::errors::Result;
use crate::schemas::{Booking, EntityStore, FishOrder};

#[derive(Debug, Serialize)]
struct BookingRow<'a> {
    #[serde(rename = "Booking ID")]
    id: i64,
    #[serde(rename = "Customer")]
    customer: String,
    #[serde(rename = "Status")]
    status: &'a str,
    #[serde(rename = "Created At")]
    created_at: String,
    #[serde(rename = "Trip ID")]
    trip_id: Option<i64>,
    #[serde(rename = "Fish Orders")]
    fish_orders: usize,
    #[serde(rename = "Description")]
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct FishOrderRow<'a> {
    #[serde(rename = "Order ID")]
    id: i64,
    #[serde(rename = "Booking ID")]
    booking_id: i64,
    #[serde(rename = "Farm")]
    farm: String,
    #[serde(rename = "Status")]
    status: &'a str,
    #[serde(rename = "Payment")]
    payment: &'static str,
    #[serde(rename = "Total")]
    total: f64,
    #[serde(rename = "Delivery Address")]
    delivery_address: &'a str,
}

fn customer_name(store: &EntityStore, booking: &Booking) -> String {
    booking
        .customer_id
        .and_then(|id| store.account(id))
        .map(|a| a.name.clone())
        .unwrap_or_default()
}

fn farm_name(store: &EntityStore, order: &FishOrder) -> String {
    order
        .farm_id
        .and_then(|id| store.farm(id))
        .map(|f| f.name.clone())
        .unwrap_or_default()
}

/// Write one row per booking in `bookings`, resolving names through `store`
pub fn write_bookings_csv<W: Write>(
    store: &EntityStore,
    bookings: &[Booking],
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for booking in bookings {
        wtr.serialize(BookingRow {
            id: booking.id,
            customer: customer_name(store, booking),
            status: booking.status.as_deref().unwrap_or_default(),
            created_at: booking
                .created_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            trip_id: booking.trip_id,
            fish_orders: store.fish_orders_for(booking.id).len(),
            description: booking.description.as_deref().unwrap_or_default(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_fish_orders_csv<W: Write>(
    store: &EntityStore,
    orders: &[FishOrder],
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for order in orders {
        wtr.serialize(FishOrderRow {
            id: order.id,
            booking_id: order.booking_id,
            farm: farm_name(store, order),
            status: order.status.as_deref().unwrap_or_default(),
            payment: order.payment_status.label(),
            total: order.effective_total(),
            delivery_address: order.delivery_address.as_deref().unwrap_or_default(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export every booking in the store, ordered by id
pub fn export_bookings_csv<W: Write>(store: &EntityStore, writer: W) -> Result<()> {
    write_bookings_csv(store, &store.bookings(), writer)
}

/// Export every fish order in the store, ordered by id
pub fn export_fish_orders_csv<W: Write>(store: &EntityStore, writer: W) -> Result<()> {
    write_fish_orders_csv(store, &store.fish_orders(), writer)
}
