//! Assign command - Put a staff account into a booking slot

use tracing::info;

use crate::domain::{assign_staff, StaffSlot};
use crate::errors::Result;
use crate::fs::save_bookings;
use crate::schemas::{Booking, EntityStore};

use super::Workspace;

/// Assign in the store and return the updated booking
pub fn assign(
    store: &mut EntityStore,
    booking_id: i64,
    slot: StaffSlot,
    account_id: i64,
) -> Result<Booking> {
    let booking = store.require_booking(booking_id)?;
    let account = store.require_account(account_id)?;
    let updated = assign_staff(booking, slot, account)?;
    store.replace_booking(updated.clone());
    Ok(updated)
}

pub async fn run(ws: &Workspace, booking_id: i64, slot: StaffSlot, account_id: i64) -> Result<()> {
    let mut store = ws.load_store().await?;
    assign(&mut store, booking_id, slot, account_id)?;
    save_bookings(&ws.data_dir, &store.bookings())?;

    info!(booking_id, %slot, account_id, "staff assigned");
    println!("Booking {}: {} staff is now account {}", booking_id, slot, account_id);
    Ok(())
}
