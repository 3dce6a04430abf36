//! Staff assignment for bookings
//!
//! A booking has one sales, one consulting and one delivery slot. Each slot
//! only accepts an account with the matching role.

use serde::Serialize;

use crate::errors::{KoiError, Result};
use crate::schemas::{Account, Booking, EntityStore, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffSlot {
    Sales,
    Consulting,
    Delivery,
}

impl StaffSlot {
    pub const ALL: [StaffSlot; 3] = [StaffSlot::Sales, StaffSlot::Consulting, StaffSlot::Delivery];

    pub fn required_role(self) -> Role {
        match self {
            StaffSlot::Sales => Role::SalesStaff,
            StaffSlot::Consulting => Role::ConsultingStaff,
            StaffSlot::Delivery => Role::DeliveryStaff,
        }
    }

    /// Current occupant of this slot on a booking
    pub fn assignee(self, booking: &Booking) -> Option<i64> {
        match self {
            StaffSlot::Sales => booking.sale_staff_id,
            StaffSlot::Consulting => booking.consulting_staff_id,
            StaffSlot::Delivery => booking.delivery_staff_id,
        }
    }
}

impl std::fmt::Display for StaffSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffSlot::Sales => write!(f, "sales"),
            StaffSlot::Consulting => write!(f, "consulting"),
            StaffSlot::Delivery => write!(f, "delivery"),
        }
    }
}

impl std::str::FromStr for StaffSlot {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sales" | "sale" => Ok(StaffSlot::Sales),
            "consulting" => Ok(StaffSlot::Consulting),
            "delivery" => Ok(StaffSlot::Delivery),
            _ => Err(format!("Unknown staff slot: {}", s)),
        }
    }
}

/// Put `account` into `slot` on a copy of `booking`.
///
/// Re-assigning replaces the previous occupant. Finished bookings and
/// accounts with the wrong role are `Denied`.
pub fn assign_staff(booking: &Booking, slot: StaffSlot, account: &Account) -> Result<Booking> {
    let status = booking.status()?;
    if status.is_terminal() {
        return Err(KoiError::Denied(format!(
            "booking {} is {}; staff can no longer be assigned",
            booking.id, status
        )));
    }
    if account.role != slot.required_role() {
        return Err(KoiError::Denied(format!(
            "{} is {}, but the {} slot needs {}",
            account.name,
            account.role,
            slot,
            slot.required_role()
        )));
    }

    let mut next = booking.clone();
    match slot {
        StaffSlot::Sales => next.sale_staff_id = Some(account.id),
        StaffSlot::Consulting => next.consulting_staff_id = Some(account.id),
        StaffSlot::Delivery => next.delivery_staff_id = Some(account.id),
    }
    Ok(next)
}

/// Open bookings with nobody in `slot`. Bookings whose status does not
/// parse are skipped.
pub fn unassigned_bookings(store: &EntityStore, slot: StaffSlot) -> Vec<Booking> {
    store
        .bookings()
        .into_iter()
        .filter(|b| matches!(b.status(), Ok(status) if !status.is_terminal()))
        .filter(|b| slot.assignee(b).is_none())
        .collect()
}

/// Staff accounts eligible for `slot`
pub fn candidates(store: &EntityStore, slot: StaffSlot) -> Vec<Account> {
    store
        .accounts()
        .into_iter()
        .filter(|a| a.role == slot.required_role())
        .collect()
}
