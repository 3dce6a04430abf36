//! Status registry
//!
//! The single list of legal statuses per entity kind, the edges between
//! them, and which roles may set each one.
//!
//! Booking:    Requested → Pending Quote → Approved Quote → Paid Booking
//!             → On-going → Order Prepare → Completed, plus Cancelled Booking
//!             from any non-terminal status.
//! Trip:       Pending ⇄ Redo, Pending/Redo → Approved → On-going → Completed.
//! Fish order: Deposited → In Transit → Delivering → Completed, plus Canceled
//!             from any non-terminal status.

use crate::errors::{KoiError, Result};
use crate::schemas::{BookingStatus, EntityKind, FishOrderStatus, Role, TripStatus};

/// Booking labels in lifecycle order
pub const BOOKING_STATUSES: &[&str] = &[
    "Requested",
    "Pending Quote",
    "Approved Quote",
    "Paid Booking",
    "On-going",
    "Order Prepare",
    "Completed",
    "Cancelled Booking",
];

pub const TRIP_STATUSES: &[&str] = &["Pending", "Redo", "Approved", "On-going", "Completed"];

pub const FISH_ORDER_STATUSES: &[&str] =
    &["Deposited", "In Transit", "Delivering", "Completed", "Canceled"];

/// The forward path of a booking. Cancelled Booking sits outside it.
pub const BOOKING_FLOW: &[BookingStatus] = &[
    BookingStatus::Requested,
    BookingStatus::PendingQuote,
    BookingStatus::ApprovedQuote,
    BookingStatus::PaidBooking,
    BookingStatus::OnGoing,
    BookingStatus::OrderPrepare,
    BookingStatus::Completed,
];

/// Legal status labels for a kind, in lifecycle order
pub fn statuses(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Booking => BOOKING_STATUSES,
        EntityKind::Trip => TRIP_STATUSES,
        EntityKind::FishOrder => FISH_ORDER_STATUSES,
    }
}

/// Exact, case-sensitive membership test
pub fn is_valid_status(kind: EntityKind, status: &str) -> bool {
    statuses(kind).contains(&status)
}

/// Return the registry's own copy of a label, or `InvalidStatus`
pub fn normalize_status(kind: EntityKind, status: &str) -> Result<&'static str> {
    statuses(kind)
        .iter()
        .copied()
        .find(|s| *s == status)
        .ok_or_else(|| KoiError::invalid_status(kind, status))
}

/// Whether a status has no outgoing transitions
pub fn is_terminal(kind: EntityKind, status: &str) -> Result<bool> {
    Ok(match kind {
        EntityKind::Booking => status.parse::<BookingStatus>()?.is_terminal(),
        EntityKind::Trip => status.parse::<TripStatus>()?.is_terminal(),
        EntityKind::FishOrder => status.parse::<FishOrderStatus>()?.is_terminal(),
    })
}

/// Position of a booking status on the forward path.
///
/// Returns None for Cancelled Booking, which is off the path.
pub fn booking_rank(status: BookingStatus) -> Option<usize> {
    BOOKING_FLOW.iter().position(|&s| s == status)
}

// ===== EDGES =====

pub fn booking_next(current: BookingStatus) -> Vec<BookingStatus> {
    if current.is_terminal() {
        return vec![];
    }
    let mut next = Vec::with_capacity(2);
    if let Some(index) = booking_rank(current) {
        if let Some(&forward) = BOOKING_FLOW.get(index + 1) {
            next.push(forward);
        }
    }
    next.push(BookingStatus::CancelledBooking);
    next
}

pub fn trip_next(current: TripStatus) -> Vec<TripStatus> {
    match current {
        TripStatus::Pending => vec![TripStatus::Redo, TripStatus::Approved],
        TripStatus::Redo => vec![TripStatus::Pending, TripStatus::Approved],
        TripStatus::Approved => vec![TripStatus::OnGoing],
        TripStatus::OnGoing => vec![TripStatus::Completed],
        TripStatus::Completed => vec![],
    }
}

pub fn fish_order_next(current: FishOrderStatus) -> Vec<FishOrderStatus> {
    match current {
        FishOrderStatus::Deposited => vec![FishOrderStatus::InTransit, FishOrderStatus::Canceled],
        FishOrderStatus::InTransit => vec![FishOrderStatus::Delivering, FishOrderStatus::Canceled],
        FishOrderStatus::Delivering => vec![FishOrderStatus::Completed, FishOrderStatus::Canceled],
        FishOrderStatus::Completed | FishOrderStatus::Canceled => vec![],
    }
}

/// Labels reachable in one step from `current`
pub fn allowed_next(kind: EntityKind, current: &str) -> Result<Vec<&'static str>> {
    Ok(match kind {
        EntityKind::Booking => booking_next(current.parse()?)
            .into_iter()
            .map(BookingStatus::label)
            .collect(),
        EntityKind::Trip => trip_next(current.parse()?)
            .into_iter()
            .map(TripStatus::label)
            .collect(),
        EntityKind::FishOrder => fish_order_next(current.parse()?)
            .into_iter()
            .map(FishOrderStatus::label)
            .collect(),
    })
}

// ===== ROLES =====

pub fn booking_roles(status: BookingStatus) -> &'static [Role] {
    match status {
        BookingStatus::Requested => &[Role::Customer, Role::Manager],
        BookingStatus::PendingQuote => &[Role::SalesStaff, Role::Manager],
        BookingStatus::ApprovedQuote => &[Role::Customer, Role::Manager],
        BookingStatus::PaidBooking => &[Role::Customer, Role::Manager],
        BookingStatus::OnGoing => &[Role::ConsultingStaff, Role::Manager],
        BookingStatus::OrderPrepare => &[Role::ConsultingStaff, Role::Manager],
        BookingStatus::Completed => &[Role::DeliveryStaff, Role::Manager],
        BookingStatus::CancelledBooking => &[Role::Customer, Role::SalesStaff, Role::Manager],
    }
}

pub fn trip_roles(status: TripStatus) -> &'static [Role] {
    match status {
        TripStatus::Pending => &[Role::SalesStaff, Role::Manager],
        TripStatus::Redo | TripStatus::Approved => &[Role::Manager],
        TripStatus::OnGoing | TripStatus::Completed => &[Role::ConsultingStaff, Role::Manager],
    }
}

pub fn fish_order_roles(status: FishOrderStatus) -> &'static [Role] {
    match status {
        FishOrderStatus::Deposited | FishOrderStatus::Canceled => {
            &[Role::ConsultingStaff, Role::Manager]
        }
        FishOrderStatus::InTransit | FishOrderStatus::Delivering | FishOrderStatus::Completed => {
            &[Role::DeliveryStaff, Role::Manager]
        }
    }
}

/// Roles permitted to move an entity of `kind` into `status`
pub fn roles_allowed(kind: EntityKind, status: &str) -> Result<&'static [Role]> {
    Ok(match kind {
        EntityKind::Booking => booking_roles(status.parse()?),
        EntityKind::Trip => trip_roles(status.parse()?),
        EntityKind::FishOrder => fish_order_roles(status.parse()?),
    })
}

pub fn can_set(role: Role, kind: EntityKind, status: &str) -> Result<bool> {
    Ok(roles_allowed(kind, status)?.contains(&role))
}
