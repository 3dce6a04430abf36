//! Status transition logic
//!
//! Pure functions for applying status changes to entities. Inputs are
//! never mutated; a successful transition returns a new copy.

use serde::Serialize;

use crate::errors::Result;
use crate::schemas::{
    Booking, BookingStatus, EntityStore, FishOrder, FishOrderStatus, Trip, TripStatus,
};

use super::validation::{
    validate_booking_transition, validate_fish_order_transition, validate_trip_transition,
    Decision, TransitionContext,
};

/// A follow-up change the caller may offer to the user. Never applied
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Proposal {
    /// The last open fish order of this booking just completed
    CompleteBooking { booking_id: i64 },
}

/// Result of a status transition attempt
#[derive(Debug)]
pub enum TransitionResult<T> {
    /// Successful transition with the updated entity
    Success {
        next: T,
        proposal: Option<Proposal>,
    },
    /// Failed transition with error message
    Error { error: String },
}

impl<T> TransitionResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the updated entity if the transition was successful
    pub fn entity(self) -> Option<T> {
        match self {
            TransitionResult::Success { next, .. } => Some(next),
            TransitionResult::Error { .. } => None,
        }
    }

    pub fn proposal(&self) -> Option<Proposal> {
        match self {
            TransitionResult::Success { proposal, .. } => *proposal,
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the error message if the transition failed
    pub fn error(self) -> Option<String> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }

    fn from_decision(decision: Decision, next: impl FnOnce() -> T) -> Self {
        match decision {
            Decision::Allowed => TransitionResult::Success {
                next: next(),
                proposal: None,
            },
            Decision::Denied(error) => TransitionResult::Error { error },
        }
    }
}

/// Apply a status change to a booking.
///
/// The booking's own status must parse; `InvalidStatus` and missing
/// context (`NotFound`) come back as `Err`, denials as `TransitionResult::Error`.
pub fn apply_booking_status(
    booking: &Booking,
    next: BookingStatus,
    ctx: &TransitionContext,
) -> Result<TransitionResult<Booking>> {
    let decision = validate_booking_transition(booking.status()?, next, ctx)?;
    Ok(TransitionResult::from_decision(decision, || {
        booking.clone().with_status(next)
    }))
}

pub fn apply_trip_status(
    trip: &Trip,
    next: TripStatus,
    ctx: &TransitionContext,
) -> Result<TransitionResult<Trip>> {
    let decision = validate_trip_transition(trip.status()?, next, ctx)?;
    Ok(TransitionResult::from_decision(decision, || {
        trip.clone().with_status(next)
    }))
}

/// Apply a status change to a fish order.
///
/// When the order completes, every sibling is terminal and the booking is
/// waiting in Order Prepare, the result carries
/// [`Proposal::CompleteBooking`].
pub fn apply_fish_order_status(
    order: &FishOrder,
    next: FishOrderStatus,
    ctx: &TransitionContext,
) -> Result<TransitionResult<FishOrder>> {
    let current = order.status()?;
    let decision = validate_fish_order_transition(current, next, ctx)?;
    let mut result =
        TransitionResult::from_decision(decision, || order.clone().with_status(next));
    if let TransitionResult::Success { proposal, .. } = &mut result {
        if current != next {
            *proposal = completion_proposal(order.booking_id, next, ctx);
        }
    }
    Ok(result)
}

fn completion_proposal(
    booking_id: i64,
    next: FishOrderStatus,
    ctx: &TransitionContext,
) -> Option<Proposal> {
    if next != FishOrderStatus::Completed {
        return None;
    }
    if ctx.parent_booking != Some(BookingStatus::OrderPrepare) {
        return None;
    }
    let siblings = ctx.fish_orders.as_ref()?;
    if siblings.iter().all(|s| s.is_terminal()) {
        Some(Proposal::CompleteBooking { booking_id })
    } else {
        None
    }
}

/// Whether moving `fish_order_id` to `next` would close out its booking
pub fn propose_booking_completion(
    store: &EntityStore,
    fish_order_id: i64,
    next: FishOrderStatus,
) -> Result<Option<Proposal>> {
    let order = store.require_fish_order(fish_order_id)?;
    let ctx = TransitionContext::for_fish_order(store, fish_order_id)?;
    Ok(completion_proposal(order.booking_id, next, &ctx))
}
