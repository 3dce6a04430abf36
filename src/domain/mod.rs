//! Domain logic for booking, trip and fish-order statuses

mod assignment;
mod registry;
mod transitions;
mod validation;

// Property-based tests (compiled only in test builds)
#[cfg(test)]
mod property_tests;

pub use assignment::{assign_staff, candidates, unassigned_bookings, StaffSlot};
pub use registry::{
    allowed_next, booking_next, booking_rank, can_set, fish_order_next, is_terminal,
    is_valid_status, normalize_status, roles_allowed, statuses, trip_next, BOOKING_FLOW,
    BOOKING_STATUSES, FISH_ORDER_STATUSES, TRIP_STATUSES,
};
pub use transitions::{
    apply_booking_status, apply_fish_order_status, apply_trip_status, propose_booking_completion,
    Proposal, TransitionResult,
};
pub use validation::{
    can_approve_trip, can_complete_booking, validate_booking_transition,
    validate_fish_order_transition, validate_transition, validate_trip_transition, Decision,
    TransitionContext,
};
