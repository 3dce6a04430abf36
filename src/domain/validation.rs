//! Validation rules for status transitions

use tracing::debug;

use crate::errors::{KoiError, Result};
use crate::schemas::{
    BookingStatus, EntityKind, EntityStore, FishOrderStatus, Role, TripStatus,
};

use super::registry::{
    booking_next, booking_rank, booking_roles, fish_order_next, fish_order_roles, trip_next,
    trip_roles,
};

/// Related entities needed by cross-entity rules
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionContext {
    /// Role of whoever requests the change. `None` skips the role gate.
    pub actor: Option<Role>,

    /// For a booking: its fish orders. For a fish order: its siblings
    /// under the same booking, excluding itself.
    pub fish_orders: Option<Vec<FishOrderStatus>>,

    /// For a trip or fish order: status of the owning booking
    pub parent_booking: Option<BookingStatus>,
}

impl TransitionContext {
    pub fn with_actor(mut self, actor: Role) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn with_fish_orders(mut self, statuses: Vec<FishOrderStatus>) -> Self {
        self.fish_orders = Some(statuses);
        self
    }

    pub fn with_parent_booking(mut self, status: BookingStatus) -> Self {
        self.parent_booking = Some(status);
        self
    }

    /// Context for changing a booking: every fish order it owns
    pub fn for_booking(store: &EntityStore, booking_id: i64) -> Result<Self> {
        store.require_booking(booking_id)?;
        let statuses = store
            .fish_orders_for(booking_id)
            .into_iter()
            .map(|o| o.status())
            .collect::<Result<Vec<_>>>()?;
        Ok(TransitionContext::default().with_fish_orders(statuses))
    }

    /// Context for changing a trip: the booking that references it, if any
    pub fn for_trip(store: &EntityStore, trip_id: i64) -> Result<Self> {
        store.require_trip(trip_id)?;
        let parent_booking = match store.booking_for_trip(trip_id) {
            Some(booking) => Some(booking.status()?),
            None => None,
        };
        Ok(TransitionContext {
            parent_booking,
            ..Default::default()
        })
    }

    /// Context for changing a fish order: its siblings and its booking.
    ///
    /// No fish-order rule requires these, they only feed the completion
    /// proposal. A missing or drifted parent leaves `parent_booking` empty,
    /// and any drifted sibling leaves `fish_orders` empty.
    pub fn for_fish_order(store: &EntityStore, fish_order_id: i64) -> Result<Self> {
        let order = store.require_fish_order(fish_order_id)?;
        let parent_booking = store
            .booking(order.booking_id)
            .and_then(|b| b.status().ok());
        let fish_orders = store
            .fish_orders_for(order.booking_id)
            .into_iter()
            .filter(|o| o.id != fish_order_id)
            .map(|o| o.status().ok())
            .collect::<Option<Vec<_>>>();
        Ok(TransitionContext {
            actor: None,
            fish_orders,
            parent_booking,
        })
    }

    /// Context for moving entity `id` to `next`.
    ///
    /// Related entities are only read when the rule for `next` needs
    /// them, so drift elsewhere in the store cannot block an unrelated
    /// change.
    pub fn for_transition(
        store: &EntityStore,
        kind: EntityKind,
        id: i64,
        next: &str,
    ) -> Result<Self> {
        match kind {
            EntityKind::Booking => {
                let booking = store.require_booking(id)?;
                let completing = next == BookingStatus::Completed.label()
                    && booking.status.as_deref() != Some(next);
                if completing {
                    Self::for_booking(store, id)
                } else {
                    Ok(Self::default())
                }
            }
            EntityKind::Trip => {
                let trip = store.require_trip(id)?;
                let approving = next == TripStatus::Approved.label()
                    && trip.status.as_deref() != Some(next);
                if approving {
                    Self::for_trip(store, id)
                } else {
                    Ok(Self::default())
                }
            }
            EntityKind::FishOrder => Self::for_fish_order(store, id),
        }
    }
}

/// Outcome of a transition check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    /// Human-readable reason, shown to the user as-is
    Denied(String),
}

impl Decision {
    pub fn denied(reason: impl Into<String>) -> Self {
        Decision::Denied(reason.into())
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Decision::Allowed => None,
            Decision::Denied(reason) => Some(reason),
        }
    }

    /// Turn a denial into a `KoiError::Denied` for `?` propagation
    pub fn into_result(self) -> Result<()> {
        match self {
            Decision::Allowed => Ok(()),
            Decision::Denied(reason) => Err(KoiError::Denied(reason)),
        }
    }
}

fn edge_denial(kind: EntityKind, current: &str, next: &str, terminal: bool) -> Decision {
    if terminal {
        Decision::denied(format!("{} is terminal; cannot move to {}", current, next))
    } else {
        Decision::denied(format!("cannot transition {} from {} to {}", kind, current, next))
    }
}

fn role_denial(actor: Option<Role>, allowed: &[Role], next: &str) -> Option<Decision> {
    let actor = actor?;
    if allowed.contains(&actor) {
        return None;
    }
    Some(Decision::denied(format!("{} may not set status {}", actor, next)))
}

/// Validate entering "Completed" for a booking
pub fn can_complete_booking(fish_orders: Option<&[FishOrderStatus]>) -> Result<Decision> {
    let fish_orders = fish_orders.ok_or_else(|| {
        KoiError::NotFound("fish orders of the booking are not in the context".to_string())
    })?;
    let pending = fish_orders.iter().filter(|s| !s.is_terminal()).count();
    if pending > 0 {
        return Ok(Decision::denied(format!(
            "booking has {} pending fish orders",
            pending
        )));
    }
    Ok(Decision::Allowed)
}

/// Validate entering "Approved" for a trip
pub fn can_approve_trip(parent_booking: Option<BookingStatus>) -> Result<Decision> {
    let parent = parent_booking.ok_or_else(|| {
        KoiError::NotFound("parent booking of the trip is not in the context".to_string())
    })?;
    let paid = booking_rank(BookingStatus::PaidBooking);
    match booking_rank(parent) {
        Some(rank) if Some(rank) >= paid => Ok(Decision::Allowed),
        _ => Ok(Decision::denied(format!(
            "parent booking is {}; trip approval requires {} or later",
            parent,
            BookingStatus::PaidBooking
        ))),
    }
}

pub fn validate_booking_transition(
    current: BookingStatus,
    next: BookingStatus,
    ctx: &TransitionContext,
) -> Result<Decision> {
    if current == next {
        return Ok(Decision::Allowed);
    }
    if !booking_next(current).contains(&next) {
        return Ok(edge_denial(
            EntityKind::Booking,
            current.label(),
            next.label(),
            current.is_terminal(),
        ));
    }
    if let Some(denied) = role_denial(ctx.actor, booking_roles(next), next.label()) {
        return Ok(denied);
    }
    match next {
        BookingStatus::Completed => can_complete_booking(ctx.fish_orders.as_deref()),
        _ => Ok(Decision::Allowed),
    }
}

pub fn validate_trip_transition(
    current: TripStatus,
    next: TripStatus,
    ctx: &TransitionContext,
) -> Result<Decision> {
    if current == next {
        return Ok(Decision::Allowed);
    }
    if !trip_next(current).contains(&next) {
        return Ok(edge_denial(
            EntityKind::Trip,
            current.label(),
            next.label(),
            current.is_terminal(),
        ));
    }
    if let Some(denied) = role_denial(ctx.actor, trip_roles(next), next.label()) {
        return Ok(denied);
    }
    match next {
        TripStatus::Approved => can_approve_trip(ctx.parent_booking),
        _ => Ok(Decision::Allowed),
    }
}

pub fn validate_fish_order_transition(
    current: FishOrderStatus,
    next: FishOrderStatus,
    ctx: &TransitionContext,
) -> Result<Decision> {
    if current == next {
        return Ok(Decision::Allowed);
    }
    if !fish_order_next(current).contains(&next) {
        return Ok(edge_denial(
            EntityKind::FishOrder,
            current.label(),
            next.label(),
            current.is_terminal(),
        ));
    }
    if let Some(denied) = role_denial(ctx.actor, fish_order_roles(next), next.label()) {
        return Ok(denied);
    }
    Ok(Decision::Allowed)
}

/// Validate a status change given as raw labels.
///
/// Unknown labels fail with `InvalidStatus`; a cross-entity rule with
/// missing context fails with `NotFound`. Every other outcome is a
/// [`Decision`].
pub fn validate_transition(
    kind: EntityKind,
    current: &str,
    next: &str,
    ctx: &TransitionContext,
) -> Result<Decision> {
    let decision = match kind {
        EntityKind::Booking => {
            validate_booking_transition(current.parse()?, next.parse()?, ctx)?
        }
        EntityKind::Trip => validate_trip_transition(current.parse()?, next.parse()?, ctx)?,
        EntityKind::FishOrder => {
            validate_fish_order_transition(current.parse()?, next.parse()?, ctx)?
        }
    };
    debug!(%kind, current, next, ?decision, "validated transition");
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Booking, FishOrder, Snapshot, Trip};

    fn ctx() -> TransitionContext {
        TransitionContext::default()
    }

    #[test]
    fn test_terminal_fish_order_has_no_exit() {
        let result =
            validate_transition(EntityKind::FishOrder, "Completed", "Deposited", &ctx()).unwrap();
        assert!(!result.is_allowed());
        assert!(result.reason().unwrap().contains("terminal"));

        let result =
            validate_transition(EntityKind::FishOrder, "Canceled", "In Transit", &ctx()).unwrap();
        assert!(!result.is_allowed());
    }

    #[test]
    fn test_fish_order_forward_path() {
        let steps = [
            ("Deposited", "In Transit"),
            ("In Transit", "Delivering"),
            ("Delivering", "Completed"),
        ];
        for (from, to) in steps {
            let result = validate_transition(EntityKind::FishOrder, from, to, &ctx()).unwrap();
            assert_eq!(result, Decision::Allowed, "{from} -> {to}");
        }
    }

    #[test]
    fn test_fish_order_cannot_skip() {
        let result =
            validate_transition(EntityKind::FishOrder, "Deposited", "Delivering", &ctx()).unwrap();
        assert!(result.reason().unwrap().contains("cannot transition"));
    }

    #[test]
    fn test_fish_order_cancel_from_any_open_state() {
        for from in ["Deposited", "In Transit", "Delivering"] {
            let result = validate_transition(EntityKind::FishOrder, from, "Canceled", &ctx()).unwrap();
            assert!(result.is_allowed(), "{from}");
        }
    }

    #[test]
    fn test_booking_completion_with_terminal_orders() {
        let ctx = ctx().with_fish_orders(vec![FishOrderStatus::Completed, FishOrderStatus::Canceled]);
        let result =
            validate_transition(EntityKind::Booking, "Order Prepare", "Completed", &ctx).unwrap();
        assert_eq!(result, Decision::Allowed);
    }

    #[test]
    fn test_booking_completion_with_pending_orders() {
        let ctx = ctx().with_fish_orders(vec![FishOrderStatus::Deposited]);
        let result =
            validate_transition(EntityKind::Booking, "Order Prepare", "Completed", &ctx).unwrap();
        assert!(!result.is_allowed());
        assert!(result.reason().unwrap().contains("pending fish orders"));
    }

    #[test]
    fn test_booking_completion_without_orders_is_allowed() {
        let ctx = ctx().with_fish_orders(vec![]);
        let result =
            validate_transition(EntityKind::Booking, "Order Prepare", "Completed", &ctx).unwrap();
        assert!(result.is_allowed());
    }

    #[test]
    fn test_booking_completion_needs_context() {
        let err = validate_transition(EntityKind::Booking, "Order Prepare", "Completed", &ctx())
            .unwrap_err();
        assert!(matches!(err, KoiError::NotFound(_)));
    }

    #[test]
    fn test_booking_linear_path() {
        let result =
            validate_transition(EntityKind::Booking, "Requested", "Pending Quote", &ctx()).unwrap();
        assert!(result.is_allowed());
        let result =
            validate_transition(EntityKind::Booking, "Requested", "Paid Booking", &ctx()).unwrap();
        assert!(!result.is_allowed());
        let result =
            validate_transition(EntityKind::Booking, "Paid Booking", "Approved Quote", &ctx())
                .unwrap();
        assert!(!result.is_allowed());
    }

    #[test]
    fn test_booking_cancel() {
        let result =
            validate_transition(EntityKind::Booking, "On-going", "Cancelled Booking", &ctx())
                .unwrap();
        assert!(result.is_allowed());
        let result =
            validate_transition(EntityKind::Booking, "Completed", "Cancelled Booking", &ctx())
                .unwrap();
        assert!(!result.is_allowed());
        let result =
            validate_transition(EntityKind::Booking, "Cancelled Booking", "Requested", &ctx())
                .unwrap();
        assert!(result.reason().unwrap().contains("terminal"));
    }

    #[test]
    fn test_same_status_is_noop() {
        for kind in EntityKind::ALL {
            for status in crate::domain::statuses(kind) {
                let result = validate_transition(kind, status, status, &ctx()).unwrap();
                assert!(result.is_allowed(), "{kind} {status}");
            }
        }
    }

    #[test]
    fn test_unknown_status_is_invalid() {
        let err = validate_transition(EntityKind::Booking, "OrderPrepare", "Completed", &ctx())
            .unwrap_err();
        assert!(matches!(err, KoiError::InvalidStatus { .. }));
        let err =
            validate_transition(EntityKind::Trip, "Pending", "approved", &ctx()).unwrap_err();
        assert!(matches!(err, KoiError::InvalidStatus { .. }));
    }

    #[test]
    fn test_trip_redo_loop() {
        assert!(validate_transition(EntityKind::Trip, "Pending", "Redo", &ctx())
            .unwrap()
            .is_allowed());
        assert!(validate_transition(EntityKind::Trip, "Redo", "Pending", &ctx())
            .unwrap()
            .is_allowed());
        assert!(!validate_transition(EntityKind::Trip, "Approved", "Redo", &ctx())
            .unwrap()
            .is_allowed());
    }

    #[test]
    fn test_trip_approval_gated_on_payment() {
        let unpaid = ctx().with_parent_booking(BookingStatus::ApprovedQuote);
        let result = validate_transition(EntityKind::Trip, "Pending", "Approved", &unpaid).unwrap();
        assert!(result.reason().unwrap().contains("Paid Booking"));

        let paid = ctx().with_parent_booking(BookingStatus::PaidBooking);
        assert!(validate_transition(EntityKind::Trip, "Redo", "Approved", &paid)
            .unwrap()
            .is_allowed());

        let later = ctx().with_parent_booking(BookingStatus::OnGoing);
        assert!(validate_transition(EntityKind::Trip, "Pending", "Approved", &later)
            .unwrap()
            .is_allowed());

        let cancelled = ctx().with_parent_booking(BookingStatus::CancelledBooking);
        assert!(!validate_transition(EntityKind::Trip, "Pending", "Approved", &cancelled)
            .unwrap()
            .is_allowed());
    }

    #[test]
    fn test_trip_approval_needs_parent() {
        let err = validate_transition(EntityKind::Trip, "Pending", "Approved", &ctx()).unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_role_gate() {
        let sales = ctx().with_actor(Role::SalesStaff);
        let result = validate_transition(EntityKind::Trip, "Pending", "Redo", &sales).unwrap();
        assert_eq!(
            result,
            Decision::Denied("Sales Staff may not set status Redo".to_string())
        );

        let delivery = ctx().with_actor(Role::DeliveryStaff);
        assert!(validate_transition(EntityKind::FishOrder, "Deposited", "In Transit", &delivery)
            .unwrap()
            .is_allowed());

        // the edge check runs before the role gate
        let result =
            validate_transition(EntityKind::FishOrder, "Completed", "Deposited", &delivery).unwrap();
        assert!(result.reason().unwrap().contains("terminal"));
    }

    #[test]
    fn test_decision_into_result() {
        assert!(Decision::Allowed.into_result().is_ok());
        let err = Decision::denied("nope").into_result().unwrap_err();
        assert_eq!(err.code(), "DENIED");
    }

    fn store() -> EntityStore {
        EntityStore::from_snapshot(Snapshot {
            bookings: vec![
                Booking::new(1, 9)
                    .with_trip(Some(3))
                    .with_status(BookingStatus::PaidBooking),
                Booking::new(2, 9),
            ],
            trips: vec![Trip::new(3), Trip::new(4)],
            fish_orders: vec![
                FishOrder::new(10, 1, 1).with_status(FishOrderStatus::Completed),
                FishOrder::new(11, 1, 1),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn test_context_for_booking() {
        let ctx = TransitionContext::for_booking(&store(), 1).unwrap();
        assert_eq!(
            ctx.fish_orders,
            Some(vec![FishOrderStatus::Completed, FishOrderStatus::Deposited])
        );
        let empty = TransitionContext::for_booking(&store(), 2).unwrap();
        assert_eq!(empty.fish_orders, Some(vec![]));
        assert!(TransitionContext::for_booking(&store(), 5).is_err());
    }

    #[test]
    fn test_context_for_trip() {
        let ctx = TransitionContext::for_trip(&store(), 3).unwrap();
        assert_eq!(ctx.parent_booking, Some(BookingStatus::PaidBooking));
        let orphan = TransitionContext::for_trip(&store(), 4).unwrap();
        assert_eq!(orphan.parent_booking, None);
    }

    #[test]
    fn test_context_for_fish_order_excludes_self() {
        let ctx = TransitionContext::for_fish_order(&store(), 11).unwrap();
        assert_eq!(ctx.fish_orders, Some(vec![FishOrderStatus::Completed]));
        assert_eq!(ctx.parent_booking, Some(BookingStatus::PaidBooking));
    }

    fn drifted_store() -> EntityStore {
        let mut paid = Booking::new(2, 9).with_trip(Some(4));
        paid.status = Some("Paid".to_string());
        let mut shipped = FishOrder::new(11, 1, 1);
        shipped.status = Some("Shipped".to_string());
        EntityStore::from_snapshot(Snapshot {
            bookings: vec![Booking::new(1, 9).with_status(BookingStatus::OnGoing), paid],
            trips: vec![Trip::new(4)],
            fish_orders: vec![FishOrder::new(10, 1, 1), shipped, FishOrder::new(12, 77, 1)],
            ..Default::default()
        })
    }

    fn check(store: &EntityStore, kind: EntityKind, id: i64, next: &str) -> Result<Decision> {
        let current = match kind {
            EntityKind::Booking => store.booking(id).and_then(|b| b.status.clone()),
            EntityKind::Trip => store.trip(id).and_then(|t| t.status.clone()),
            EntityKind::FishOrder => store.fish_order(id).and_then(|o| o.status.clone()),
        }
        .unwrap_or_default();
        let ctx = TransitionContext::for_transition(store, kind, id, next)?;
        validate_transition(kind, &current, next, &ctx)
    }

    #[test]
    fn test_drifted_sibling_does_not_block_unrelated_changes() {
        let store = drifted_store();
        assert_eq!(
            check(&store, EntityKind::FishOrder, 10, "In Transit").unwrap(),
            Decision::Allowed
        );
        assert_eq!(
            check(&store, EntityKind::Booking, 1, "Order Prepare").unwrap(),
            Decision::Allowed
        );
    }

    #[test]
    fn test_drifted_parent_does_not_block_trip_redo() {
        let store = drifted_store();
        assert_eq!(check(&store, EntityKind::Trip, 4, "Redo").unwrap(), Decision::Allowed);
    }

    #[test]
    fn test_orphan_fish_order_can_move() {
        let store = drifted_store();
        let ctx = TransitionContext::for_fish_order(&store, 12).unwrap();
        assert_eq!(ctx.parent_booking, None);
        assert_eq!(
            check(&store, EntityKind::FishOrder, 12, "In Transit").unwrap(),
            Decision::Allowed
        );
    }

    #[test]
    fn test_drift_surfaces_only_when_the_rule_runs() {
        let store = drifted_store();
        let err = check(&store, EntityKind::Trip, 4, "Approved").unwrap_err();
        assert!(matches!(err, KoiError::InvalidStatus { kind: EntityKind::Booking, .. }));

        let mut ready = store.clone();
        let booking = ready.booking(1).cloned().unwrap();
        ready.replace_booking(booking.with_status(BookingStatus::OrderPrepare));
        let err = check(&ready, EntityKind::Booking, 1, "Completed").unwrap_err();
        assert!(matches!(err, KoiError::InvalidStatus { kind: EntityKind::FishOrder, .. }));
    }

    #[test]
    fn test_drifted_sibling_leaves_fish_orders_empty() {
        let ctx = TransitionContext::for_fish_order(&drifted_store(), 10).unwrap();
        assert_eq!(ctx.fish_orders, None);
        assert_eq!(ctx.parent_booking, Some(BookingStatus::OnGoing));
    }

    #[test]
    fn test_context_rejects_drifted_fish_order_status() {
        let mut store = store();
        let mut order = store.fish_order(11).cloned().unwrap();
        order.status = Some("Shipped".to_string());
        store.replace_fish_order(order);
        let err = TransitionContext::for_booking(&store, 1).unwrap_err();
        assert!(matches!(err, KoiError::InvalidStatus { .. }));
    }
}
