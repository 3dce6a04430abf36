//! Property-based tests for domain logic
//!
//! These tests use proptest to verify invariants across many random inputs.

#[cfg(test)]
mod tests {
    use crate::domain::registry::{is_valid_status, statuses};
    use crate::domain::transitions::apply_fish_order_status;
    use crate::domain::validation::{validate_transition, Decision, TransitionContext};
    use crate::schemas::{BookingStatus, EntityKind, FishOrder, FishOrderStatus, Role};
    use proptest::prelude::*;

    // ===== STRATEGY HELPERS =====

    fn any_kind() -> impl Strategy<Value = EntityKind> {
        prop_oneof![
            Just(EntityKind::Booking),
            Just(EntityKind::Trip),
            Just(EntityKind::FishOrder),
        ]
    }

    fn any_fish_order_status() -> impl Strategy<Value = FishOrderStatus> {
        prop::sample::select(FishOrderStatus::ALL.to_vec())
    }

    fn any_booking_status() -> impl Strategy<Value = BookingStatus> {
        prop::sample::select(BookingStatus::ALL.to_vec())
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    /// A kind together with two of its registered labels
    fn any_kind_and_pair() -> impl Strategy<Value = (EntityKind, &'static str, &'static str)> {
        any_kind().prop_flat_map(|kind| {
            let labels = statuses(kind).to_vec();
            (
                Just(kind),
                prop::sample::select(labels.clone()),
                prop::sample::select(labels),
            )
        })
    }

    fn full_context() -> impl Strategy<Value = TransitionContext> {
        (
            prop::option::of(any_role()),
            prop::collection::vec(any_fish_order_status(), 0..5),
            any_booking_status(),
        )
            .prop_map(|(actor, orders, parent)| TransitionContext {
                actor,
                fish_orders: Some(orders),
                parent_booking: Some(parent),
            })
    }

    // ===== REGISTRY =====

    proptest! {
        /// Property: every registered label is valid, and validity is exact
        #[test]
        fn test_registered_labels_are_valid((kind, label, _) in any_kind_and_pair()) {
            prop_assert!(is_valid_status(kind, label));
            let lowered = label.to_lowercase();
            let upper = label.to_uppercase();
            let padded = format!(" {}", label);
            prop_assert!(!is_valid_status(kind, &padded));
            if lowered != label {
                prop_assert!(!is_valid_status(kind, &lowered));
            }
            if upper != label {
                prop_assert!(!is_valid_status(kind, &upper));
            }
        }

        /// Property: strings outside the registry are never valid
        #[test]
        fn test_unregistered_strings_are_invalid(kind in any_kind(), s in ".{0,20}") {
            prop_assert_eq!(is_valid_status(kind, &s), statuses(kind).contains(&s.as_str()));
        }
    }

    // ===== VALIDATOR =====

    proptest! {
        /// Property: with full context the validator never errors on registered labels
        #[test]
        fn test_validator_total_on_registry(
            (kind, current, next) in any_kind_and_pair(),
            ctx in full_context()
        ) {
            prop_assert!(validate_transition(kind, current, next, &ctx).is_ok());
        }

        /// Property: re-setting the same status is always allowed
        #[test]
        fn test_same_status_always_allowed(
            (kind, current, _) in any_kind_and_pair(),
            ctx in full_context()
        ) {
            prop_assert_eq!(
                validate_transition(kind, current, current, &ctx).unwrap(),
                Decision::Allowed
            );
        }

        /// Property: terminal fish orders deny every change
        #[test]
        fn test_terminal_fish_orders_stay_put(
            current in prop_oneof![Just(FishOrderStatus::Completed), Just(FishOrderStatus::Canceled)],
            next in any_fish_order_status(),
            ctx in full_context()
        ) {
            prop_assume!(current != next);
            let decision =
                validate_transition(EntityKind::FishOrder, current.label(), next.label(), &ctx)
                    .unwrap();
            prop_assert!(!decision.is_allowed());
        }

        /// Property: a booking never completes while a fish order is open
        #[test]
        fn test_booking_completion_requires_terminal_orders(
            orders in prop::collection::vec(any_fish_order_status(), 0..6)
        ) {
            let ctx = TransitionContext::default().with_fish_orders(orders.clone());
            let decision =
                validate_transition(EntityKind::Booking, "Order Prepare", "Completed", &ctx)
                    .unwrap();
            prop_assert_eq!(decision.is_allowed(), orders.iter().all(|s| s.is_terminal()));
        }

        /// Property: apply_fish_order_status never mutates its input
        #[test]
        fn test_apply_never_mutates(
            current in any_fish_order_status(),
            next in any_fish_order_status(),
            ctx in full_context()
        ) {
            let order = FishOrder::new(1, 2, 3).with_status(current);
            let original = order.clone();
            let _ = apply_fish_order_status(&order, next, &ctx);
            prop_assert_eq!(order, original);
        }
    }
}
