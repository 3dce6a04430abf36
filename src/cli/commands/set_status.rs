//! Set-status command - Validate, apply and save a status change

use tracing::info;

use crate::domain::{
    apply_booking_status, apply_fish_order_status, apply_trip_status, Proposal,
    TransitionContext, TransitionResult,
};
use crate::errors::{KoiError, Result};
use crate::fs::{save_bookings, save_fish_orders, save_trips};
use crate::schemas::{EntityKind, EntityStore, Role};

use super::Workspace;

/// Outcome of a successful status change
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub kind: EntityKind,
    pub id: i64,
    pub from: String,
    pub to: String,
    pub proposal: Option<Proposal>,
}

fn accept<T>(result: TransitionResult<T>) -> Result<(T, Option<Proposal>)> {
    match result {
        TransitionResult::Success { next, proposal } => Ok((next, proposal)),
        TransitionResult::Error { error } => Err(KoiError::Denied(error)),
    }
}

/// Apply a status change to the in-memory store.
///
/// The store is only touched when the transition is allowed.
pub fn set_status(
    store: &mut EntityStore,
    kind: EntityKind,
    id: i64,
    status: &str,
    actor: Option<Role>,
) -> Result<StatusChange> {
    let ctx = TransitionContext {
        actor,
        ..TransitionContext::for_transition(store, kind, id, status)?
    };

    let (from, proposal) = match kind {
        EntityKind::Booking => {
            let booking = store.require_booking(id)?;
            let from = booking.status.clone().unwrap_or_default();
            let (next, proposal) = accept(apply_booking_status(booking, status.parse()?, &ctx)?)?;
            store.replace_booking(next);
            (from, proposal)
        }
        EntityKind::Trip => {
            let trip = store.require_trip(id)?;
            let from = trip.status.clone().unwrap_or_default();
            let (next, proposal) = accept(apply_trip_status(trip, status.parse()?, &ctx)?)?;
            store.replace_trip(next);
            (from, proposal)
        }
        EntityKind::FishOrder => {
            let order = store.require_fish_order(id)?;
            let from = order.status.clone().unwrap_or_default();
            let (next, proposal) =
                accept(apply_fish_order_status(order, status.parse()?, &ctx)?)?;
            store.replace_fish_order(next);
            (from, proposal)
        }
    };

    Ok(StatusChange {
        kind,
        id,
        from,
        to: status.to_string(),
        proposal,
    })
}

/// Write the collection that `kind` lives in back to the data directory
pub fn persist(ws: &Workspace, store: &EntityStore, kind: EntityKind) -> Result<()> {
    match kind {
        EntityKind::Booking => save_bookings(&ws.data_dir, &store.bookings()),
        EntityKind::Trip => save_trips(&ws.data_dir, &store.trips()),
        EntityKind::FishOrder => save_fish_orders(&ws.data_dir, &store.fish_orders()),
    }
}

pub async fn run(
    ws: &Workspace,
    kind: EntityKind,
    id: i64,
    status: &str,
    actor: Option<Role>,
) -> Result<()> {
    let mut store = ws.load_store().await?;
    let change = set_status(&mut store, kind, id, status, actor)?;
    if change.from == change.to {
        println!("{} {} is already {}", kind, id, change.to);
        return Ok(());
    }

    persist(ws, &store, kind)?;
    info!(%kind, id, from = %change.from, to = %change.to, "status changed");
    println!("{} {}: {} -> {}", kind, id, change.from, change.to);

    if let Some(Proposal::CompleteBooking { booking_id }) = change.proposal {
        println!(
            "All fish orders of booking {} are finished. To close it: koi set-status booking {} Completed",
            booking_id, booking_id
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{read, workspace};
    use super::*;
    use crate::fs::{BOOKINGS_FILE, FISH_ORDERS_FILE};

    const BOOKINGS: &str = r#"[{"id": 1, "status": "Order Prepare"}]"#;
    const ORDERS: &str = r#"[
        {"id": 10, "bookingId": 1, "status": "Delivering"},
        {"id": 11, "bookingId": 1, "status": "Canceled"}
    ]"#;

    #[tokio::test]
    async fn test_set_status_proposes_and_persists() {
        let (_temp, ws) = workspace(&[(BOOKINGS_FILE, BOOKINGS), (FISH_ORDERS_FILE, ORDERS)]);

        run(&ws, EntityKind::FishOrder, 10, "Completed", Some(Role::DeliveryStaff))
            .await
            .unwrap();

        let saved = read(&ws.data_dir.join(FISH_ORDERS_FILE));
        assert_eq!(saved[0]["status"], "Completed");
        assert_eq!(saved[1]["status"], "Canceled");

        let mut store = ws.load_store().await.unwrap();
        let change = set_status(&mut store, EntityKind::Booking, 1, "Completed", None).unwrap();
        assert_eq!(change.from, "Order Prepare");
        assert_eq!(change.proposal, None);
    }

    #[tokio::test]
    async fn test_set_status_returns_proposal() {
        let (_temp, ws) = workspace(&[(BOOKINGS_FILE, BOOKINGS), (FISH_ORDERS_FILE, ORDERS)]);
        let mut store = ws.load_store().await.unwrap();
        let change = set_status(&mut store, EntityKind::FishOrder, 10, "Completed", None).unwrap();
        assert_eq!(change.proposal, Some(Proposal::CompleteBooking { booking_id: 1 }));
        assert_eq!(
            store.fish_order(10).unwrap().status.as_deref(),
            Some("Completed")
        );
    }

    #[tokio::test]
    async fn test_denied_change_leaves_files_alone() {
        let (_temp, ws) = workspace(&[(BOOKINGS_FILE, BOOKINGS), (FISH_ORDERS_FILE, ORDERS)]);

        let err = run(&ws, EntityKind::Booking, 1, "Completed", None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "DENIED");
        assert!(err.to_string().contains("pending fish orders"));

        let saved = read(&ws.data_dir.join(BOOKINGS_FILE));
        assert_eq!(saved[0]["status"], "Order Prepare");
    }

    #[test]
    fn test_set_status_missing_entity() {
        let mut store = EntityStore::default();
        let err = set_status(&mut store, EntityKind::Trip, 1, "Approved", None).unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
