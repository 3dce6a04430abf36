//! Booking schema - a customer's end-to-end engagement

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{KoiError, Result};

use super::{BookingStatus, EntityKind};

/// A customer booking, tying together one trip and any number of fish orders.
///
/// `status` keeps the label exactly as the backend sent it. Use
/// [`Booking::status`] to get the typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,

    #[serde(default)]
    pub customer_id: Option<i64>,

    #[serde(default)]
    pub trip_id: Option<i64>,

    #[serde(default)]
    pub sale_staff_id: Option<i64>,

    #[serde(default)]
    pub consulting_staff_id: Option<i64>,

    #[serde(default)]
    pub delivery_staff_id: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub status: Option<String>,
}

impl Booking {
    /// Create a freshly requested booking
    pub fn new(id: i64, customer_id: i64) -> Self {
        Booking {
            id,
            customer_id: Some(customer_id),
            trip_id: None,
            sale_staff_id: None,
            consulting_staff_id: None,
            delivery_staff_id: None,
            description: None,
            created_at: Some(chrono::Utc::now().naive_utc()),
            status: Some(BookingStatus::Requested.label().to_string()),
        }
    }

    /// Typed status, failing with `InvalidStatus` for missing or drifted labels
    pub fn status(&self) -> Result<BookingStatus> {
        match self.status.as_deref() {
            Some(label) => label.parse(),
            None => Err(KoiError::invalid_status(EntityKind::Booking, "")),
        }
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status.label().to_string());
        self
    }

    pub fn with_trip(mut self, trip_id: Option<i64>) -> Self {
        self.trip_id = trip_id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "customerId": 3,
            "tripId": 12,
            "saleStaffId": 20,
            "description": "Kohaku tour",
            "createdAt": "2024-10-01T09:30:00",
            "status": "Pending Quote"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, 7);
        assert_eq!(booking.trip_id, Some(12));
        assert_eq!(booking.sale_staff_id, Some(20));
        assert_eq!(booking.consulting_staff_id, None);
        assert_eq!(booking.status().unwrap(), BookingStatus::PendingQuote);
    }

    #[test]
    fn test_booking_tolerates_missing_and_drifted_status() {
        let missing: Booking = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(missing.status.is_none());
        assert!(matches!(missing.status(), Err(KoiError::InvalidStatus { .. })));

        let drifted: Booking =
            serde_json::from_str(r#"{"id": 2, "status": "OrderPrepare"}"#).unwrap();
        assert_eq!(drifted.status.as_deref(), Some("OrderPrepare"));
        assert!(drifted.status().is_err());
    }

    #[test]
    fn test_booking_new_is_requested() {
        let booking = Booking::new(1, 5);
        assert_eq!(booking.status().unwrap(), BookingStatus::Requested);
        assert_eq!(booking.customer_id, Some(5));
        assert!(booking.created_at.is_some());
    }

    #[test]
    fn test_with_status_leaves_original() {
        let booking = Booking::new(1, 5);
        let paid = booking.clone().with_status(BookingStatus::PaidBooking);
        assert_eq!(paid.status.as_deref(), Some("Paid Booking"));
        assert_eq!(booking.status.as_deref(), Some("Requested"));
    }
}
