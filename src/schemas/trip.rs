//! Trip schema - a farm-visit itinerary

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{KoiError, Result};

use super::{EntityKind, TripStatus};

/// One stop on a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDestination {
    #[serde(default)]
    pub id: Option<i64>,

    pub farm_id: i64,

    #[serde(default)]
    pub visit_date: Option<NaiveDate>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A scheduled trip with its destinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub departure_airport: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub trip_destinations: Vec<TripDestination>,
}

impl Trip {
    /// Create a pending trip with no destinations
    pub fn new(id: i64) -> Self {
        Trip {
            id,
            start_date: None,
            end_date: None,
            departure_airport: None,
            price: None,
            description: None,
            status: Some(TripStatus::Pending.label().to_string()),
            trip_destinations: Vec::new(),
        }
    }

    pub fn status(&self) -> Result<TripStatus> {
        match self.status.as_deref() {
            Some(label) => label.parse(),
            None => Err(KoiError::invalid_status(EntityKind::Trip, "")),
        }
    }

    pub fn with_status(mut self, status: TripStatus) -> Self {
        self.status = Some(status.label().to_string());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Farms visited on this trip, in itinerary order, without repeats
    pub fn farm_ids(&self) -> Vec<i64> {
        let mut ids = Vec::new();
        for dest in &self.trip_destinations {
            if !ids.contains(&dest.farm_id) {
                ids.push(dest.farm_id);
            }
        }
        ids
    }
}
