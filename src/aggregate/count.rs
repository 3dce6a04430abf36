//! Status counts for dashboard cards and charts

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::{is_valid_status, statuses};
use crate::schemas::{Booking, EntityKind, FishOrder, Trip};

/// Bucket for entities whose status is missing or blank
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Anything that carries a raw status label
pub trait HasStatus {
    fn status_label(&self) -> Option<&str>;
}

impl HasStatus for Booking {
    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl HasStatus for Trip {
    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl HasStatus for FishOrder {
    fn status_label(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl HasStatus for Option<String> {
    fn status_label(&self) -> Option<&str> {
        self.as_deref()
    }
}

fn bucket<T: HasStatus>(entity: &T) -> &str {
    match entity.status_label() {
        Some(label) if !label.trim().is_empty() => label,
        _ => UNKNOWN_STATUS,
    }
}

/// Count entities per raw status label.
///
/// Missing or blank labels go to "Unknown", so the counts always sum to
/// `entities.len()`. Labels outside the registry for `kind` are kept as-is
/// and logged at debug level.
pub fn count_by_status<T: HasStatus>(entities: &[T], kind: EntityKind) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entity in entities {
        *counts.entry(bucket(entity).to_string()).or_insert(0) += 1;
    }
    let drifted: Vec<&str> = counts
        .keys()
        .map(String::as_str)
        .filter(|label| *label != UNKNOWN_STATUS && !is_valid_status(kind, label))
        .collect();
    if !drifted.is_empty() {
        debug!(%kind, ?drifted, "status labels outside the registry");
    }
    counts
}

/// Like [`count_by_status`], but labels outside the registry for `kind`
/// also go to "Unknown"
pub fn count_by_registered_status<T: HasStatus>(
    entities: &[T],
    kind: EntityKind,
) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entity in entities {
        let label = match entity.status_label() {
            Some(label) if is_valid_status(kind, label) => label,
            _ => UNKNOWN_STATUS,
        };
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// One bar or slice of a status chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

/// Chart series: every registry label for `kind` in lifecycle order
/// (zero when absent), then other labels alphabetically, then "Unknown"
/// if any entity landed there
pub fn ordered_counts(counts: &BTreeMap<String, usize>, kind: EntityKind) -> Vec<StatusCount> {
    let mut series: Vec<StatusCount> = statuses(kind)
        .iter()
        .map(|label| StatusCount {
            status: label.to_string(),
            count: counts.get(*label).copied().unwrap_or(0),
        })
        .collect();
    for (label, count) in counts {
        if label != UNKNOWN_STATUS && !is_valid_status(kind, label) {
            series.push(StatusCount {
                status: label.clone(),
                count: *count,
            });
        }
    }
    if let Some(count) = counts.get(UNKNOWN_STATUS) {
        series.push(StatusCount {
            status: UNKNOWN_STATUS.to_string(),
            count: *count,
        });
    }
    series
}
