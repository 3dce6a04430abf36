//! Stable sorting and pagination for entity tables

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::statuses;
use crate::schemas::{Account, Booking, EntityKind, Farm, FishOrder, Trip};

use super::sum::finite_or_zero;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// The comparable value extracted from one field
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Date(NaiveDateTime),
    Text(String),
    Missing,
}

impl SortKey {
    fn text(value: Option<&str>) -> Self {
        value.map_or(SortKey::Missing, |s| SortKey::Text(s.to_string()))
    }

    fn day(value: Option<NaiveDate>) -> Self {
        value
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map_or(SortKey::Missing, SortKey::Date)
    }

    /// Lifecycle position of a status label; off-registry labels are Missing
    fn status(kind: EntityKind, label: Option<&str>) -> Self {
        label
            .and_then(|l| statuses(kind).iter().position(|s| *s == l))
            .map_or(SortKey::Missing, |rank| SortKey::Number(rank as f64))
    }

    fn variant_rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Missing => 3,
        }
    }
}

/// Compare two present keys. Mixed kinds fall back to a fixed kind order.
fn compare_present(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        // -0.0 and 0.0 are the same amount
        (SortKey::Number(x), SortKey::Number(y)) => (x + 0.0).total_cmp(&(y + 0.0)),
        (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        _ => a.variant_rank().cmp(&b.variant_rank()),
    }
}

/// Sort a copy of `entities` by the key `key_fn` extracts.
///
/// The sort is stable in both directions: equal keys keep their input
/// order. Missing keys always come last.
pub fn sort_by<T, F>(entities: &[T], key_fn: F, order: SortOrder) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> SortKey,
{
    let mut keyed: Vec<(SortKey, &T)> = entities.iter().map(|e| (key_fn(e), e)).collect();
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        _ => match order {
            SortOrder::Asc => compare_present(a, b),
            SortOrder::Desc => compare_present(b, a),
        },
    });
    keyed.into_iter().map(|(_, e)| e.clone()).collect()
}

/// Entities with named sortable columns
pub trait Sortable: Clone {
    type Field: Copy;

    fn sort_key(&self, field: Self::Field) -> SortKey;
}

pub fn sort_entities<T: Sortable>(entities: &[T], field: T::Field, order: SortOrder) -> Vec<T> {
    sort_by(entities, |e| e.sort_key(field), order)
}

/// One page of `items`. Pages start at 1; page 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return items;
    }
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

// ===== FIELDS =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Id,
    CreatedAt,
    Status,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripField {
    Id,
    StartDate,
    Price,
    Status,
    DepartureAirport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishOrderField {
    Id,
    BookingId,
    Total,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarmField {
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Id,
    Name,
    Email,
    Role,
}

impl std::str::FromStr for BookingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(BookingField::Id),
            "created_at" | "createdAt" | "date" => Ok(BookingField::CreatedAt),
            "status" => Ok(BookingField::Status),
            "description" => Ok(BookingField::Description),
            _ => Err(format!("Unknown booking field: {}", s)),
        }
    }
}

impl std::str::FromStr for TripField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(TripField::Id),
            "start_date" | "startDate" | "date" => Ok(TripField::StartDate),
            "price" => Ok(TripField::Price),
            "status" => Ok(TripField::Status),
            "departure_airport" | "departureAirport" | "airport" => Ok(TripField::DepartureAirport),
            _ => Err(format!("Unknown trip field: {}", s)),
        }
    }
}

impl std::str::FromStr for FishOrderField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(FishOrderField::Id),
            "booking_id" | "bookingId" | "booking" => Ok(FishOrderField::BookingId),
            "total" => Ok(FishOrderField::Total),
            "status" => Ok(FishOrderField::Status),
            _ => Err(format!("Unknown fish order field: {}", s)),
        }
    }
}

impl Sortable for Booking {
    type Field = BookingField;

    fn sort_key(&self, field: BookingField) -> SortKey {
        match field {
            BookingField::Id => SortKey::Number(self.id as f64),
            BookingField::CreatedAt => self.created_at.map_or(SortKey::Missing, SortKey::Date),
            BookingField::Status => SortKey::status(EntityKind::Booking, self.status.as_deref()),
            BookingField::Description => SortKey::text(self.description.as_deref()),
        }
    }
}

impl Sortable for Trip {
    type Field = TripField;

    fn sort_key(&self, field: TripField) -> SortKey {
        match field {
            TripField::Id => SortKey::Number(self.id as f64),
            TripField::StartDate => SortKey::day(self.start_date),
            TripField::Price => match self.price {
                Some(p) if p.is_finite() => SortKey::Number(p),
                _ => SortKey::Missing,
            },
            TripField::Status => SortKey::status(EntityKind::Trip, self.status.as_deref()),
            TripField::DepartureAirport => SortKey::text(self.departure_airport.as_deref()),
        }
    }
}

impl Sortable for FishOrder {
    type Field = FishOrderField;

    fn sort_key(&self, field: FishOrderField) -> SortKey {
        match field {
            FishOrderField::Id => SortKey::Number(self.id as f64),
            FishOrderField::BookingId => SortKey::Number(self.booking_id as f64),
            FishOrderField::Total => SortKey::Number(finite_or_zero(Some(self.effective_total()))),
            FishOrderField::Status => {
                SortKey::status(EntityKind::FishOrder, self.status.as_deref())
            }
        }
    }
}

impl Sortable for Farm {
    type Field = FarmField;

    fn sort_key(&self, field: FarmField) -> SortKey {
        match field {
            FarmField::Id => SortKey::Number(self.id as f64),
            FarmField::Name => SortKey::Text(self.name.clone()),
        }
    }
}

impl Sortable for Account {
    type Field = AccountField;

    fn sort_key(&self, field: AccountField) -> SortKey {
        match field {
            AccountField::Id => SortKey::Number(self.id as f64),
            AccountField::Name => SortKey::Text(self.name.clone()),
            AccountField::Email => SortKey::text(self.email.as_deref()),
            AccountField::Role => SortKey::Text(self.role.label().to_string()),
        }
    }
}
