//! Free-text search over entity lists

use crate::schemas::{Account, Booking, Farm, FishOrder, Trip, Variety};

/// Pulls one searchable string out of an entity
pub type FieldSelector<T> = fn(&T) -> Option<String>;

/// Keep entities where any selected field contains `term`, ignoring case.
///
/// A blank term returns every entity in its original order.
pub fn filter_by_search_term<'a, T>(
    entities: &'a [T],
    term: &str,
    selectors: &[FieldSelector<T>],
) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return entities.iter().collect();
    }
    entities
        .iter()
        .filter(|entity| {
            selectors.iter().any(|select| {
                select(entity)
                    .map(|field| field.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .collect()
}

/// Default search fields for an entity
pub trait Searchable: Sized {
    fn selectors() -> Vec<FieldSelector<Self>>;
}

/// Search using the entity's default fields
pub fn search<'a, T: Searchable>(entities: &'a [T], term: &str) -> Vec<&'a T> {
    filter_by_search_term(entities, term, &T::selectors())
}

impl Searchable for Booking {
    fn selectors() -> Vec<FieldSelector<Self>> {
        vec![
            |b: &Booking| Some(b.id.to_string()),
            |b: &Booking| b.description.clone(),
            |b: &Booking| b.status.clone(),
        ]
    }
}

impl Searchable for Trip {
    fn selectors() -> Vec<FieldSelector<Self>> {
        vec![
            |t: &Trip| Some(t.id.to_string()),
            |t: &Trip| t.departure_airport.clone(),
            |t: &Trip| t.description.clone(),
            |t: &Trip| t.status.clone(),
        ]
    }
}

impl Searchable for FishOrder {
    fn selectors() -> Vec<FieldSelector<Self>> {
        vec![
            |o: &FishOrder| Some(o.id.to_string()),
            |o: &FishOrder| Some(o.booking_id.to_string()),
            |o: &FishOrder| o.delivery_address.clone(),
            |o: &FishOrder| o.status.clone(),
        ]
    }
}

impl Searchable for Farm {
    fn selectors() -> Vec<FieldSelector<Self>> {
        vec![
            |f: &Farm| Some(f.name.clone()),
            |f: &Farm| f.address.clone(),
            |f: &Farm| f.phone_number.clone(),
        ]
    }
}

impl Searchable for Variety {
    fn selectors() -> Vec<FieldSelector<Self>> {
        vec![|v: &Variety| Some(v.name.clone()), |v: &Variety| v.description.clone()]
    }
}

impl Searchable for Account {
    fn selectors() -> Vec<FieldSelector<Self>> {
        vec![
            |a: &Account| Some(a.id.to_string()),
            |a: &Account| Some(a.name.clone()),
            |a: &Account| a.email.clone(),
            |a: &Account| a.phone_number.clone(),
            |a: &Account| Some(a.role.label().to_string()),
        ]
    }
}
