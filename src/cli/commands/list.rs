//! List command - Search, sort and page through one entity kind

use std::str::FromStr;

use serde::Serialize;

use crate::aggregate::{
    page_count, paginate, search, sort_entities, Searchable, SortOrder, Sortable,
};
use crate::errors::{KoiError, Result};
use crate::schemas::{Booking, EntityKind, EntityStore, FishOrder, Trip};

use super::{print_json, Workspace};

/// Listing options shared by every kind
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

/// One page of a filtered, sorted listing
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub page: usize,
    pub pages: usize,
    pub total: usize,
    pub items: Vec<T>,
}

/// Filter, then sort, then cut out the requested page
pub fn select<T>(entities: &[T], opts: &ListOptions) -> Result<Page<T>>
where
    T: Searchable + Sortable,
    T::Field: FromStr<Err = String>,
{
    let matched: Vec<T> = search(entities, opts.search.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    let sorted = match opts.sort.as_deref() {
        Some(field) => {
            let field = field.parse::<T::Field>().map_err(KoiError::ConfigError)?;
            sort_entities(&matched, field, opts.order)
        }
        None => matched,
    };
    let page = opts.page.max(1);
    Ok(Page {
        page,
        pages: page_count(sorted.len(), opts.page_size),
        total: sorted.len(),
        items: paginate(&sorted, page, opts.page_size).to_vec(),
    })
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn print_bookings(store: &EntityStore, items: &[Booking]) {
    println!("{:<6} {:<18} {:<20} {:<17} Description", "ID", "Status", "Customer", "Created");
    for b in items {
        let customer = b
            .customer_id
            .and_then(|id| store.account(id))
            .map(|a| a.name.as_str());
        let created = b
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<18} {:<20} {:<17} {}",
            b.id,
            text(b.status.as_deref()),
            text(customer),
            created,
            text(b.description.as_deref())
        );
    }
}

fn print_trips(items: &[Trip]) {
    println!("{:<6} {:<10} {:<12} {:>12} Airport", "ID", "Status", "Start", "Price");
    for t in items {
        let start = t
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        let price = t
            .price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<6} {:<10} {:<12} {:>12} {}",
            t.id,
            text(t.status.as_deref()),
            start,
            price,
            text(t.departure_airport.as_deref())
        );
    }
}

fn print_fish_orders(store: &EntityStore, items: &[FishOrder]) {
    println!("{:<6} {:<8} {:<12} {:>12} Farm", "ID", "Booking", "Status", "Total");
    for o in items {
        let farm = o.farm_id.and_then(|id| store.farm(id)).map(|f| f.name.as_str());
        println!(
            "{:<6} {:<8} {:<12} {:>12.2} {}",
            o.id,
            o.booking_id,
            text(o.status.as_deref()),
            o.effective_total(),
            text(farm)
        );
    }
}

fn footer<T>(page: &Page<T>) {
    println!("Page {}/{} ({} total)", page.page, page.pages, page.total);
}

pub async fn run(ws: &Workspace, kind: EntityKind, opts: ListOptions, json: bool) -> Result<()> {
    let store = ws.load_store().await?;

    match kind {
        EntityKind::Booking => {
            let page = select(&store.bookings(), &opts)?;
            if json {
                return print_json(&page);
            }
            print_bookings(&store, &page.items);
            footer(&page);
        }
        EntityKind::Trip => {
            let page = select(&store.trips(), &opts)?;
            if json {
                return print_json(&page);
            }
            print_trips(&page.items);
            footer(&page);
        }
        EntityKind::FishOrder => {
            let page = select(&store.fish_orders(), &opts)?;
            if json {
                return print_json(&page);
            }
            print_fish_orders(&store, &page.items);
            footer(&page);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{BookingStatus, TripStatus};

    fn bookings() -> Vec<Booking> {
        vec![
            Booking::new(1, 5)
                .with_status(BookingStatus::OnGoing)
                .with_description("Kohaku pair"),
            Booking::new(2, 5).with_description("Showa"),
            Booking::new(3, 6)
                .with_status(BookingStatus::PaidBooking)
                .with_description("kohaku tosai"),
        ]
    }

    fn opts() -> ListOptions {
        ListOptions {
            page: 1,
            page_size: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_select_search_then_sort() {
        let page = select(
            &bookings(),
            &ListOptions {
                search: Some("KOHAKU".to_string()),
                sort: Some("status".to_string()),
                ..opts()
            },
        )
        .unwrap();
        let ids: Vec<i64> = page.items.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_select_pages() {
        let page = select(
            &bookings(),
            &ListOptions {
                sort: Some("id".to_string()),
                order: SortOrder::Desc,
                page: 2,
                page_size: 2,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(page.pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 1);
    }

    #[test]
    fn test_select_unknown_sort_field() {
        let trips = vec![Trip::new(1).with_status(TripStatus::Redo)];
        let err = select(
            &trips,
            &ListOptions {
                sort: Some("weight".to_string()),
                ..opts()
            },
        )
        .unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}
