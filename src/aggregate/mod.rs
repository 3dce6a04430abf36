//! Aggregation helpers for dashboards and tables
//!
//! Pure folds over entity lists. Nothing here touches the network or
//! mutates its input.

mod count;
mod dashboard;
mod search;
mod sort;
mod sum;


pub use count::{
    count_by_registered_status, count_by_status, ordered_counts, HasStatus, StatusCount,
    UNKNOWN_STATUS,
};
pub use dashboard::{revenue_by_farm, total_revenue, trip_revenue_by_month, DashboardSummary};
pub use search::{filter_by_search_term, search, FieldSelector, Searchable};
pub use sort::{
    page_count, paginate, sort_by, sort_entities, AccountField, BookingField, FarmField,
    FishOrderField, SortKey, SortOrder, Sortable, TripField,
};
pub use sum::{finite_or_zero, sum_by_key, sum_values};
