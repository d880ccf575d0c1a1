//! Ranking engine
//!
//! Pure functions over store snapshots: rating aggregation, distance and the
//! discovery sort order. Nothing here touches the domain store.

pub mod geo;
pub mod rating;
pub mod sort;

pub use geo::{distance_between, great_circle_distance_km, project_offset, MapOffset};
pub use rating::{aggregate_rating, RatingSummary};
pub use sort::{rank_barbers, BarberListing, SortKey};
