use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::rating::RatingSummary;
use crate::domain::barber::BarberProfile;
use crate::domain::user::User;

/// Order of the discovery list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Best average first, more reviews breaking ties
    #[default]
    Rating,
    /// Nearest first, unknown distances last
    Distance,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Rating => write!(f, "rating"),
            SortKey::Distance => write!(f, "distance"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "rating" => Ok(SortKey::Rating),
            "distance" => Ok(SortKey::Distance),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// One barber on the discovery list with everything needed to rank it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarberListing {
    pub user: User,
    pub profile: Option<BarberProfile>,
    pub rating: RatingSummary,
    /// Kilometres from the user, `None` without a user location or a shop
    pub distance_km: Option<f64>,
}

/// Orders listings by `key`
///
/// The sort is stable: listings that compare equal keep their input order.
pub fn rank_barbers(mut listings: Vec<BarberListing>, key: SortKey) -> Vec<BarberListing> {
    match key {
        SortKey::Rating => listings.sort_by(compare_by_rating),
        SortKey::Distance => listings.sort_by(compare_by_distance),
    }
    listings
}

fn compare_by_rating(a: &BarberListing, b: &BarberListing) -> Ordering {
    b.rating
        .average
        .total_cmp(&a.rating.average)
        .then_with(|| b.rating.count.cmp(&a.rating.count))
}

fn compare_by_distance(a: &BarberListing, b: &BarberListing) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
