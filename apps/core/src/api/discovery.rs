use serde::Serialize;

use crate::domain::barber::Coordinates;
use crate::ranking::{aggregate_rating, distance_between, project_offset, rank_barbers, BarberListing, MapOffset, SortKey};
use crate::store::StoreSnapshot;

/// Pixels per kilometre on the client map
pub const MAP_SCALE: f64 = 20.0;

/// A barber pin on the client map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub id: String,
    pub name: String,
    pub offset: MapOffset,
}

/// Builds the ranked discovery list for a client
///
/// Lists approved, unbanned barbers. Distance is only filled in when both
/// `location` and the barber's profile are known.
pub fn discover_barbers(snapshot: &StoreSnapshot, location: Option<Coordinates>, key: SortKey) -> Vec<BarberListing> {
    let listings = snapshot
        .users
        .iter()
        .filter(|u| u.is_listed_barber())
        .map(|user| {
            let profile = snapshot.barber_profile(user.id()).cloned();
            let distance_km = match (location, &profile) {
                (Some(from), Some(profile)) => Some(distance_between(from, profile.shop.location)),
                _ => None,
            };
            BarberListing {
                user: user.clone(),
                rating: aggregate_rating(&snapshot.appointments, user.id()),
                profile,
                distance_km,
            }
        })
        .collect();

    rank_barbers(listings, key)
}

/// Projects every listed barber that has a shop onto a map centred on `origin`
pub fn visible_on_map(snapshot: &StoreSnapshot, origin: Coordinates, scale: f64) -> Vec<MapPin> {
    snapshot
        .users
        .iter()
        .filter(|u| u.is_listed_barber())
        .filter_map(|user| {
            let profile = snapshot.barber_profile(user.id())?;
            Some(MapPin {
                id: user.id().to_string(),
                name: user.name().to_string(),
                offset: project_offset(origin, profile.shop.location, scale),
            })
        })
        .collect()
}
