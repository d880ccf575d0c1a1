use serde::Serialize;

use crate::domain::barber::Coordinates;

/// Rough kilometres per degree of latitude used by the map view
const KM_PER_DEGREE: f64 = 111.0;

/// Great-circle distance in kilometres using the spherical law of cosines
///
/// Identical coordinates return exactly 0. The cosine is clamped to 1 before
/// `acos` so rounding never produces NaN. Degrees convert to kilometres via
/// nautical miles: `deg * 60 * 1.1515 * 1.609344`.
///
/// # Example
/// ```
/// use barberbook_core::ranking::great_circle_distance_km;
///
/// assert_eq!(great_circle_distance_km(40.0, -74.0, 40.0, -74.0), 0.0);
/// ```
pub fn great_circle_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let rad_lat1 = lat1.to_radians();
    let rad_lat2 = lat2.to_radians();
    let rad_theta = (lon1 - lon2).to_radians();

    let cosine = rad_lat1.sin() * rad_lat2.sin() + rad_lat1.cos() * rad_lat2.cos() * rad_theta.cos();
    let degrees = cosine.min(1.0).acos().to_degrees();

    degrees * 60.0 * 1.1515 * 1.609344
}

/// Convenience wrapper over [`great_circle_distance_km`]
pub fn distance_between(from: Coordinates, to: Coordinates) -> f64 {
    great_circle_distance_km(from.lat, from.lng, to.lat, to.lng)
}

/// Position of a point relative to the user on a flat map, in pixels
///
/// `y` grows southwards, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapOffset {
    pub x: f64,
    pub y: f64,
}

/// Projects `target` onto a flat map centred on `origin`
///
/// Not a real map projection: one degree of latitude is 111 km and longitude
/// is shrunk by the cosine of the origin latitude. `scale` is pixels per km.
pub fn project_offset(origin: Coordinates, target: Coordinates, scale: f64) -> MapOffset {
    let delta_lat = target.lat - origin.lat;
    let delta_lng = target.lng - origin.lng;

    MapOffset {
        x: delta_lng * KM_PER_DEGREE * origin.lat.to_radians().cos() * scale,
        y: -delta_lat * KM_PER_DEGREE * scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_exactly_zero() {
        let d = great_circle_distance_km(40.0, -74.0, 40.0, -74.0);
        assert_eq!(d, 0.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn nearly_identical_points_do_not_produce_nan() {
        let d = great_circle_distance_km(40.7128, -74.0060, 40.7128, -74.006000000001);
        assert!(!d.is_nan());
        assert!(d < 0.001);
    }

    #[test]
    fn new_york_to_los_angeles() {
        let d = great_circle_distance_km(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((3930.0..3950.0).contains(&d), "got {}", d);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinates::new(41.8781, -87.6298);
        let b = Coordinates::new(34.0522, -118.2437);
        assert!((distance_between(a, b) - distance_between(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // 60 nautical-style miles of 1.1515 statute miles each
        let d = great_circle_distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 60.0 * 1.1515 * 1.609344).abs() < 1e-6);
    }

    #[test]
    fn projection_puts_north_up() {
        let origin = Coordinates::new(0.0, 0.0);
        let north = project_offset(origin, Coordinates::new(1.0, 0.0), 1.0);

        assert_eq!(north.x, 0.0);
        assert_eq!(north.y, -111.0);
    }

    #[test]
    fn projection_shrinks_longitude_with_latitude() {
        let origin = Coordinates::new(60.0, 0.0);
        let east = project_offset(origin, Coordinates::new(60.0, 1.0), 2.0);

        assert!((east.x - 111.0).abs() < 1e-9);
        assert_eq!(east.y, 0.0);
    }
}
