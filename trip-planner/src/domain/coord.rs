//! Geographic coordinates.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe, stored as (longitude, latitude) in degrees.
///
/// The field order matches the `[lon, lat]` convention used by map
/// renderers, so a path of coordinates can be handed to them unchanged.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Coordinate;
///
/// let sofia = Coordinate::new(23.3219, 42.6977);
/// let belgrade = Coordinate::new(20.4489, 44.7866);
///
/// let mid = Coordinate::midpoint(sofia, belgrade);
/// assert!((mid.lon - 21.8854).abs() < 1e-9);
///
/// let km = sofia.haversine_km(belgrade);
/// assert!(km > 300.0 && km < 340.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Arithmetic mean of two coordinates.
    ///
    /// This is the point where a leg's transport icon is placed on the map.
    /// It is not the great-circle midpoint.
    pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
        Coordinate {
            lon: (a.lon + b.lon) / 2.0,
            lat: (a.lat + b.lat) / 2.0,
        }
    }

    /// Great-circle distance to `other` in kilometres (haversine formula).
    pub fn haversine_km(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
    }

    /// Returns true if both components are finite and within their ranges.
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// The coordinate as a `[lon, lat]` pair.
    pub fn as_pair(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}
