//! Geographic position types.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used for distance calculations.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Position on the surface of the Earth.
///
/// This is the only position representation that crosses provider
/// boundaries. Latitude and longitude are in degrees; the value is
/// immutable after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct OmhCoordinate {
    lat: f64,
    lon: f64,
}

impl OmhCoordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians.
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }

    /// Great-circle distance to another coordinate in meters (haversine on
    /// a spherical datum).
    pub fn distance_to(&self, other: &OmhCoordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }
}

/// Creates a new [`OmhCoordinate`] from latitude and longitude values (in
/// degrees).
///
/// ```
/// use omh_types::latlon;
///
/// let position = latlon!(52.23, 21.01);
/// assert_eq!(position.lat(), 52.23);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::OmhCoordinate::latlon($lat, $lon)
    };
}
