//! Conversions between OMH value types and the `geo-types` ecosystem.
//!
//! `geo-types` geometries use `x = longitude`, `y = latitude` ordering;
//! these conversions take care of the axis swap.

use geo_types::{coord, Coord, LineString, Point, Polygon};

use crate::geo::OmhCoordinate;

impl From<OmhCoordinate> for Coord<f64> {
    fn from(value: OmhCoordinate) -> Self {
        coord! { x: value.lon(), y: value.lat() }
    }
}

impl From<OmhCoordinate> for Point<f64> {
    fn from(value: OmhCoordinate) -> Self {
        Point::new(value.lon(), value.lat())
    }
}

impl From<Coord<f64>> for OmhCoordinate {
    fn from(value: Coord<f64>) -> Self {
        OmhCoordinate::latlon(value.y, value.x)
    }
}

impl From<Point<f64>> for OmhCoordinate {
    fn from(value: Point<f64>) -> Self {
        OmhCoordinate::latlon(value.y(), value.x())
    }
}

/// Converts a sequence of coordinates into a `geo-types` line string.
pub fn line_string(points: &[OmhCoordinate]) -> LineString<f64> {
    LineString::from_iter(points.iter().map(|p| Coord::from(*p)))
}

/// Converts an outline ring and hole rings into a `geo-types` polygon.
pub fn polygon(outline: &[OmhCoordinate], holes: &[Vec<OmhCoordinate>]) -> Polygon<f64> {
    Polygon::new(
        line_string(outline),
        holes.iter().map(|hole| line_string(hole)).collect(),
    )
}
