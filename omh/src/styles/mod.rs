//! Common option records and the stroke vocabulary shared by all backends.
//!
//! The records are plain mutable structs: construct one, tweak the fields
//! (directly or through the `with_*` helpers), then hand it to a
//! [`MapProvider`](crate::provider::MapProvider). Backends translate the
//! record field by field into their native styling primitives; nothing in
//! a record outlives that translation.

mod marker;
pub use marker::OmhMarkerOptions;

mod polyline;
pub use polyline::OmhPolylineOptions;

mod polygon;
pub use polygon::OmhPolygonOptions;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One primitive of a dashed-line pattern.
///
/// A pattern is a sequence of items repeated along the line. An empty
/// pattern means a solid line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternItem {
    /// Painted segment of the given length in dp.
    Dash(f32),
    /// Unpainted segment of the given length in dp.
    Gap(f32),
    /// Painted dot at the current position.
    Dot,
}

impl PatternItem {
    /// Returns true for the painted kinds (`Dash`, `Dot`).
    pub fn is_painted(&self) -> bool {
        !matches!(self, PatternItem::Gap(_))
    }
}

/// Style of a line ending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapStyle {
    /// The line ends exactly at its last point.
    #[default]
    Butt,
    /// Half-disc protruding past the last point.
    Round,
    /// Half-square protruding past the last point.
    Square,
}

/// Style of the joint between two consecutive line segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointType {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Flattened corner.
    Bevel,
}
