//! Value types shared by every OMH map backend.
//!
//! This crate defines the common vocabulary the map abstraction speaks:
//! geographic coordinates ([`OmhCoordinate`]), generic pixel-space vectors
//! ([`Point2D`], [`Offset2D`], [`Size`]), icon anchors with their discrete
//! buckets ([`Anchor`], [`DiscreteAnchor`]) and screen density conversions
//! ([`ScreenDensity`]). Backend crates translate these into their native
//! representations; nothing here depends on any particular backend.

pub mod anchor;
pub use anchor::*;

pub mod geo;
pub use geo::*;

mod point;
pub use point::*;

mod offset;
pub use offset::*;

pub mod error;
pub mod screen;
pub mod size;

pub use screen::ScreenDensity;
pub use size::Size;

#[cfg(feature = "geo-types")]
pub mod geo_types;
