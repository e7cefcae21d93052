//! Slippy-map pixel-space backend for the OMH map abstraction.
//!
//! Translates the common option records into pixel-space paint structs:
//! marker icons get a pixel alignment and offset computed from the anchor
//! and icon size, strokes get pixel widths and dash intervals scaled by
//! screen density. The paints are what an overlay renderer drawing onto
//! raster tiles consumes directly.

pub mod paint;
pub use paint::*;

mod provider;
pub use provider::{OsmEntity, OsmMapProvider, PROVIDER_PATH};

use omh::provider::ProviderRegistry;
use omh_types::DiscreteAnchor;

/// Registers this backend in the given registry under [`PROVIDER_PATH`].
pub fn register(registry: &ProviderRegistry) {
    registry.register(PROVIDER_PATH, || Box::new(OsmMapProvider::default()));
}

/// Icon alignment in this backend's vocabulary: compass directions name
/// the icon edge or corner pinned to the geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelAlignment {
    /// Icon centered on the point.
    Center,
    /// Left edge midpoint pinned to the point.
    West,
    /// Right edge midpoint pinned to the point.
    East,
    /// Top edge midpoint pinned to the point.
    North,
    /// Bottom edge midpoint pinned to the point.
    South,
    /// Top-left corner pinned to the point.
    NorthWest,
    /// Top-right corner pinned to the point.
    NorthEast,
    /// Bottom-left corner pinned to the point.
    SouthWest,
    /// Bottom-right corner pinned to the point.
    SouthEast,
}

impl PixelAlignment {
    /// Fraction of the icon extent at which the alignment pins the icon,
    /// `(0, 0)` top-left.
    pub fn fraction(&self) -> (f64, f64) {
        match self {
            PixelAlignment::Center => (0.5, 0.5),
            PixelAlignment::West => (0.0, 0.5),
            PixelAlignment::East => (1.0, 0.5),
            PixelAlignment::North => (0.5, 0.0),
            PixelAlignment::South => (0.5, 1.0),
            PixelAlignment::NorthWest => (0.0, 0.0),
            PixelAlignment::NorthEast => (1.0, 0.0),
            PixelAlignment::SouthWest => (0.0, 1.0),
            PixelAlignment::SouthEast => (1.0, 1.0),
        }
    }
}

impl From<DiscreteAnchor> for PixelAlignment {
    fn from(value: DiscreteAnchor) -> Self {
        match value {
            DiscreteAnchor::Center => PixelAlignment::Center,
            DiscreteAnchor::Left => PixelAlignment::West,
            DiscreteAnchor::Right => PixelAlignment::East,
            DiscreteAnchor::Top => PixelAlignment::North,
            DiscreteAnchor::Bottom => PixelAlignment::South,
            DiscreteAnchor::TopLeft => PixelAlignment::NorthWest,
            DiscreteAnchor::TopRight => PixelAlignment::NorthEast,
            DiscreteAnchor::BottomLeft => PixelAlignment::SouthWest,
            DiscreteAnchor::BottomRight => PixelAlignment::SouthEast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omh_types::Anchor;

    #[test]
    fn alignment_from_anchor() {
        assert_eq!(
            PixelAlignment::from(Anchor::new(0.1, 0.9).discretize()),
            PixelAlignment::SouthWest
        );
        assert_eq!(
            PixelAlignment::from(Anchor::new(0.5, 1.0).discretize()),
            PixelAlignment::South
        );
    }
}
