//! GeoJSON serialization backend for the OMH map abstraction.
//!
//! Translates the common option records into `geojson` features carrying
//! simplestyle-like properties (`stroke`, `stroke-width`, `fill`,
//! `stroke-dasharray`, ...), and parses such features back into option
//! records, so styled overlays can round-trip through a GeoJSON document.

pub mod convert;
pub use convert::*;

mod provider;
pub use provider::{GeoJsonMapProvider, PROVIDER_PATH};

use omh::provider::ProviderRegistry;
use omh_types::DiscreteAnchor;

/// Registers this backend in the given registry under [`PROVIDER_PATH`].
pub fn register(registry: &ProviderRegistry) {
    registry.register(PROVIDER_PATH, || Box::new(GeoJsonMapProvider::new()));
}

/// Marker icon alignment in this backend's vocabulary, serialized as a
/// kebab-case property string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerAlignment {
    /// `"center"`
    Center,
    /// `"left"`
    Left,
    /// `"right"`
    Right,
    /// `"top"`
    Top,
    /// `"bottom"`
    Bottom,
    /// `"top-left"`
    TopLeft,
    /// `"top-right"`
    TopRight,
    /// `"bottom-left"`
    BottomLeft,
    /// `"bottom-right"`
    BottomRight,
}

impl MarkerAlignment {
    /// The property string this alignment serializes to.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerAlignment::Center => "center",
            MarkerAlignment::Left => "left",
            MarkerAlignment::Right => "right",
            MarkerAlignment::Top => "top",
            MarkerAlignment::Bottom => "bottom",
            MarkerAlignment::TopLeft => "top-left",
            MarkerAlignment::TopRight => "top-right",
            MarkerAlignment::BottomLeft => "bottom-left",
            MarkerAlignment::BottomRight => "bottom-right",
        }
    }

    /// Parses a property string. Unknown values warn and fall back to
    /// [`MarkerAlignment::Center`].
    pub fn from_property(value: &str) -> Self {
        match value {
            "center" => MarkerAlignment::Center,
            "left" => MarkerAlignment::Left,
            "right" => MarkerAlignment::Right,
            "top" => MarkerAlignment::Top,
            "bottom" => MarkerAlignment::Bottom,
            "top-left" => MarkerAlignment::TopLeft,
            "top-right" => MarkerAlignment::TopRight,
            "bottom-left" => MarkerAlignment::BottomLeft,
            "bottom-right" => MarkerAlignment::BottomRight,
            other => {
                log::warn!("unknown marker alignment {other:?}, falling back to center");
                MarkerAlignment::Center
            }
        }
    }
}

impl From<DiscreteAnchor> for MarkerAlignment {
    fn from(value: DiscreteAnchor) -> Self {
        match value {
            DiscreteAnchor::Center => MarkerAlignment::Center,
            DiscreteAnchor::Left => MarkerAlignment::Left,
            DiscreteAnchor::Right => MarkerAlignment::Right,
            DiscreteAnchor::Top => MarkerAlignment::Top,
            DiscreteAnchor::Bottom => MarkerAlignment::Bottom,
            DiscreteAnchor::TopLeft => MarkerAlignment::TopLeft,
            DiscreteAnchor::TopRight => MarkerAlignment::TopRight,
            DiscreteAnchor::BottomLeft => MarkerAlignment::BottomLeft,
            DiscreteAnchor::BottomRight => MarkerAlignment::BottomRight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omh_types::Anchor;

    #[test]
    fn alignment_strings_roundtrip() {
        for alignment in [
            MarkerAlignment::Center,
            MarkerAlignment::Left,
            MarkerAlignment::Right,
            MarkerAlignment::Top,
            MarkerAlignment::Bottom,
            MarkerAlignment::TopLeft,
            MarkerAlignment::TopRight,
            MarkerAlignment::BottomLeft,
            MarkerAlignment::BottomRight,
        ] {
            assert_eq!(MarkerAlignment::from_property(alignment.as_str()), alignment);
        }
    }

    #[test]
    fn unknown_alignment_defaults_to_center() {
        assert_eq!(
            MarkerAlignment::from_property("upper-middle"),
            MarkerAlignment::Center
        );
    }

    #[test]
    fn alignment_from_anchor() {
        assert_eq!(
            MarkerAlignment::from(Anchor::new(0.1, 0.9).discretize()),
            MarkerAlignment::BottomLeft
        );
    }
}
