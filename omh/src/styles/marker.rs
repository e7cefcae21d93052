use omh_types::{Anchor, OmhCoordinate, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default icon extent in dp when the caller does not size the icon.
const DEFAULT_ICON_SIZE_DP: f64 = 32.0;

/// Configuration of a single map marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OmhMarkerOptions {
    /// Geographic position of the marker.
    pub position: OmhCoordinate,
    /// Title shown in the marker's info window.
    pub title: Option<String>,
    /// Secondary text shown under the title.
    pub snippet: Option<String>,
    /// Point of the icon aligned with [`position`](Self::position).
    pub anchor: Anchor,
    /// Icon opacity, `0.0` transparent to `1.0` opaque.
    pub alpha: f32,
    /// Icon rotation in degrees, clockwise from north.
    pub rotation: f32,
    /// Whether the icon lies flat on the map surface instead of facing the
    /// camera.
    pub is_flat: bool,
    /// Whether the marker can be repositioned by dragging.
    pub is_draggable: bool,
    /// Whether the marker is drawn at all.
    pub is_visible: bool,
    /// Draw order among markers; higher values draw on top.
    pub z_index: f32,
    /// Icon extent in dp.
    pub icon_size: Size<f64>,
}

impl OmhMarkerOptions {
    /// Creates marker options at the given position with default styling.
    pub fn at(position: OmhCoordinate) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Sets the info window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the info window snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Sets the icon anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the icon size in dp.
    pub fn with_icon_size(mut self, size: Size<f64>) -> Self {
        self.icon_size = size;
        self
    }

    /// Makes the marker draggable.
    pub fn draggable(mut self) -> Self {
        self.is_draggable = true;
        self
    }
}

impl Default for OmhMarkerOptions {
    fn default() -> Self {
        Self {
            position: OmhCoordinate::default(),
            title: None,
            snippet: None,
            anchor: Anchor::BOTTOM_CENTER,
            alpha: 1.0,
            rotation: 0.0,
            is_flat: false,
            is_draggable: false,
            is_visible: true,
            z_index: 0.0,
            icon_size: Size::new(DEFAULT_ICON_SIZE_DP, DEFAULT_ICON_SIZE_DP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omh_types::latlon;

    #[test]
    fn builder_keeps_defaults() {
        let options = OmhMarkerOptions::at(latlon!(50.06, 19.94)).with_title("Krakow");

        assert_eq!(options.title.as_deref(), Some("Krakow"));
        assert_eq!(options.anchor, Anchor::BOTTOM_CENTER);
        assert!(options.is_visible);
        assert!(!options.is_draggable);
        assert_eq!(options.alpha, 1.0);
    }
}
