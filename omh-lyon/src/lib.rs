//! Lyon tessellation backend for the OMH map abstraction.
//!
//! Translates the common option records into `lyon` path and stroke
//! primitives: caps and joints map onto [`lyon::path::LineCap`] and
//! [`lyon::path::LineJoin`], widths are converted from dp into pixels, and
//! dash patterns become flat painted/unpainted interval arrays suitable
//! for a dashing pre-pass before tessellation.

pub mod convert;
pub use convert::*;

mod provider;
pub use provider::{LyonEntity, LyonMapProvider, MarkerSymbol, PROVIDER_PATH};

use omh::provider::ProviderRegistry;
use omh_types::DiscreteAnchor;

/// Registers this backend in the given registry under [`PROVIDER_PATH`].
pub fn register(registry: &ProviderRegistry) {
    registry.register(PROVIDER_PATH, || Box::new(LyonMapProvider::default()));
}

/// Placement of a marker icon relative to its anchor point, in this
/// backend's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPlacement {
    /// Icon centered on the point.
    Middle,
    /// Anchor on the middle of the icon's left edge.
    MiddleLeft,
    /// Anchor on the middle of the icon's right edge.
    MiddleRight,
    /// Anchor on the middle of the icon's top edge.
    TopMiddle,
    /// Anchor on the middle of the icon's bottom edge.
    BottomMiddle,
    /// Anchor on the icon's top-left corner.
    TopLeft,
    /// Anchor on the icon's top-right corner.
    TopRight,
    /// Anchor on the icon's bottom-left corner.
    BottomLeft,
    /// Anchor on the icon's bottom-right corner.
    BottomRight,
}

impl From<DiscreteAnchor> for IconPlacement {
    fn from(value: DiscreteAnchor) -> Self {
        match value {
            DiscreteAnchor::Center => IconPlacement::Middle,
            DiscreteAnchor::Left => IconPlacement::MiddleLeft,
            DiscreteAnchor::Right => IconPlacement::MiddleRight,
            DiscreteAnchor::Top => IconPlacement::TopMiddle,
            DiscreteAnchor::Bottom => IconPlacement::BottomMiddle,
            DiscreteAnchor::TopLeft => IconPlacement::TopLeft,
            DiscreteAnchor::TopRight => IconPlacement::TopRight,
            DiscreteAnchor::BottomLeft => IconPlacement::BottomLeft,
            DiscreteAnchor::BottomRight => IconPlacement::BottomRight,
        }
    }
}
