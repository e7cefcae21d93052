//! Icon anchors and their discretization.
//!
//! An anchor is a fractional `(u, v)` offset that aligns an icon relative
//! to the geographic point it marks: `(0, 0)` is the top-left corner of
//! the icon, `(1, 1)` the bottom-right one. Backends that cannot position
//! an icon by an arbitrary fraction use [`Anchor::discretize`] to pick the
//! closest of nine fixed alignments.

use serde::{Deserialize, Serialize};

use crate::offset::Offset2D;
use crate::size::Size;

/// Half-width of the band around the icon center within which an axis is
/// considered centered.
const NEAR_CENTER: f64 = 0.25;

/// Fractional icon anchor, with both components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    u: f64,
    v: f64,
}

impl Anchor {
    /// Anchor at the center of the icon.
    pub const CENTER: Anchor = Anchor { u: 0.5, v: 0.5 };

    /// Anchor at the bottom-center of the icon, the usual choice for pin
    /// markers whose tip points at the geographic position.
    pub const BOTTOM_CENTER: Anchor = Anchor { u: 0.5, v: 1.0 };

    /// Creates a new anchor. Components outside `[0, 1]` are clamped into
    /// range.
    pub fn new(u: f64, v: f64) -> Self {
        Self {
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Horizontal fraction, `0.0` at the left edge of the icon.
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Vertical fraction, `0.0` at the top edge of the icon.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Position of the anchor point within an icon of the given size,
    /// as an offset from the icon's top-left corner.
    pub fn offset_within(&self, size: Size<f64>) -> Offset2D<f64> {
        Offset2D::new(self.u * size.width(), self.v * size.height())
    }

    /// Classifies the anchor into one of nine fixed buckets.
    ///
    /// Each axis is "near center" when it is within `0.25` of the icon
    /// center. Both near center gives [`DiscreteAnchor::Center`]; exactly
    /// one gives the edge-midpoint bucket on the side of the remaining
    /// axis; neither gives the corner bucket from both signs.
    pub fn discretize(&self) -> DiscreteAnchor {
        let du = self.u - 0.5;
        let dv = self.v - 0.5;

        let u_centered = du.abs() < NEAR_CENTER;
        let v_centered = dv.abs() < NEAR_CENTER;

        match (u_centered, v_centered) {
            (true, true) => DiscreteAnchor::Center,
            (false, true) => {
                if du < 0.0 {
                    DiscreteAnchor::Left
                } else {
                    DiscreteAnchor::Right
                }
            }
            (true, false) => {
                if dv < 0.0 {
                    DiscreteAnchor::Top
                } else {
                    DiscreteAnchor::Bottom
                }
            }
            (false, false) => match (du < 0.0, dv < 0.0) {
                (true, true) => DiscreteAnchor::TopLeft,
                (false, true) => DiscreteAnchor::TopRight,
                (true, false) => DiscreteAnchor::BottomLeft,
                (false, false) => DiscreteAnchor::BottomRight,
            },
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::CENTER
    }
}

/// One of the nine fixed icon alignments an [`Anchor`] discretizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscreteAnchor {
    /// Center of the icon.
    Center,
    /// Midpoint of the left edge.
    Left,
    /// Midpoint of the right edge.
    Right,
    /// Midpoint of the top edge.
    Top,
    /// Midpoint of the bottom edge.
    Bottom,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}
