use omh_types::OmhCoordinate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::styles::{JointType, PatternItem};

/// Configuration of a filled polygon drawn over the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OmhPolygonOptions {
    /// Outer ring of the polygon in draw order.
    pub outline: Vec<OmhCoordinate>,
    /// Rings cut out of the polygon interior.
    pub holes: Vec<Vec<OmhCoordinate>>,
    /// Outline stroke color.
    pub stroke_color: Color,
    /// Outline stroke width in dp.
    pub stroke_width: f32,
    /// Outline dash pattern; empty for a solid outline.
    pub stroke_pattern: Vec<PatternItem>,
    /// Joint between consecutive outline segments.
    pub stroke_joint_type: JointType,
    /// Interior fill color.
    pub fill_color: Color,
    /// Whether the polygon is drawn at all.
    pub is_visible: bool,
    /// Whether the polygon participates in tap hit-testing.
    pub is_clickable: bool,
    /// Draw order among overlays; higher values draw on top.
    pub z_index: f32,
}

impl OmhPolygonOptions {
    /// Creates polygon options with the given outer ring and default
    /// styling.
    pub fn outlined_by(outline: Vec<OmhCoordinate>) -> Self {
        Self {
            outline,
            ..Default::default()
        }
    }

    /// Adds a hole ring.
    pub fn with_hole(mut self, hole: Vec<OmhCoordinate>) -> Self {
        self.holes.push(hole);
        self
    }

    /// Sets the outline stroke color.
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Sets the interior fill color.
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets the outline stroke width in dp.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }
}

impl Default for OmhPolygonOptions {
    fn default() -> Self {
        Self {
            outline: vec![],
            holes: vec![],
            stroke_color: Color::BLACK,
            stroke_width: 5.0,
            stroke_pattern: vec![],
            stroke_joint_type: JointType::default(),
            fill_color: Color::TRANSPARENT,
            is_visible: true,
            is_clickable: false,
            z_index: 0.0,
        }
    }
}
