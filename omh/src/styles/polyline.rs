use omh_types::OmhCoordinate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::styles::{CapStyle, JointType, PatternItem};

/// Configuration of a polyline drawn over the map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OmhPolylineOptions {
    /// Vertices of the line in draw order.
    pub points: Vec<OmhCoordinate>,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in dp.
    pub width: f32,
    /// Dash pattern; empty for a solid line.
    pub pattern: Vec<PatternItem>,
    /// Cap used for both line ends unless overridden per end.
    pub cap: CapStyle,
    /// Cap of the first line end, when different from [`cap`](Self::cap).
    pub start_cap: Option<CapStyle>,
    /// Cap of the last line end, when different from [`cap`](Self::cap).
    pub end_cap: Option<CapStyle>,
    /// Joint between consecutive segments.
    pub joint_type: JointType,
    /// Whether the line is drawn at all.
    pub is_visible: bool,
    /// Whether the line participates in tap hit-testing.
    pub is_clickable: bool,
    /// Draw order among overlays; higher values draw on top.
    pub z_index: f32,
}

impl OmhPolylineOptions {
    /// Creates polyline options through the given vertices with default
    /// styling.
    pub fn through(points: Vec<OmhCoordinate>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the stroke width in dp.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Sets the dash pattern.
    pub fn with_pattern(mut self, pattern: Vec<PatternItem>) -> Self {
        self.pattern = pattern;
        self
    }

    /// Sets the cap for both line ends.
    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the joint type.
    pub fn with_joint_type(mut self, joint_type: JointType) -> Self {
        self.joint_type = joint_type;
        self
    }

    /// Cap effective at the first line end.
    pub fn effective_start_cap(&self) -> CapStyle {
        self.start_cap.unwrap_or(self.cap)
    }

    /// Cap effective at the last line end.
    pub fn effective_end_cap(&self) -> CapStyle {
        self.end_cap.unwrap_or(self.cap)
    }
}

impl Default for OmhPolylineOptions {
    fn default() -> Self {
        Self {
            points: vec![],
            color: Color::BLACK,
            width: 5.0,
            pattern: vec![],
            cap: CapStyle::default(),
            start_cap: None,
            end_cap: None,
            joint_type: JointType::default(),
            is_visible: true,
            is_clickable: false,
            z_index: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_end_caps_fall_back_to_shared_cap() {
        let mut options = OmhPolylineOptions::default().with_cap(CapStyle::Round);
        assert_eq!(options.effective_start_cap(), CapStyle::Round);
        assert_eq!(options.effective_end_cap(), CapStyle::Round);

        options.end_cap = Some(CapStyle::Square);
        assert_eq!(options.effective_start_cap(), CapStyle::Round);
        assert_eq!(options.effective_end_cap(), CapStyle::Square);
    }
}
