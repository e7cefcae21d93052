//! Pixel-space paint structs produced from the common option records.

use omh::styles::{
    CapStyle, JointType, OmhMarkerOptions, OmhPolygonOptions, OmhPolylineOptions, PatternItem,
};
use omh::Color;
use omh_types::{Offset2D, Point2D, ScreenDensity, Size};

use crate::PixelAlignment;

/// Stroke cap in this backend's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Stroke ends at the last point.
    Butt,
    /// Rounded stroke end.
    Round,
    /// Squared-off stroke end.
    Square,
}

/// Stroke join in this backend's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp join.
    Miter,
    /// Rounded join.
    Round,
    /// Flattened join.
    Bevel,
}

/// Converts a cap style into this backend's cap enum.
pub fn stroke_cap(cap: CapStyle) -> StrokeCap {
    match cap {
        CapStyle::Butt => StrokeCap::Butt,
        CapStyle::Round => StrokeCap::Round,
        CapStyle::Square => StrokeCap::Square,
    }
}

/// Converts a joint type into this backend's join enum.
pub fn stroke_join(joint: JointType) -> StrokeJoin {
    match joint {
        JointType::Miter => StrokeJoin::Miter,
        JointType::Round => StrokeJoin::Round,
        JointType::Bevel => StrokeJoin::Bevel,
    }
}

/// Converts a dash pattern into painted/unpainted dash intervals in
/// pixels.
///
/// The intervals always alternate starting with a painted one; a
/// zero-length interval of the other kind is inserted between two
/// consecutive same-kind items. A `Dot` degrades to a zero-length painted
/// interval with a logged warning, which renders as a dot under a round
/// cap. Interval arrays must have even length, so a trailing zero-length
/// unpainted interval is appended when needed.
pub fn dash_intervals(pattern: &[PatternItem], density: ScreenDensity) -> Vec<f32> {
    let mut intervals = Vec::with_capacity(pattern.len());
    let mut expect_painted = true;

    for item in pattern {
        let (painted, length_dp) = match item {
            PatternItem::Dash(length) => (true, *length),
            PatternItem::Gap(length) => (false, *length),
            PatternItem::Dot => {
                log::warn!(
                    "dot pattern items are not supported by the slippy-map backend, \
                     substituting a zero-length dash"
                );
                (true, 0.0)
            }
        };

        if painted != expect_painted {
            intervals.push(0.0);
        }
        intervals.push(density.dp_to_px(length_dp as f64) as f32);
        expect_painted = !painted;
    }

    if intervals.len() % 2 != 0 {
        intervals.push(0.0);
    }
    intervals
}

/// Paint of a marker icon.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPaint {
    /// Alignment of the icon relative to the geographic point.
    pub alignment: PixelAlignment,
    /// Icon extent in pixels.
    pub icon_size_px: Size<f64>,
    /// Offset from the icon's top-left corner to its pinned point, in
    /// pixels.
    pub anchor_offset_px: Offset2D<f64>,
    /// Icon opacity.
    pub opacity: f32,
    /// Icon rotation in degrees, clockwise.
    pub rotation_deg: f32,
    /// Whether the icon lies flat on the map.
    pub is_flat: bool,
    /// Whether the marker is drawn.
    pub is_visible: bool,
}

impl MarkerPaint {
    /// Builds the paint from marker options for the given screen density.
    pub fn from_options(options: &OmhMarkerOptions, density: ScreenDensity) -> Self {
        let alignment = PixelAlignment::from(options.anchor.discretize());
        let icon_size_px = Size::new(
            density.dp_to_px(options.icon_size.width()),
            density.dp_to_px(options.icon_size.height()),
        );
        let (fx, fy) = alignment.fraction();
        Self {
            alignment,
            icon_size_px,
            anchor_offset_px: Offset2D::new(
                fx * icon_size_px.width(),
                fy * icon_size_px.height(),
            ),
            opacity: options.alpha,
            rotation_deg: options.rotation,
            is_flat: options.is_flat,
            is_visible: options.is_visible,
        }
    }

    /// Top-left corner of the icon when the marker sits at the given
    /// screen position.
    pub fn icon_origin(&self, marker_px: Point2D<f64>) -> Point2D<f64> {
        marker_px - self.anchor_offset_px
    }

    /// Whether a tap at `tap_px` lands on the icon of a marker drawn at
    /// `marker_px`.
    pub fn hit_test(&self, marker_px: Point2D<f64>, tap_px: Point2D<f64>) -> bool {
        if !self.is_visible {
            return false;
        }
        let local = self.icon_origin(marker_px).offset_to(&tap_px);
        local.dx() >= 0.0
            && local.dx() <= self.icon_size_px.width()
            && local.dy() >= 0.0
            && local.dy() <= self.icon_size_px.height()
    }
}

/// Paint of a stroked outline.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePaint {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width_px: f32,
    /// Stroke cap.
    pub cap: StrokeCap,
    /// Stroke join.
    pub join: StrokeJoin,
    /// Painted/unpainted dash intervals in pixels; empty for solid.
    pub dash_intervals_px: Vec<f32>,
}

impl StrokePaint {
    /// Builds the stroke paint of a polyline.
    ///
    /// This backend has a single cap per stroke; per-end cap overrides
    /// degrade to the shared cap with a warning.
    pub fn from_polyline(options: &OmhPolylineOptions, density: ScreenDensity) -> Self {
        if options.start_cap.is_some() || options.end_cap.is_some() {
            log::warn!("per-end caps are not supported by the slippy-map backend, using the shared cap");
        }
        Self {
            color: options.color,
            width_px: density.dp_to_px(options.width as f64) as f32,
            cap: stroke_cap(options.cap),
            join: stroke_join(options.joint_type),
            dash_intervals_px: dash_intervals(&options.pattern, density),
        }
    }

    /// Builds the stroke paint of a polygon outline.
    pub fn from_polygon_outline(options: &OmhPolygonOptions, density: ScreenDensity) -> Self {
        Self {
            color: options.stroke_color,
            width_px: density.dp_to_px(options.stroke_width as f64) as f32,
            cap: StrokeCap::Butt,
            join: stroke_join(options.stroke_joint_type),
            dash_intervals_px: dash_intervals(&options.stroke_pattern, density),
        }
    }
}

/// Paint of a polygon interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillPaint {
    /// Fill color.
    pub color: Color,
}

impl FillPaint {
    /// Builds the fill paint of a polygon.
    pub fn from_options(options: &OmhPolygonOptions) -> Self {
        Self {
            color: options.fill_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omh_types::Anchor;

    #[test]
    fn marker_paint_offsets_by_alignment() {
        let options = OmhMarkerOptions::default()
            .with_anchor(Anchor::new(0.5, 1.0))
            .with_icon_size(Size::new(32.0, 48.0));
        let paint = MarkerPaint::from_options(&options, ScreenDensity::BASELINE);

        assert_eq!(paint.alignment, PixelAlignment::South);
        assert_eq!(paint.anchor_offset_px, Offset2D::new(16.0, 48.0));

        // pin tip at (100, 100) -> icon spans x 84..116, y 52..100
        let origin = paint.icon_origin(Point2D::new(100.0, 100.0));
        assert_eq!(origin, Point2D::new(84.0, 52.0));
    }

    #[test]
    fn marker_paint_scales_with_density() {
        let options = OmhMarkerOptions::default()
            .with_anchor(Anchor::CENTER)
            .with_icon_size(Size::new(20.0, 20.0));
        let paint = MarkerPaint::from_options(&options, ScreenDensity::new(320.0));

        assert_eq!(paint.icon_size_px, Size::new(40.0, 40.0));
        assert_eq!(paint.anchor_offset_px, Offset2D::new(20.0, 20.0));
    }

    #[test]
    fn hit_test_respects_icon_bounds() {
        let options = OmhMarkerOptions::default()
            .with_anchor(Anchor::new(0.5, 1.0))
            .with_icon_size(Size::new(32.0, 48.0));
        let paint = MarkerPaint::from_options(&options, ScreenDensity::BASELINE);
        let marker = Point2D::new(100.0, 100.0);

        assert!(paint.hit_test(marker, Point2D::new(100.0, 80.0)));
        assert!(paint.hit_test(marker, Point2D::new(84.0, 52.0)));
        assert!(!paint.hit_test(marker, Point2D::new(100.0, 101.0)));
        assert!(!paint.hit_test(marker, Point2D::new(83.0, 80.0)));
    }

    #[test]
    fn invisible_marker_never_hit() {
        let mut options = OmhMarkerOptions::default();
        options.is_visible = false;
        let paint = MarkerPaint::from_options(&options, ScreenDensity::BASELINE);
        assert!(!paint.hit_test(Point2D::new(0.0, 0.0), Point2D::new(0.0, 0.0)));
    }

    #[test]
    fn dash_intervals_are_padded_to_even_length() {
        let pattern = [PatternItem::Dash(5.0)];
        assert_eq!(
            dash_intervals(&pattern, ScreenDensity::BASELINE),
            vec![5.0, 0.0]
        );

        let pattern = [PatternItem::Dash(5.0), PatternItem::Gap(3.0)];
        assert_eq!(
            dash_intervals(&pattern, ScreenDensity::BASELINE),
            vec![5.0, 3.0]
        );
    }

    #[test]
    fn polyline_paint_conversion() {
        let options = OmhPolylineOptions::default()
            .with_width(4.0)
            .with_cap(CapStyle::Round)
            .with_joint_type(JointType::Bevel)
            .with_pattern(vec![PatternItem::Dash(10.0), PatternItem::Gap(5.0)]);
        let paint = StrokePaint::from_polyline(&options, ScreenDensity::new(480.0));

        assert_eq!(paint.width_px, 12.0);
        assert_eq!(paint.cap, StrokeCap::Round);
        assert_eq!(paint.join, StrokeJoin::Bevel);
        assert_eq!(paint.dash_intervals_px, vec![30.0, 15.0]);
    }
}
