//! Field-by-field converters from the common option records to lyon
//! stroke primitives.

use lyon::path::{LineCap, LineJoin};
use lyon::tessellation::StrokeOptions;
use omh::styles::{CapStyle, JointType, OmhPolygonOptions, OmhPolylineOptions, PatternItem};
use omh_types::ScreenDensity;

/// Converts a cap style into the lyon cap enum.
pub fn line_cap(cap: CapStyle) -> LineCap {
    match cap {
        CapStyle::Butt => LineCap::Butt,
        CapStyle::Round => LineCap::Round,
        CapStyle::Square => LineCap::Square,
    }
}

/// Converts a joint type into the lyon join enum.
pub fn line_join(joint: JointType) -> LineJoin {
    match joint {
        JointType::Miter => LineJoin::Miter,
        JointType::Round => LineJoin::Round,
        JointType::Bevel => LineJoin::Bevel,
    }
}

/// Builds lyon stroke options for a polyline.
pub fn stroke_options(options: &OmhPolylineOptions, density: ScreenDensity) -> StrokeOptions {
    StrokeOptions::default()
        .with_line_width(density.dp_to_px(options.width as f64) as f32)
        .with_start_cap(line_cap(options.effective_start_cap()))
        .with_end_cap(line_cap(options.effective_end_cap()))
        .with_line_join(line_join(options.joint_type))
}

/// Builds lyon stroke options for a polygon outline. Outline rings are
/// closed, so caps never show; the joint type is what matters.
pub fn outline_stroke_options(
    options: &OmhPolygonOptions,
    density: ScreenDensity,
) -> StrokeOptions {
    StrokeOptions::default()
        .with_line_width(density.dp_to_px(options.stroke_width as f64) as f32)
        .with_line_join(line_join(options.stroke_joint_type))
}

/// Flattens a dash pattern into alternating painted/unpainted interval
/// lengths in pixels, starting with a painted one.
///
/// The output always alternates: when two consecutive items have the same
/// kind, a zero-length interval of the other kind is inserted between
/// them. A `Dot` has no lyon counterpart and degrades to a zero-length
/// painted interval with a logged warning; it renders as a dot when the
/// stroke uses round caps.
pub fn dash_array(pattern: &[PatternItem], density: ScreenDensity) -> Vec<f32> {
    let mut intervals = Vec::with_capacity(pattern.len());
    let mut expect_painted = true;

    for item in pattern {
        let (painted, length_dp) = match item {
            PatternItem::Dash(length) => (true, *length),
            PatternItem::Gap(length) => (false, *length),
            PatternItem::Dot => {
                log::warn!(
                    "dot pattern items are not supported by the lyon backend, \
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

    intervals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use omh::styles::OmhPolylineOptions;

    #[test]
    fn caps_and_joins_are_total() {
        assert_eq!(line_cap(CapStyle::Butt), LineCap::Butt);
        assert_eq!(line_cap(CapStyle::Round), LineCap::Round);
        assert_eq!(line_cap(CapStyle::Square), LineCap::Square);

        assert_eq!(line_join(JointType::Miter), LineJoin::Miter);
        assert_eq!(line_join(JointType::Round), LineJoin::Round);
        assert_eq!(line_join(JointType::Bevel), LineJoin::Bevel);
    }

    #[test]
    fn stroke_width_scales_with_density() {
        let options = OmhPolylineOptions::default()
            .with_width(4.0)
            .with_cap(CapStyle::Round);
        let stroke = stroke_options(&options, ScreenDensity::new(320.0));

        assert_abs_diff_eq!(stroke.line_width, 8.0);
        assert_eq!(stroke.start_cap, LineCap::Round);
        assert_eq!(stroke.end_cap, LineCap::Round);
    }

    #[test]
    fn per_end_caps_reach_stroke_options() {
        let mut options = OmhPolylineOptions::default().with_cap(CapStyle::Round);
        options.end_cap = Some(CapStyle::Square);

        let stroke = stroke_options(&options, ScreenDensity::BASELINE);
        assert_eq!(stroke.start_cap, LineCap::Round);
        assert_eq!(stroke.end_cap, LineCap::Square);
    }

    #[test]
    fn alternating_pattern_keeps_count() {
        let pattern = [
            PatternItem::Dash(10.0),
            PatternItem::Gap(4.0),
            PatternItem::Dash(2.0),
            PatternItem::Gap(4.0),
        ];
        let intervals = dash_array(&pattern, ScreenDensity::BASELINE);
        assert_eq!(intervals, vec![10.0, 4.0, 2.0, 4.0]);
    }

    #[test]
    fn consecutive_same_kind_items_insert_filler() {
        let pattern = [PatternItem::Dash(10.0), PatternItem::Dash(6.0)];
        assert_eq!(
            dash_array(&pattern, ScreenDensity::BASELINE),
            vec![10.0, 0.0, 6.0]
        );

        let pattern = [
            PatternItem::Gap(3.0),
            PatternItem::Gap(5.0),
            PatternItem::Dash(1.0),
        ];
        assert_eq!(
            dash_array(&pattern, ScreenDensity::BASELINE),
            vec![0.0, 3.0, 0.0, 5.0, 1.0]
        );
    }

    #[test]
    fn dot_degrades_to_zero_length_dash() {
        let pattern = [
            PatternItem::Dot,
            PatternItem::Gap(4.0),
            PatternItem::Dot,
            PatternItem::Gap(4.0),
        ];
        assert_eq!(
            dash_array(&pattern, ScreenDensity::BASELINE),
            vec![0.0, 4.0, 0.0, 4.0]
        );
    }

    #[test]
    fn dash_lengths_scale_with_density() {
        let pattern = [PatternItem::Dash(10.0), PatternItem::Gap(4.0)];
        assert_eq!(
            dash_array(&pattern, ScreenDensity::new(480.0)),
            vec![30.0, 12.0]
        );
    }
}
