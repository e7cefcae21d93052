//! Converters between the common option records and GeoJSON features
//! with simplestyle-like properties.

use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};
use omh::styles::{
    CapStyle, JointType, OmhMarkerOptions, OmhPolygonOptions, OmhPolylineOptions, PatternItem,
};
use omh::Color;
use omh_types::error::OmhTypesError;
use omh_types::OmhCoordinate;

use crate::MarkerAlignment;

fn position(coordinate: &OmhCoordinate) -> Vec<f64> {
    vec![coordinate.lon(), coordinate.lat()]
}

fn coordinate(position: &[f64]) -> Result<OmhCoordinate, OmhTypesError> {
    if position.len() < 2 {
        return Err(OmhTypesError::Conversion(
            "position must contain at least 2 dimensions".to_string(),
        ));
    }
    Ok(OmhCoordinate::latlon(position[1], position[0]))
}

/// GeoJSON polygon rings must be closed; the option records keep them
/// open.
fn ring_positions(ring: &[OmhCoordinate]) -> Vec<Vec<f64>> {
    let mut positions: Vec<_> = ring.iter().map(position).collect();
    if positions.first() != positions.last() {
        if let Some(first) = positions.first().cloned() {
            positions.push(first);
        }
    }
    positions
}

/// Flattens a dash pattern into an alternating `stroke-dasharray` value
/// in dp, starting with a painted entry.
///
/// Consecutive same-kind items get a zero-length entry of the other kind
/// inserted between them so the alternation invariant holds. A `Dot`
/// encodes as a zero-length painted entry, which SVG-style renderers draw
/// as a dot under a round line cap.
pub fn dash_array(pattern: &[PatternItem]) -> Vec<f64> {
    let mut entries = Vec::with_capacity(pattern.len());
    let mut expect_painted = true;

    for item in pattern {
        let (painted, length) = match item {
            PatternItem::Dash(length) => (true, *length as f64),
            PatternItem::Gap(length) => (false, *length as f64),
            PatternItem::Dot => (true, 0.0),
        };

        if painted != expect_painted {
            entries.push(0.0);
        }
        entries.push(length);
        expect_painted = !painted;
    }

    entries
}

/// Parses a `stroke-dasharray` value back into pattern items.
///
/// Entries alternate painted/unpainted by position. Zero-length painted
/// entries decode to `Dot`; zero-length unpainted entries are the fillers
/// [`dash_array`] inserts and are dropped.
pub fn pattern_from_dash_array(entries: &[f64]) -> Vec<PatternItem> {
    let mut pattern = Vec::with_capacity(entries.len());
    for (index, length) in entries.iter().enumerate() {
        if index % 2 == 0 {
            if *length == 0.0 {
                pattern.push(PatternItem::Dot);
            } else {
                pattern.push(PatternItem::Dash(*length as f32));
            }
        } else if *length > 0.0 {
            pattern.push(PatternItem::Gap(*length as f32));
        }
    }
    pattern
}

/// `stroke-linecap` property value for a cap style.
pub fn cap_property(cap: CapStyle) -> &'static str {
    match cap {
        CapStyle::Butt => "butt",
        CapStyle::Round => "round",
        CapStyle::Square => "square",
    }
}

/// Parses a `stroke-linecap` property value. Unknown values warn and
/// fall back to the default cap.
pub fn cap_from_property(value: &str) -> CapStyle {
    match value {
        "butt" => CapStyle::Butt,
        "round" => CapStyle::Round,
        "square" => CapStyle::Square,
        other => {
            log::warn!("unknown stroke-linecap {other:?}, falling back to butt");
            CapStyle::default()
        }
    }
}

/// `stroke-linejoin` property value for a joint type.
pub fn joint_property(joint: JointType) -> &'static str {
    match joint {
        JointType::Miter => "miter",
        JointType::Round => "round",
        JointType::Bevel => "bevel",
    }
}

/// Parses a `stroke-linejoin` property value. Unknown values warn and
/// fall back to the default joint.
pub fn joint_from_property(value: &str) -> JointType {
    match value {
        "miter" => JointType::Miter,
        "round" => JointType::Round,
        "bevel" => JointType::Bevel,
        other => {
            log::warn!("unknown stroke-linejoin {other:?}, falling back to miter");
            JointType::default()
        }
    }
}

fn insert_color(properties: &mut JsonObject, key: &str, opacity_key: &str, color: Color) {
    properties.insert(key.to_string(), JsonValue::from(color.to_hex6()));
    properties.insert(opacity_key.to_string(), JsonValue::from(color.opacity()));
}

fn feature_with(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Converts marker options into a point feature.
pub fn marker_feature(options: &OmhMarkerOptions) -> Feature {
    let mut properties = JsonObject::new();
    if let Some(title) = &options.title {
        properties.insert("title".to_string(), JsonValue::from(title.clone()));
    }
    if let Some(snippet) = &options.snippet {
        properties.insert("description".to_string(), JsonValue::from(snippet.clone()));
    }
    properties.insert(
        "marker-alignment".to_string(),
        JsonValue::from(MarkerAlignment::from(options.anchor.discretize()).as_str()),
    );
    properties.insert(
        "marker-opacity".to_string(),
        JsonValue::from(options.alpha as f64),
    );
    if options.rotation != 0.0 {
        properties.insert(
            "marker-rotation".to_string(),
            JsonValue::from(options.rotation as f64),
        );
    }
    if !options.is_visible {
        properties.insert("marker-visible".to_string(), JsonValue::from(false));
    }

    feature_with(Value::Point(position(&options.position)), properties)
}

/// Converts polyline options into a line string feature.
///
/// Simplestyle has a single `stroke-linecap`; per-end cap overrides are
/// not representable and degrade to the shared cap with a warning.
pub fn polyline_feature(options: &OmhPolylineOptions) -> Feature {
    let mut properties = JsonObject::new();
    insert_color(&mut properties, "stroke", "stroke-opacity", options.color);
    properties.insert(
        "stroke-width".to_string(),
        JsonValue::from(options.width as f64),
    );

    if options.start_cap.is_some() || options.end_cap.is_some() {
        log::warn!("per-end caps are not representable in simplestyle, using the shared cap");
    }
    properties.insert(
        "stroke-linecap".to_string(),
        JsonValue::from(cap_property(options.cap)),
    );
    properties.insert(
        "stroke-linejoin".to_string(),
        JsonValue::from(joint_property(options.joint_type)),
    );
    if !options.pattern.is_empty() {
        properties.insert(
            "stroke-dasharray".to_string(),
            JsonValue::from(dash_array(&options.pattern)),
        );
    }

    feature_with(
        Value::LineString(options.points.iter().map(position).collect()),
        properties,
    )
}

/// Converts polygon options into a polygon feature, closing each ring.
pub fn polygon_feature(options: &OmhPolygonOptions) -> Feature {
    let mut properties = JsonObject::new();
    insert_color(
        &mut properties,
        "stroke",
        "stroke-opacity",
        options.stroke_color,
    );
    properties.insert(
        "stroke-width".to_string(),
        JsonValue::from(options.stroke_width as f64),
    );
    properties.insert(
        "stroke-linejoin".to_string(),
        JsonValue::from(joint_property(options.stroke_joint_type)),
    );
    if !options.stroke_pattern.is_empty() {
        properties.insert(
            "stroke-dasharray".to_string(),
            JsonValue::from(dash_array(&options.stroke_pattern)),
        );
    }
    insert_color(&mut properties, "fill", "fill-opacity", options.fill_color);

    let rings = std::iter::once(ring_positions(&options.outline))
        .chain(options.holes.iter().map(|hole| ring_positions(hole)))
        .collect();

    feature_with(Value::Polygon(rings), properties)
}

fn property_color(properties: &JsonObject, key: &str, opacity_key: &str) -> Option<Color> {
    let hex = properties.get(key)?.as_str()?;
    let color = match Color::try_from_hex(hex) {
        Some(color) => color,
        None => {
            log::warn!("invalid {key} color {hex:?}, falling back to black");
            Color::BLACK
        }
    };
    let opacity = properties
        .get(opacity_key)
        .and_then(JsonValue::as_f64)
        .unwrap_or(1.0);
    Some(color.with_alpha((opacity.clamp(0.0, 1.0) * 255.0).round() as u8))
}

/// Parses a line string feature back into polyline options.
///
/// Missing properties keep the record defaults; malformed property
/// values warn and fall back to defaults.
pub fn polyline_options_from(feature: &Feature) -> Result<OmhPolylineOptions, OmhTypesError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| OmhTypesError::Conversion("feature has no geometry".to_string()))?;
    let Value::LineString(positions) = &geometry.value else {
        return Err(OmhTypesError::Conversion(
            "feature geometry is not a line string".to_string(),
        ));
    };

    let mut options = OmhPolylineOptions::through(
        positions
            .iter()
            .map(|p| coordinate(p))
            .collect::<Result<_, _>>()?,
    );

    let Some(properties) = &feature.properties else {
        return Ok(options);
    };

    if let Some(color) = property_color(properties, "stroke", "stroke-opacity") {
        options.color = color;
    }
    if let Some(width) = properties.get("stroke-width").and_then(JsonValue::as_f64) {
        options.width = width as f32;
    }
    if let Some(cap) = properties.get("stroke-linecap").and_then(JsonValue::as_str) {
        options.cap = cap_from_property(cap);
    }
    if let Some(joint) = properties
        .get("stroke-linejoin")
        .and_then(JsonValue::as_str)
    {
        options.joint_type = joint_from_property(joint);
    }
    if let Some(entries) = properties
        .get("stroke-dasharray")
        .and_then(JsonValue::as_array)
    {
        let entries: Vec<f64> = entries.iter().filter_map(JsonValue::as_f64).collect();
        options.pattern = pattern_from_dash_array(&entries);
    }

    Ok(options)
}
