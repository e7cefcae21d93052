use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::StrokeOptions;
use omh::error::OmhError;
use omh::provider::{EntityId, MapProvider};
use omh::styles::{OmhMarkerOptions, OmhPolygonOptions, OmhPolylineOptions};
use omh::Color;
use omh_types::{OmhCoordinate, ScreenDensity, Size};

use crate::convert::{dash_array, outline_stroke_options, stroke_options};
use crate::IconPlacement;

/// Provider path this backend registers under.
pub const PROVIDER_PATH: &str = "com.omh.maps.lyon.LyonMapProvider";

/// Marker converted into this backend's native representation.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSymbol {
    /// Position of the marker in path space (`x` = longitude, `y` =
    /// latitude).
    pub position: lyon::math::Point,
    /// Discrete icon placement relative to the position.
    pub placement: IconPlacement,
    /// Icon extent in pixels.
    pub icon_size_px: Size<f64>,
    /// Icon opacity.
    pub opacity: f32,
    /// Icon rotation in degrees, clockwise.
    pub rotation: f32,
    /// Whether the marker is drawn.
    pub is_visible: bool,
}

/// One entity owned by the lyon backend.
#[derive(Debug, Clone)]
pub enum LyonEntity {
    /// A marker symbol.
    Marker(MarkerSymbol),
    /// A stroked path with its dashing intervals.
    Polyline {
        /// The built path.
        path: Path,
        /// Stroke tessellation options.
        stroke: StrokeOptions,
        /// Painted/unpainted dash intervals in pixels; empty for solid.
        dashes: Vec<f32>,
        /// Stroke color.
        color: Color,
        /// Whether the line is drawn.
        is_visible: bool,
    },
    /// A filled path with an optional stroked outline.
    Polygon {
        /// Outer ring and holes as path sub-paths.
        path: Path,
        /// Interior fill color.
        fill_color: Color,
        /// Outline stroke tessellation options.
        stroke: StrokeOptions,
        /// Outline stroke color.
        stroke_color: Color,
        /// Outline dash intervals in pixels; empty for solid.
        dashes: Vec<f32>,
        /// Whether the polygon is drawn.
        is_visible: bool,
    },
}

/// Map backend producing lyon path and stroke primitives.
pub struct LyonMapProvider {
    density: ScreenDensity,
    next_id: u64,
    entities: Vec<(EntityId, LyonEntity)>,
}

impl LyonMapProvider {
    /// Creates a provider converting dp sizes for the given screen
    /// density.
    pub fn new(density: ScreenDensity) -> Self {
        Self {
            density,
            next_id: 0,
            entities: vec![],
        }
    }

    /// Entities owned by this provider, in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &(EntityId, LyonEntity)> {
        self.entities.iter()
    }

    /// Looks up an entity by its id.
    pub fn entity(&self, id: EntityId) -> Option<&LyonEntity> {
        self.entities
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, entity)| entity)
    }

    fn allocate(&mut self, entity: LyonEntity) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }

    fn build_path<'a>(
        rings: impl IntoIterator<Item = &'a [OmhCoordinate]>,
        close: bool,
    ) -> Path {
        let mut builder = Path::builder();
        for ring in rings {
            let mut points = ring.iter();
            if let Some(first) = points.next() {
                builder.begin(point(first.lon() as f32, first.lat() as f32));
                for vertex in points {
                    builder.line_to(point(vertex.lon() as f32, vertex.lat() as f32));
                }
                builder.end(close);
            }
        }
        builder.build()
    }
}

impl Default for LyonMapProvider {
    fn default() -> Self {
        Self::new(ScreenDensity::BASELINE)
    }
}

impl MapProvider for LyonMapProvider {
    fn provider_name(&self) -> &str {
        "lyon"
    }

    fn add_marker(&mut self, options: &OmhMarkerOptions) -> Result<EntityId, OmhError> {
        let icon_size_px = Size::new(
            self.density.dp_to_px(options.icon_size.width()),
            self.density.dp_to_px(options.icon_size.height()),
        );
        let symbol = MarkerSymbol {
            position: point(
                options.position.lon() as f32,
                options.position.lat() as f32,
            ),
            placement: options.anchor.discretize().into(),
            icon_size_px,
            opacity: options.alpha,
            rotation: options.rotation,
            is_visible: options.is_visible,
        };
        Ok(self.allocate(LyonEntity::Marker(symbol)))
    }

    fn add_polyline(&mut self, options: &OmhPolylineOptions) -> Result<EntityId, OmhError> {
        let entity = LyonEntity::Polyline {
            path: Self::build_path([options.points.as_slice()], false),
            stroke: stroke_options(options, self.density),
            dashes: dash_array(&options.pattern, self.density),
            color: options.color,
            is_visible: options.is_visible,
        };
        Ok(self.allocate(entity))
    }

    fn add_polygon(&mut self, options: &OmhPolygonOptions) -> Result<EntityId, OmhError> {
        let rings = std::iter::once(options.outline.as_slice())
            .chain(options.holes.iter().map(Vec::as_slice));
        let entity = LyonEntity::Polygon {
            path: Self::build_path(rings, true),
            fill_color: options.fill_color,
            stroke: outline_stroke_options(options, self.density),
            stroke_color: options.stroke_color,
            dashes: dash_array(&options.stroke_pattern, self.density),
            is_visible: options.is_visible,
        };
        Ok(self.allocate(entity))
    }

    fn remove_entity(&mut self, id: EntityId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|(existing, _)| *existing != id);
        self.entities.len() != before
    }

    fn entity_count(&self) -> usize {
        self.entities.len()
    }

    fn clear(&mut self) {
        self.entities.clear();
    }
}
