use omh::error::OmhError;
use omh::provider::{EntityId, MapProvider};
use omh::styles::{OmhMarkerOptions, OmhPolygonOptions, OmhPolylineOptions};
use omh_types::{OmhCoordinate, ScreenDensity};

use crate::paint::{FillPaint, MarkerPaint, StrokePaint};

/// Provider path this backend registers under.
pub const PROVIDER_PATH: &str = "com.omh.maps.osm.OsmMapProvider";

/// One overlay owned by the slippy-map backend.
#[derive(Debug, Clone, PartialEq)]
pub enum OsmEntity {
    /// A marker with its paint.
    Marker {
        /// Geographic position of the marker.
        position: OmhCoordinate,
        /// Icon paint.
        paint: MarkerPaint,
    },
    /// A polyline with its stroke paint.
    Polyline {
        /// Vertices of the line.
        points: Vec<OmhCoordinate>,
        /// Stroke paint.
        paint: StrokePaint,
        /// Whether the line is drawn.
        is_visible: bool,
    },
    /// A polygon with stroke and fill paints.
    Polygon {
        /// Outer ring of the polygon.
        outline: Vec<OmhCoordinate>,
        /// Holes cut out of the interior.
        holes: Vec<Vec<OmhCoordinate>>,
        /// Outline stroke paint.
        stroke: StrokePaint,
        /// Interior fill paint.
        fill: FillPaint,
        /// Whether the polygon is drawn.
        is_visible: bool,
    },
}

/// Map backend producing pixel-space overlay paints for a slippy-map
/// renderer.
pub struct OsmMapProvider {
    density: ScreenDensity,
    next_id: u64,
    entities: Vec<(EntityId, OsmEntity)>,
}

impl OsmMapProvider {
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
    pub fn entities(&self) -> impl Iterator<Item = &(EntityId, OsmEntity)> {
        self.entities.iter()
    }

    /// Looks up an entity by its id.
    pub fn entity(&self, id: EntityId) -> Option<&OsmEntity> {
        self.entities
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, entity)| entity)
    }

    fn allocate(&mut self, entity: OsmEntity) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }
}

impl Default for OsmMapProvider {
    fn default() -> Self {
        Self::new(ScreenDensity::BASELINE)
    }
}

impl MapProvider for OsmMapProvider {
    fn provider_name(&self) -> &str {
        "osm"
    }

    fn add_marker(&mut self, options: &OmhMarkerOptions) -> Result<EntityId, OmhError> {
        let entity = OsmEntity::Marker {
            position: options.position,
            paint: MarkerPaint::from_options(options, self.density),
        };
        Ok(self.allocate(entity))
    }

    fn add_polyline(&mut self, options: &OmhPolylineOptions) -> Result<EntityId, OmhError> {
        let entity = OsmEntity::Polyline {
            points: options.points.clone(),
            paint: StrokePaint::from_polyline(options, self.density),
            is_visible: options.is_visible,
        };
        Ok(self.allocate(entity))
    }

    fn add_polygon(&mut self, options: &OmhPolygonOptions) -> Result<EntityId, OmhError> {
        let entity = OsmEntity::Polygon {
            outline: options.outline.clone(),
            holes: options.holes.clone(),
            stroke: StrokePaint::from_polygon_outline(options, self.density),
            fill: FillPaint::from_options(options),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelAlignment;
    use assert_matches::assert_matches;
    use omh::provider::ProviderRegistry;
    use omh::Color;
    use omh_types::{latlon, Anchor, Size};

    #[test]
    fn registers_and_resolves() {
        let registry = ProviderRegistry::new();
        crate::register(&registry);

        let provider = registry.resolve(PROVIDER_PATH).expect("registered");
        assert_eq!(provider.provider_name(), "osm");
    }

    #[test]
    fn marker_gets_pixel_paint() {
        let mut provider = OsmMapProvider::new(ScreenDensity::new(320.0));
        let options = OmhMarkerOptions::at(latlon!(52.0, 21.0))
            .with_anchor(Anchor::new(1.0, 1.0))
            .with_icon_size(Size::new(16.0, 16.0));

        let id = provider.add_marker(&options).expect("accepted");
        assert_matches!(provider.entity(id), Some(OsmEntity::Marker { position, paint }) => {
            assert_eq!(*position, latlon!(52.0, 21.0));
            assert_eq!(paint.alignment, PixelAlignment::SouthEast);
            assert_eq!(paint.icon_size_px, Size::new(32.0, 32.0));
        });
    }

    #[test]
    fn polygon_carries_both_paints() {
        let mut provider = OsmMapProvider::default();
        let options = OmhPolygonOptions::outlined_by(vec![
            latlon!(0.0, 0.0),
            latlon!(0.0, 1.0),
            latlon!(1.0, 1.0),
        ])
        .with_fill_color(Color::GREEN.with_alpha(64))
        .with_stroke_width(2.0);

        let id = provider.add_polygon(&options).expect("accepted");
        assert_matches!(provider.entity(id), Some(OsmEntity::Polygon { stroke, fill, .. }) => {
            assert_eq!(stroke.width_px, 2.0);
            assert_eq!(fill.color, Color::GREEN.with_alpha(64));
        });
    }

    #[test]
    fn remove_and_clear() {
        let mut provider = OsmMapProvider::default();
        let first = provider
            .add_marker(&OmhMarkerOptions::default())
            .expect("accepted");
        provider
            .add_polyline(&OmhPolylineOptions::default())
            .expect("accepted");

        assert!(provider.remove_entity(first));
        assert!(!provider.remove_entity(first));
        assert_eq!(provider.entity_count(), 1);
        provider.clear();
        assert_eq!(provider.entity_count(), 0);
    }
}
