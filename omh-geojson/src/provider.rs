use geojson::feature::Id;
use geojson::{Feature, FeatureCollection};
use omh::error::OmhError;
use omh::provider::{EntityId, MapProvider};
use omh::styles::{OmhMarkerOptions, OmhPolygonOptions, OmhPolylineOptions};

use crate::convert::{marker_feature, polygon_feature, polyline_feature};

/// Provider path this backend registers under.
pub const PROVIDER_PATH: &str = "com.omh.maps.geojson.GeoJsonMapProvider";

/// Map backend accumulating styled overlays as GeoJSON features.
#[derive(Debug, Default)]
pub struct GeoJsonMapProvider {
    next_id: u64,
    features: Vec<(EntityId, Feature)>,
}

impl GeoJsonMapProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a feature by its entity id.
    pub fn feature(&self, id: EntityId) -> Option<&Feature> {
        self.features
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, feature)| feature)
    }

    /// Snapshot of all features as a feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self
                .features
                .iter()
                .map(|(_, feature)| feature.clone())
                .collect(),
            foreign_members: None,
        }
    }

    fn allocate(&mut self, mut feature: Feature) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        feature.id = Some(Id::Number(id.value().into()));
        self.features.push((id, feature));
        id
    }
}

impl MapProvider for GeoJsonMapProvider {
    fn provider_name(&self) -> &str {
        "geojson"
    }

    fn add_marker(&mut self, options: &OmhMarkerOptions) -> Result<EntityId, OmhError> {
        Ok(self.allocate(marker_feature(options)))
    }

    fn add_polyline(&mut self, options: &OmhPolylineOptions) -> Result<EntityId, OmhError> {
        Ok(self.allocate(polyline_feature(options)))
    }

    fn add_polygon(&mut self, options: &OmhPolygonOptions) -> Result<EntityId, OmhError> {
        Ok(self.allocate(polygon_feature(options)))
    }

    fn remove_entity(&mut self, id: EntityId) -> bool {
        let before = self.features.len();
        self.features.retain(|(existing, _)| *existing != id);
        self.features.len() != before
    }

    fn entity_count(&self) -> usize {
        self.features.len()
    }

    fn clear(&mut self) {
        self.features.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omh::provider::ProviderRegistry;
    use omh_types::latlon;

    #[test]
    fn registers_and_resolves() {
        let registry = ProviderRegistry::new();
        crate::register(&registry);

        let provider = registry.resolve(PROVIDER_PATH).expect("registered");
        assert_eq!(provider.provider_name(), "geojson");
    }

    #[test]
    fn features_collect_into_collection() {
        let mut provider = GeoJsonMapProvider::new();
        let marker = provider
            .add_marker(&OmhMarkerOptions::at(latlon!(52.0, 21.0)))
            .expect("accepted");
        provider
            .add_polyline(&OmhPolylineOptions::through(vec![
                latlon!(0.0, 0.0),
                latlon!(1.0, 1.0),
            ]))
            .expect("accepted");

        let collection = provider.to_feature_collection();
        assert_eq!(collection.features.len(), 2);
        assert_eq!(
            provider.feature(marker).and_then(|f| f.id.clone()),
            Some(Id::Number(0u64.into()))
        );

        assert!(provider.remove_entity(marker));
        assert_eq!(provider.entity_count(), 1);
    }

    #[test]
    fn collection_serializes_to_json() {
        let mut provider = GeoJsonMapProvider::new();
        provider
            .add_marker(&OmhMarkerOptions::at(latlon!(52.0, 21.0)).with_title("home"))
            .expect("accepted");

        let json = serde_json::to_value(provider.to_feature_collection()).expect("serializable");
        assert_eq!(json["type"], "FeatureCollection");
        assert_eq!(json["features"][0]["properties"]["title"], "home");
    }
}
