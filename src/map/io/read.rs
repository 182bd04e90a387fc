use std::path::Path;

use anyhow::{anyhow, Context, Result};
use geo::BoundingRect;
use serde_json::Value;
use tracing::{info, warn};

use crate::common::{parse_geometry, read_bytes, read_feature_array};
use crate::map::{feature::parse_geoid, BoundaryFeature, Boundaries, FeatureKind};

/// Parse boundary features of one kind from GeoJSON bytes.
///
/// A document that is not a FeatureCollection is an error. Individual
/// features with missing or malformed geometry are skipped with a warning.
pub fn read_features(bytes: &[u8], kind: FeatureKind) -> Result<Vec<BoundaryFeature>> {
    let features = read_feature_array(bytes)?;
    let total = features.len();

    let parsed = features.into_iter().enumerate()
        .filter_map(|(idx, feature)| match parse_feature(feature, kind) {
            Ok(feature) => Some(feature),
            Err(e) => {
                warn!(kind = %kind, idx, error = %e, "[map::io::read] skipping feature");
                None
            }
        })
        .collect::<Vec<_>>();

    info!(kind = %kind, features = parsed.len(), skipped = total - parsed.len(), "[map::io::read] loaded boundaries");
    Ok(parsed)
}

/// Convert one GeoJSON feature into a BoundaryFeature.
fn parse_feature(mut feature: Value, kind: FeatureKind) -> Result<BoundaryFeature> {
    let geometry = parse_geometry(&feature["geometry"])?;
    let bounds = geometry.bounding_rect()
        .ok_or_else(|| anyhow!("geometry is empty"))?;

    let properties = match feature["properties"].take() {
        Value::Object(properties) => properties,
        _ => Default::default(),
    };

    let name = properties.get("NAME").and_then(Value::as_str).map(str::to_string);
    let area_code = match kind {
        FeatureKind::Area => properties.get("GEOID").and_then(parse_geoid),
        FeatureKind::State => None,
    };

    Ok(BoundaryFeature { kind, geometry, bounds, name, area_code, properties })
}

impl Boundaries {
    /// Parse state and area boundaries from GeoJSON bytes.
    pub fn from_geojson_bytes(states: &[u8], areas: &[u8]) -> Result<Self> {
        Ok(Self::new(
            read_features(states, FeatureKind::State).context("[map::io::read] Failed to read state boundaries")?,
            read_features(areas, FeatureKind::Area).context("[map::io::read] Failed to read area boundaries")?,
        ))
    }

    /// Read state and area boundaries from GeoJSON files.
    pub fn read_geojson(states: &Path, areas: &Path) -> Result<Self> {
        let states_bytes = read_bytes(states)?;
        let areas_bytes = read_bytes(areas)?;
        Self::from_geojson_bytes(&states_bytes, &areas_bytes)
            .with_context(|| format!("[map::io::read] Failed to load boundaries from {} and {}", states.display(), areas.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREAS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "properties": {"GEOID": "12345", "NAME": "Square"},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[0,10],[10,10],[10,0],[0,0]]]}},
            {"type": "Feature", "properties": {"GEOID": "99999"},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],["x",1],[1,1],[0,0]]]}},
            {"type": "Feature", "properties": {"GEOID": 777},
             "geometry": {"type": "MultiPolygon", "coordinates": [[[[20,20],[20,21],[21,21],[20,20]]]]}},
            {"type": "Feature", "properties": null,
             "geometry": {"type": "Polygon", "coordinates": [[[30,30],[30,31],[31,31],[30,30]]]}},
            {"type": "Feature", "properties": {"GEOID": "1"}, "geometry": null}
        ]
    }"#;

    #[test]
    fn malformed_features_are_skipped() {
        let features = read_features(AREAS.as_bytes(), FeatureKind::Area).unwrap();
        assert_eq!(features.iter().map(|f| f.area_code).collect::<Vec<_>>(), vec![Some(12345), Some(777), None]);
        assert_eq!(features[0].name.as_deref(), Some("Square"));
        assert_eq!(features[0].bounds.max().x, 10.0);
    }

    #[test]
    fn state_features_do_not_carry_area_codes() {
        let features = read_features(AREAS.as_bytes(), FeatureKind::State).unwrap();
        assert!(features.iter().all(|f| f.area_code.is_none() && f.kind == FeatureKind::State));
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(read_features(b"{", FeatureKind::Area).is_err());
        assert!(read_features(br#"{"type":"FeatureCollection"}"#, FeatureKind::Area).is_err());
    }
}
