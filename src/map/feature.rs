use std::fmt;

use geo::{MultiPolygon, Rect};
use serde_json::{Map, Value};

use crate::geom::Shape;

/// Which boundary file a feature came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    State, // State outline, labelled by NAME
    Area,  // Metro or nonmetro area, keyed by GEOID
}

impl FeatureKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            FeatureKind::State => "state",
            FeatureKind::Area => "area",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A boundary polygon read from GeoJSON.
#[derive(Debug, Clone)]
pub struct BoundaryFeature {
    pub kind: FeatureKind,
    pub geometry: MultiPolygon<f64>, // [lon, lat] order
    pub bounds: Rect<f64>,
    pub name: Option<String>,     // NAME property
    pub area_code: Option<u32>,   // GEOID property, area features only
    pub properties: Map<String, Value>,
}

impl Shape for BoundaryFeature {
    #[inline] fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }
    #[inline] fn bounds(&self) -> Rect<f64> { self.bounds }
}

/// Read a GEOID that may be written as a string ("10180") or a number,
/// including an integral float such as `10180.0`.
pub(crate) fn parse_geoid(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()).or_else(|| {
            let value = n.as_f64()?;
            (value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64).then_some(value as u32)
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn geoid_from_string_or_number() {
        assert_eq!(parse_geoid(&json!("10180")), Some(10180));
        assert_eq!(parse_geoid(&json!("01180")), Some(1180));
        assert_eq!(parse_geoid(&json!(12345)), Some(12345));
        assert_eq!(parse_geoid(&json!("C1018")), None);
        assert_eq!(parse_geoid(&json!(-1)), None);
        assert_eq!(parse_geoid(&json!(10180.0)), Some(10180));
        assert_eq!(parse_geoid(&json!(10180.5)), None);
        assert_eq!(parse_geoid(&json!(-3.0)), None);
        assert_eq!(parse_geoid(&Value::Null), None);
    }
}
