use anyhow::{anyhow, bail, ensure, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{json, Value};

/// Parse a FeatureCollection from bytes and return its `features` array.
pub(crate) fn read_feature_array(bytes: &[u8]) -> Result<Vec<Value>> {
    let mut value: Value = serde_json::from_slice(bytes)
        .context("[io::geojson] Failed to parse GeoJSON bytes")?;

    ensure!(
        value["type"].as_str() == Some("FeatureCollection"),
        "[io::geojson] Expected a FeatureCollection, found {}", value["type"]
    );

    match value["features"].take() {
        Value::Array(features) => Ok(features),
        other => bail!("[io::geojson] FeatureCollection.features must be an array, found {other}"),
    }
}

/// Convert a GeoJSON geometry object into a MultiPolygon.
/// A `Polygon` becomes a single-member MultiPolygon; any other type is an error.
pub(crate) fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array()
        .ok_or_else(|| anyhow!("geometry has no coordinates array"))?;

    match geometry["type"].as_str() {
        Some("Polygon") => Ok(MultiPolygon(vec![parse_polygon_coords(coords)?])),
        Some("MultiPolygon") => coords.iter()
            .map(|polygon| {
                let rings = polygon.as_array()
                    .ok_or_else(|| anyhow!("MultiPolygon member is not an array"))?;
                parse_polygon_coords(rings)
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        Some(other) => bail!("unsupported geometry type {other}"),
        None => bail!("geometry has no type"),
    }
}

/// Parse polygon rings: the first ring is the exterior, the rest are holes.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter()
        .map(|ring| {
            let points = ring.as_array().ok_or_else(|| anyhow!("ring is not an array"))?;
            parse_ring_coords(points)
        });

    let exterior = rings.next().ok_or_else(|| anyhow!("polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring of `[lon, lat]` positions into a closed LineString.
fn parse_ring_coords(points: &[Value]) -> Result<LineString<f64>> {
    let mut coords = points.iter()
        .map(|position| {
            let x = position[0].as_f64().ok_or_else(|| anyhow!("invalid coordinate: x must be a number"))?;
            let y = position[1].as_f64().ok_or_else(|| anyhow!("invalid coordinate: y must be a number"))?;
            ensure!(x.is_finite() && y.is_finite(), "invalid coordinate: non-finite value");
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    ensure!(coords.len() >= 3, "ring has fewer than three positions");

    // Ensure ring is closed (first point == last point)
    if coords[0] != coords[coords.len() - 1] {
        coords.push(coords[0]);
    }

    Ok(LineString(coords))
}

/// Convert a MultiPolygon to a GeoJSON MultiPolygon geometry.
pub(crate) fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
                .collect()
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}
