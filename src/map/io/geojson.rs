use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{json, Map, Value};

use crate::common::{multipolygon_to_geojson, write_bytes};
use crate::filter::FilterSelection;
use crate::map::{fill_color, MatchedArea};
use crate::wage::{WageField, WageLevel};

/// Export matched areas as a GeoJSON FeatureCollection.
///
/// Each feature keeps its original properties and gains the joined wage
/// columns, `hasData`, `fillColor` for the selected level and `selected` for
/// the current filters. Wage columns are null for areas without data.
pub fn write_matched_geojson(areas: &[MatchedArea], selection: &FilterSelection) -> Value {
    let field = selection.wage_field();

    let features = areas.iter()
        .map(|area| {
            let mut properties = area.feature.properties.clone();
            insert_wage_properties(&mut properties, area);
            properties.insert("fillColor".into(), json!(fill_color(area.wage(field))));
            properties.insert("selected".into(), json!(selection.highlights_area(area)));

            json!({
                "type": "Feature",
                "geometry": multipolygon_to_geojson(&area.feature.geometry),
                "properties": properties,
            })
        })
        .collect::<Vec<_>>();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn insert_wage_properties(properties: &mut Map<String, Value>, area: &MatchedArea) {
    properties.insert("hasData".into(), json!(area.has_data()));

    for level in WageLevel::order() {
        for field in [WageField::raw(level), WageField::annual(level)] {
            properties.insert(field.to_string(), json!(area.wage(field)));
        }
    }

    let record = area.record;
    properties.insert("StateAb".into(), json!(record.map(|r| r.state_abbr.as_str())));
    properties.insert("AreaName".into(), json!(record.map(|r| r.area_name.as_str())));
    properties.insert("CountyTownName".into(), json!(record.map(|r| r.county_town_name.as_str())));
}

/// Serialize a GeoJSON value to `path`.
pub fn write_geojson(path: &Path, value: &Value, force: bool) -> Result<()> {
    let bytes = serde_json::to_vec(value)
        .context("[map::io::geojson] Failed to serialize GeoJSON")?;
    write_bytes(path, &bytes, force)
}
