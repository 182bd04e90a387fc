use ahash::AHashMap;
use tracing::debug;

use crate::map::BoundaryFeature;
use crate::wage::{WageField, WageRecord};

/// An area feature joined to the wage row of the selected title, if any.
#[derive(Debug, Clone, Copy)]
pub struct MatchedArea<'a> {
    pub feature: &'a BoundaryFeature,
    pub record: Option<&'a WageRecord>,
}

impl<'a> MatchedArea<'a> {
    /// Whether a wage row was found for this area.
    #[inline] pub fn has_data(&self) -> bool { self.record.is_some() }

    /// Value of a wage column, `None` when the area has no data.
    #[inline] pub fn wage(&self, field: WageField) -> Option<f64> { self.record.map(|r| r.wage(field)) }
}

/// A state feature with the abbreviation resolved from the wage data.
#[derive(Debug, Clone, Copy)]
pub struct MatchedState<'a> {
    pub feature: &'a BoundaryFeature,
    pub state_abbr: Option<&'a str>,
}

/// Join each area feature to the first record with the same area code and
/// `selected_title`.
///
/// Further records for the same area and title are not aggregated; only the
/// first in input order is attached. Features without a numeric GEOID never
/// have data.
pub fn match_features<'a>(
    features: &'a [BoundaryFeature],
    records: &'a [WageRecord],
    selected_title: &str,
) -> Vec<MatchedArea<'a>> {
    let mut first = AHashMap::<u32, &WageRecord>::new();
    let mut shadowed = 0usize;
    for record in records.iter().filter(|r| r.title == selected_title) {
        if first.contains_key(&record.area_code) {
            shadowed += 1;
        } else {
            first.insert(record.area_code, record);
        }
    }
    if shadowed > 0 {
        debug!(title = selected_title, shadowed, "[map::matcher] ignoring duplicate rows for the same area and title");
    }

    features.iter()
        .map(|feature| MatchedArea {
            feature,
            record: feature.area_code.and_then(|code| first.get(&code).copied()),
        })
        .collect()
}

/// Resolve each state feature's abbreviation by matching its NAME against the
/// full state names of the wage records (case- and whitespace-insensitive).
pub fn match_states<'a>(features: &'a [BoundaryFeature], records: &'a [WageRecord]) -> Vec<MatchedState<'a>> {
    let mut by_name = AHashMap::<String, &str>::new();
    for record in records.iter().filter(|r| !r.state_name.is_empty()) {
        by_name.entry(normalize_name(&record.state_name)).or_insert(record.state_abbr.as_str());
    }

    features.iter()
        .map(|feature| MatchedState {
            feature,
            state_abbr: feature.name.as_deref()
                .and_then(|name| by_name.get(&normalize_name(name)).copied()),
        })
        .collect()
}

/// Lowercase and collapse runs of whitespace.
fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::FeatureKind;
    use crate::wage::{fixtures::record, WageLevel};
    use geo::{BoundingRect, LineString, MultiPolygon, Polygon};

    fn feature(kind: FeatureKind, area_code: Option<u32>, name: Option<&str>) -> BoundaryFeature {
        let ring = LineString::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
        let geometry = MultiPolygon(vec![Polygon::new(ring, vec![])]);
        BoundaryFeature {
            kind,
            bounds: geometry.bounding_rect().unwrap(),
            geometry,
            name: name.map(str::to_string),
            area_code,
            properties: Default::default(),
        }
    }

    #[test]
    fn area_gets_record_of_selected_title() {
        let features = vec![feature(FeatureKind::Area, Some(12345), None)];
        let records = vec![record(12345, "Cook", 10.0)];
        let avg = WageField::annual(WageLevel::Average);

        let matched = match_features(&features, &records, "Cook");
        assert!(matched[0].has_data());
        assert_eq!(matched[0].wage(avg), Some(records[0].annual.average));

        let matched = match_features(&features, &records, "Chef");
        assert!(!matched[0].has_data());
        assert_eq!(matched[0].wage(avg), None);
    }

    #[test]
    fn first_record_wins_for_duplicates() {
        let features = vec![feature(FeatureKind::Area, Some(999), None)];
        let records = vec![record(999, "Chef", 30.0), record(999, "Chef", 40.0)];
        let matched = match_features(&features, &records, "Chef");
        assert_eq!(matched[0].record.map(|r| r.hourly.level1), Some(30.0));
    }

    #[test]
    fn features_without_geoid_have_no_data() {
        let features = vec![feature(FeatureKind::Area, None, None), feature(FeatureKind::Area, Some(5), None)];
        let records = vec![record(5, "Cook", 10.0)];
        let matched = match_features(&features, &records, "Cook");
        assert_eq!(matched.iter().map(MatchedArea::has_data).collect::<Vec<_>>(), vec![false, true]);
    }

    #[test]
    fn states_resolve_by_normalized_name() {
        let features = vec![
            feature(FeatureKind::State, None, Some("NEW  york")),
            feature(FeatureKind::State, None, Some("Puerto Rico")),
            feature(FeatureKind::State, None, None),
        ];
        let mut ny = record(1, "Cook", 10.0);
        ny.state_name = "New York".into();
        ny.state_abbr = "NY".into();
        let records = vec![ny];

        let matched = match_states(&features, &records);
        assert_eq!(matched.iter().map(|s| s.state_abbr).collect::<Vec<_>>(), vec![Some("NY"), None, None]);
    }
}
