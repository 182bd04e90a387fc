use geo::Rect;

use crate::filter::FilterSelection;
use crate::geom::union_rect;
use crate::map::{MatchedArea, MatchedState};

/// Where the map should move after a selection change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    /// No location or wage filter is active; leave the view alone.
    Keep,
    /// Fit these bounds (lon/lat).
    Bounds(Rect<f64>),
    /// Nothing matched; show the whole country.
    Overview,
}

impl FilterSelection {
    /// Whether an area should be drawn as selected.
    ///
    /// Nothing is highlighted until a location or wage filter is active, and
    /// areas without wage data are never highlighted.
    pub fn highlights_area(&self, area: &MatchedArea) -> bool {
        self.has_active_filters()
            && area.record.is_some_and(|record| self.matches_location_and_wage(record))
    }

    /// Whether a state outline should be drawn as selected.
    pub fn highlights_state(&self, state: &MatchedState) -> bool {
        self.state.as_deref().is_some_and(|selected| state.state_abbr == Some(selected))
    }

    /// The selection after clicking an area: its state, its city and its first
    /// listed county. Areas without data leave the selection unchanged.
    pub fn focus_on_area(&self, area: &MatchedArea) -> Self {
        let Some(record) = area.record else { return self.clone() };

        let mut next = if self.state.as_deref() == Some(record.state_abbr.as_str()) {
            self.clone()
        } else {
            self.with_state(Some(record.state_abbr.clone()))
        };
        if let Some(city) = record.city() {
            next = next.with_city(Some(city.to_string()));
        }
        if let Some(county) = record.counties().next() {
            next = next.with_county(Some(county.to_string()));
        }
        next
    }

    /// The selection after clicking a state outline with a known abbreviation.
    pub fn focus_on_state(&self, state: &MatchedState) -> Self {
        match state.state_abbr {
            Some(abbr) => self.with_state(Some(abbr.to_string())),
            None => self.clone(),
        }
    }
}

/// Decide where to move the map for `selection`.
///
/// Fits the highlighted areas when there are any; otherwise falls back to the
/// selected state's outline, and finally to the country overview.
pub fn focus(areas: &[MatchedArea], states: &[MatchedState], selection: &FilterSelection) -> Focus {
    if !selection.has_active_filters() { return Focus::Keep }

    let bounds = |rects: &mut dyn Iterator<Item = Rect<f64>>| rects.reduce(union_rect);

    if let Some(rect) = bounds(&mut areas.iter()
        .filter(|area| selection.highlights_area(area))
        .map(|area| area.feature.bounds))
    {
        return Focus::Bounds(rect);
    }

    if selection.state.is_some() {
        if let Some(rect) = bounds(&mut states.iter()
            .filter(|state| selection.highlights_state(state))
            .map(|state| state.feature.bounds))
        {
            return Focus::Bounds(rect);
        }
    }

    Focus::Overview
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{match_features, match_states, BoundaryFeature, FeatureKind};
    use crate::wage::{fixtures::record, WageRecord};
    use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon};

    fn square(kind: FeatureKind, area_code: Option<u32>, name: Option<&str>, x0: f64) -> BoundaryFeature {
        let ring = LineString::from(vec![(x0, 0.0), (x0, 1.0), (x0 + 1.0, 1.0), (x0 + 1.0, 0.0), (x0, 0.0)]);
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

    fn records() -> Vec<WageRecord> {
        let mut a = record(1, "Cook", 10.0);
        a.state_abbr = "VA".into();
        a.state_name = "Virginia".into();
        a.area_name = "Richmond, VA".into();
        a.county_town_name = "Henrico, Chesterfield".into();
        let mut b = record(2, "Cook", 30.0);
        b.state_abbr = "TX".into();
        b.state_name = "Texas".into();
        b.area_name = "Austin, TX".into();
        vec![a, b]
    }

    fn areas() -> Vec<BoundaryFeature> {
        vec![
            square(FeatureKind::Area, Some(1), None, 0.0),
            square(FeatureKind::Area, Some(2), None, 5.0),
            square(FeatureKind::Area, Some(3), None, 10.0),
        ]
    }

    fn states() -> Vec<BoundaryFeature> {
        vec![
            square(FeatureKind::State, None, Some("Virginia"), -10.0),
            square(FeatureKind::State, None, Some("Ohio"), 20.0),
        ]
    }

    #[test]
    fn nothing_highlighted_without_filters() {
        let (rs, fs) = (records(), areas());
        let matched = match_features(&fs, &rs, "Cook");
        let sel = FilterSelection::new("Cook");
        assert!(matched.iter().all(|a| !sel.highlights_area(a)));
        assert_eq!(focus(&matched, &[], &sel), Focus::Keep);
    }

    #[test]
    fn highlight_follows_record_filters() {
        let (rs, fs) = (records(), areas());
        let matched = match_features(&fs, &rs, "Cook");
        let sel = FilterSelection::new("Cook").with_state(Some("VA".into()));
        assert_eq!(matched.iter().map(|a| sel.highlights_area(a)).collect::<Vec<_>>(), vec![true, false, false]);

        // A county filter alone does not light up areas without data.
        let sel = FilterSelection::new("Cook").with_county(Some("Henrico".into()));
        assert_eq!(matched.iter().map(|a| sel.highlights_area(a)).collect::<Vec<_>>(), vec![true, false, false]);
    }

    #[test]
    fn focus_prefers_highlighted_areas_then_state() {
        let (rs, fs, ss) = (records(), areas(), states());
        let matched = match_features(&fs, &rs, "Cook");
        let matched_states = match_states(&ss, &rs);

        let sel = FilterSelection::new("Cook").with_wage_range(20_000.0, 0.0);
        match focus(&matched, &matched_states, &sel) {
            Focus::Bounds(rect) => {
                assert_eq!(rect.min(), Coord { x: 0.0, y: 0.0 });
                assert_eq!(rect.max(), Coord { x: 6.0, y: 1.0 });
            }
            other => panic!("unexpected focus {other:?}"),
        }

        // The Virginia record is too cheap, so fall back to the state outline.
        let sel = FilterSelection::new("Cook").with_state(Some("VA".into())).with_wage_range(100_000.0, 0.0);
        assert_eq!(focus(&matched, &matched_states, &sel), Focus::Bounds(ss[0].bounds));

        let sel = FilterSelection::new("Cook").with_wage_range(1_000_000.0, 0.0);
        assert_eq!(focus(&matched, &matched_states, &sel), Focus::Overview);
    }

    #[test]
    fn clicking_an_area_selects_its_location() {
        let (rs, fs) = (records(), areas());
        let matched = match_features(&fs, &rs, "Cook");
        let sel = FilterSelection::new("Cook").focus_on_area(&matched[0]);
        assert_eq!(sel.state.as_deref(), Some("VA"));
        assert_eq!(sel.city.as_deref(), Some("Richmond"));
        assert_eq!(sel.county.as_deref(), Some("Henrico"));

        let unchanged = sel.focus_on_area(&matched[2]);
        assert_eq!(unchanged, sel);
    }

    #[test]
    fn clicking_a_state_selects_it() {
        let (rs, ss) = (records(), states());
        let matched_states = match_states(&ss, &rs);
        let sel = FilterSelection::new("Cook").with_city(Some("Austin".into()));
        let next = sel.focus_on_state(&matched_states[0]);
        assert_eq!(next.state.as_deref(), Some("VA"));
        assert_eq!(next.city, None);
        assert!(next.highlights_state(&matched_states[0]));
        assert!(!next.highlights_state(&matched_states[1]));
        assert_eq!(sel.focus_on_state(&matched_states[1]), sel);
    }
}
