use crate::filter::FilterSelection;
use crate::lookup::Place;
use crate::map::MatchedArea;
use crate::wage::split_counties;

/// What is known about the area containing a point.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaInfo {
    pub area_code: Option<u32>,
    pub area_name: Option<String>,
    pub county_name: Option<String>, // Full county list as written in the data
    pub state_abbr: Option<String>,
    pub city_name: Option<String>,
    pub has_wage_data: bool,
}

impl AreaInfo {
    /// Describe a matched area using the record of the current title.
    pub fn from_matched(area: &MatchedArea) -> Self {
        let record = area.record;
        Self {
            area_code: area.feature.area_code,
            area_name: record.map(|r| r.area_name.clone()),
            county_name: record.map(|r| r.county_town_name.clone()),
            state_abbr: record.map(|r| r.state_abbr.clone()),
            city_name: record.and_then(|r| r.city()).map(str::to_string),
            has_wage_data: area.has_data(),
        }
    }

    /// The selection that shows this area's wages: its state, city and first
    /// county. Areas without wage data leave `current` unchanged.
    pub fn selection(&self, current: &FilterSelection) -> FilterSelection {
        let (true, Some(state)) = (self.has_wage_data, &self.state_abbr) else { return current.clone() };

        let mut next = current.with_state(Some(state.clone()));
        if let Some(city) = &self.city_name {
            next = next.with_city(Some(city.clone()));
        }
        if let Some(county) = self.county_name.as_deref().and_then(|c| split_counties(c).next()) {
            next = next.with_county(Some(county.to_string()));
        }
        next
    }
}

/// Result of a zip code lookup. `area` is `None` when the place lies outside
/// every area boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipReport {
    pub place: Place,
    pub area: Option<AreaInfo>,
}
