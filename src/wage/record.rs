use crate::wage::{WageField, WageLevels, ANNUAL_MULTIPLIER};

/// One prevailing-wage row: a job title within a metro or nonmetro area.
#[derive(Debug, Clone, PartialEq)]
pub struct WageRecord {
    pub area_code: u32,          // Joins to the boundary GEOID
    pub area_name: String,       // e.g. "New York, NY"
    pub state_abbr: String,
    pub state_name: String,      // Full state name, used to label state boundaries
    pub county_town_name: String, // Comma-separated county list
    pub title: String,
    pub label: String,           // Describes the unit of the wage columns
    pub hourly: WageLevels,      // Values as written in the source
    pub annual: WageLevels,      // Derived yearly values
}

impl WageRecord {
    /// Whether the label says the wage columns are already yearly figures.
    pub fn label_is_annual(label: &str) -> bool {
        label.to_lowercase().contains("annual")
    }

    /// Derive the yearly values from the source values and label.
    pub fn annualize(levels: &WageLevels, label: &str) -> WageLevels {
        if Self::label_is_annual(label) { *levels } else { levels.scaled(ANNUAL_MULTIPLIER) }
    }

    /// Get the value of a wage column.
    #[inline]
    pub fn wage(&self, field: WageField) -> f64 {
        if field.annual { self.annual.get(field.level) } else { self.hourly.get(field.level) }
    }

    /// City portion of the area name: the text before the first comma.
    /// Area names without a comma have no city.
    pub fn city(&self) -> Option<&str> {
        city_of(&self.area_name)
    }

    /// Individual county names listed for this area.
    pub fn counties(&self) -> impl Iterator<Item = &str> + '_ {
        split_counties(&self.county_town_name)
    }

    /// Whether `county` is one of the counties listed for this area.
    pub fn has_county(&self, county: &str) -> bool {
        self.counties().any(|c| c == county)
    }
}

/// The trimmed text before the first comma of an area name.
fn city_of(area_name: &str) -> Option<&str> {
    area_name.split_once(',').map(|(city, _)| city.trim())
}

/// Split a comma-separated county field into trimmed, non-empty names.
pub(crate) fn split_counties(field: &str) -> impl Iterator<Item = &str> + '_ {
    field.split(',').map(str::trim).filter(|c| !c.is_empty())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build an hourly record with the given area, title and level 1 wage.
    pub(crate) fn record(area_code: u32, title: &str, level1: f64) -> WageRecord {
        let hourly = WageLevels { level1, level2: level1 + 10.0, level3: level1 + 20.0, level4: level1 + 30.0, average: level1 + 15.0 };
        WageRecord {
            area_code,
            area_name: format!("Area {area_code}, XX"),
            state_abbr: "XX".into(),
            state_name: "Example State".into(),
            county_town_name: String::new(),
            title: title.into(),
            label: "hourly".into(),
            annual: WageRecord::annualize(&hourly, "hourly"),
            hourly,
        }
    }
}
