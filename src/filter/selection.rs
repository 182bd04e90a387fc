use crate::wage::{Dataset, WageField, WageRecord};

/// The user's current filter choices.
///
/// A selection is an immutable value: every `with_*` method returns a new
/// selection, applying the same cascading resets the filter controls use
/// (a new state clears city and county, a new city clears county).
/// `None` for state, city or county means "All".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSelection {
    pub title: String,
    pub level: WageField,
    pub state: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub min_wage: f64, // 0 means unbounded
    pub max_wage: f64, // 0 means unbounded
}

impl FilterSelection {
    /// A selection for `title` with every other filter cleared.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), ..Default::default() }
    }

    /// The initial selection for a dataset: its first title in sorted order.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self::new(dataset.titles().first().cloned().unwrap_or_default())
    }

    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self { title: title.into(), ..self.clone() }
    }

    pub fn with_level(&self, level: WageField) -> Self {
        Self { level, ..self.clone() }
    }

    /// Choose a state. City and county go back to "All".
    pub fn with_state(&self, state: Option<String>) -> Self {
        Self { state, city: None, county: None, ..self.clone() }
    }

    /// Choose a city. County goes back to "All".
    pub fn with_city(&self, city: Option<String>) -> Self {
        Self { city, county: None, ..self.clone() }
    }

    pub fn with_county(&self, county: Option<String>) -> Self {
        Self { county, ..self.clone() }
    }

    /// Set the wage range. Negative or non-finite bounds count as unbounded.
    pub fn with_wage_range(&self, min_wage: f64, max_wage: f64) -> Self {
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self { min_wage: clean(min_wage), max_wage: clean(max_wage), ..self.clone() }
    }

    /// Clear location and wage filters, keeping the title and level.
    pub fn reset(&self) -> Self {
        Self::new(self.title.clone()).with_level(self.level)
    }

    /// Whether any location or wage filter narrows the result beyond the title.
    pub fn has_active_filters(&self) -> bool {
        self.state.is_some() || self.city.is_some() || self.county.is_some()
            || self.min_wage > 0.0 || self.max_wage > 0.0
    }

    /// The annual column the wage range is compared against.
    #[inline] pub fn wage_field(&self) -> WageField { self.level.annualized() }

    /// Whether a record passes the location and wage filters, ignoring the title.
    pub fn matches_location_and_wage(&self, record: &WageRecord) -> bool {
        if let Some(state) = &self.state {
            if record.state_abbr != *state { return false }
        }
        if let Some(city) = &self.city {
            if record.city() != Some(city.as_str()) { return false }
        }
        if let Some(county) = &self.county {
            if !record.has_county(county) { return false }
        }

        let wage = record.wage(self.wage_field());
        if self.min_wage > 0.0 && wage < self.min_wage { return false }
        if self.max_wage > 0.0 && wage > self.max_wage { return false }

        true
    }

    /// Whether a record passes every filter, title included.
    pub fn matches(&self, record: &WageRecord) -> bool {
        record.title == self.title && self.matches_location_and_wage(record)
    }
}

/// Parse a wage bound typed by the user; anything that is not a number means unbounded.
pub fn parse_wage_bound(text: &str) -> f64 {
    text.trim().replace(['$', ','], "").parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}
