use std::{collections::BTreeSet, path::Path};

use anyhow::{Context, Result};

use crate::common::read_text;
use crate::wage::{load, WageRecord};

/// The loaded wage records together with the distinct values offered as filters.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<WageRecord>,
    titles: Vec<String>,
    states: Vec<String>,
    cities: Vec<String>,
    counties: Vec<String>,
}

impl Dataset {
    /// Build a dataset from already-parsed records.
    pub fn new(records: Vec<WageRecord>) -> Self {
        let titles = distinct(records.iter().map(|r| r.title.as_str()));
        let states = distinct(records.iter().map(|r| r.state_abbr.as_str()));
        let cities = distinct(records.iter().filter_map(WageRecord::city));
        let counties = distinct(records.iter().flat_map(WageRecord::counties));

        Self { records, titles, states, cities, counties }
    }

    /// Parse a dataset from CSV text.
    pub fn from_csv_str(csv: &str) -> Result<Self> {
        Ok(Self::new(load(csv)?))
    }

    /// Read and parse a dataset from a CSV file.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        Self::from_csv_str(&text)
            .with_context(|| format!("[wage::dataset] Failed to load wage data from {}", path.display()))
    }

    /// Get the records in input order.
    #[inline] pub fn records(&self) -> &[WageRecord] { &self.records }

    /// Get the number of records.
    #[inline] pub fn len(&self) -> usize { self.records.len() }

    /// Check if there are no records.
    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Sorted distinct job titles.
    #[inline] pub fn titles(&self) -> &[String] { &self.titles }

    /// Sorted distinct state abbreviations.
    #[inline] pub fn states(&self) -> &[String] { &self.states }

    /// Sorted distinct city names across all records.
    #[inline] pub fn cities(&self) -> &[String] { &self.cities }

    /// Sorted distinct county names across all records.
    #[inline] pub fn counties(&self) -> &[String] { &self.counties }

    /// Sorted distinct cities of records in `state`, or all cities when `state` is `None`.
    pub fn cities_in(&self, state: Option<&str>) -> Vec<String> {
        match state {
            None => self.cities.clone(),
            Some(state) => distinct(self.records.iter()
                .filter(|r| r.state_abbr == state)
                .filter_map(WageRecord::city)),
        }
    }

    /// Sorted distinct counties of records in `state` and `city` (each `None` for any).
    pub fn counties_in(&self, state: Option<&str>, city: Option<&str>) -> Vec<String> {
        if state.is_none() && city.is_none() {
            return self.counties.clone();
        }
        distinct(self.records.iter()
            .filter(|r| state.is_none_or(|s| r.state_abbr == s))
            .filter(|r| city.is_none_or(|c| r.city() == Some(c)))
            .flat_map(WageRecord::counties))
    }
}

/// Sorted, deduplicated, non-empty owned strings.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wage::fixtures::record;

    fn dataset() -> Dataset {
        let mut a = record(1, "Cook", 10.0);
        a.state_abbr = "VA".into();
        a.area_name = "Washington-Arlington, DC-VA".into();
        a.county_town_name = "Fairfax, Arlington".into();
        let mut b = record(2, "Chef", 20.0);
        b.state_abbr = "TX".into();
        b.area_name = "Austin, TX".into();
        b.county_town_name = "Travis".into();
        let mut c = record(3, "Cook", 30.0);
        c.state_abbr = "VA".into();
        c.area_name = "Richmond, VA".into();
        c.county_town_name = "Henrico, Fairfax".into();
        Dataset::new(vec![a, b, c])
    }

    #[test]
    fn distinct_lists_are_sorted_and_deduplicated() {
        let ds = dataset();
        assert_eq!(ds.titles(), ["Chef", "Cook"]);
        assert_eq!(ds.states(), ["TX", "VA"]);
        assert_eq!(ds.cities(), ["Austin", "Richmond", "Washington-Arlington"]);
        assert_eq!(ds.counties(), ["Arlington", "Fairfax", "Henrico", "Travis"]);
    }

    #[test]
    fn cascading_options_follow_state_and_city() {
        let ds = dataset();
        assert_eq!(ds.cities_in(Some("VA")), ["Richmond", "Washington-Arlington"]);
        assert_eq!(ds.cities_in(None).len(), 3);
        assert_eq!(ds.counties_in(Some("VA"), None), ["Arlington", "Fairfax", "Henrico"]);
        assert_eq!(ds.counties_in(Some("VA"), Some("Richmond")), ["Fairfax", "Henrico"]);
        assert_eq!(ds.counties_in(None, Some("Austin")), ["Travis"]);
        assert!(ds.counties_in(Some("TX"), Some("Richmond")).is_empty());
    }

    #[test]
    fn csv_round_through_loader() {
        let ds = Dataset::from_csv_str(
            "Area,Title,Level1,Level2,Level3,Level4,Average,StateAb\n1,Cook,1,2,3,4,2.5,TX\n2,,1,2,3,4,2.5,TX\n"
        ).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.titles(), ["Cook"]);
    }
}
