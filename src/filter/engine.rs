use crate::filter::{format_currency, FilterSelection};
use crate::wage::{WageField, WageRecord};

/// Records that pass every filter of `selection`, in input order.
pub fn derive_filtered_set<'a>(records: &'a [WageRecord], selection: &FilterSelection) -> Vec<&'a WageRecord> {
    records.iter()
        .filter(|record| record.title == selection.title)
        .filter(|record| selection.matches_location_and_wage(record))
        .collect()
}

/// Human-readable summary of the active filters, e.g. `Cook | Level1 | VA | Min: $40,000.00`.
pub fn summary(selection: &FilterSelection) -> String {
    let mut parts = vec![selection.title.clone(), selection.level.to_string()];

    parts.extend(selection.state.clone());
    parts.extend(selection.city.clone());
    parts.extend(selection.county.clone());
    if selection.min_wage > 0.0 { parts.push(format!("Min: {}", format_currency(Some(selection.min_wage)))) }
    if selection.max_wage > 0.0 { parts.push(format!("Max: {}", format_currency(Some(selection.max_wage)))) }

    parts.join(" | ")
}

/// Order filtered records for the table: highest annual wage of `level` first.
/// Records with equal wages keep their input order.
pub fn table_rows<'a>(records: &[&'a WageRecord], level: WageField) -> Vec<&'a WageRecord> {
    let field = level.annualized();
    let mut rows = records.to_vec();
    rows.sort_by(|a, b| b.wage(field).total_cmp(&a.wage(field)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wage::{fixtures::record, WageLevel};

    fn records() -> Vec<WageRecord> {
        let mut a = record(1, "Cook", 10.0);
        a.state_abbr = "VA".into();
        a.area_name = "Washington-Arlington, DC-VA".into();
        a.county_town_name = "Fairfax, Arlington".into();
        let mut b = record(2, "Cook", 25.0);
        b.state_abbr = "TX".into();
        b.area_name = "Austin, TX".into();
        b.county_town_name = "Travis".into();
        let mut c = record(3, "Cook", 18.0);
        c.state_abbr = "VA".into();
        c.area_name = "Southwest Virginia nonmetropolitan area".into();
        c.county_town_name = "Arlington".into();
        let d = record(4, "Chef", 30.0);
        vec![a, b, c, d]
    }

    fn codes(records: &[&WageRecord]) -> Vec<u32> {
        records.iter().map(|r| r.area_code).collect()
    }

    #[test]
    fn title_filter_is_exact() {
        let rs = records();
        assert_eq!(codes(&derive_filtered_set(&rs, &FilterSelection::new("Cook"))), vec![1, 2, 3]);
        assert!(derive_filtered_set(&rs, &FilterSelection::new("COOK")).is_empty());
    }

    #[test]
    fn county_filter_matches_any_listed_county() {
        let rs = records();
        let sel = FilterSelection::new("Cook").with_county(Some("Arlington".into()));
        assert_eq!(codes(&derive_filtered_set(&rs, &sel)), vec![1, 3]);
    }

    #[test]
    fn city_filter_never_matches_area_without_comma() {
        let rs = records();
        let sel = FilterSelection::new("Cook").with_city(Some("Southwest Virginia nonmetropolitan area".into()));
        assert!(derive_filtered_set(&rs, &sel).is_empty());
        let sel = FilterSelection::new("Cook").with_city(Some("Austin".into()));
        assert_eq!(codes(&derive_filtered_set(&rs, &sel)), vec![2]);
    }

    #[test]
    fn filters_compose_in_any_order() {
        let rs = records();
        let full = FilterSelection::new("Cook")
            .with_state(Some("VA".into()))
            .with_county(Some("Arlington".into()))
            .with_wage_range(30_000.0, 0.0);
        let expected = derive_filtered_set(&rs, &full);
        assert_eq!(codes(&expected), vec![3]);

        // Narrow step by step with single-filter selections, in two different orders.
        let by_wage = FilterSelection::new("Cook").with_wage_range(30_000.0, 0.0);
        let by_state = FilterSelection::new("Cook").with_state(Some("VA".into()));
        let by_county = FilterSelection::new("Cook").with_county(Some("Arlington".into()));

        let apply = |set: Vec<&WageRecord>, sel: &FilterSelection| -> Vec<u32> {
            set.into_iter().filter(|r| sel.matches(r)).map(|r| r.area_code).collect()
        };
        let all = derive_filtered_set(&rs, &FilterSelection::new("Cook"));
        let one: Vec<_> = all.iter().copied().filter(|r| by_wage.matches(r)).collect();
        let two: Vec<_> = one.into_iter().filter(|r| by_county.matches(r)).collect();
        assert_eq!(apply(two, &by_state), codes(&expected));

        let one: Vec<_> = all.iter().copied().filter(|r| by_state.matches(r)).collect();
        let two: Vec<_> = one.into_iter().filter(|r| by_wage.matches(r)).collect();
        assert_eq!(apply(two, &by_county), codes(&expected));
    }

    #[test]
    fn derivation_is_idempotent() {
        let rs = records();
        let sel = FilterSelection::new("Cook").with_state(Some("VA".into()));
        let once = derive_filtered_set(&rs, &sel);
        let owned: Vec<WageRecord> = once.iter().map(|r| (*r).clone()).collect();
        let twice = derive_filtered_set(&owned, &sel);
        assert_eq!(codes(&once), codes(&twice));
        assert_eq!(codes(&once), codes(&derive_filtered_set(&rs, &sel)));
    }

    #[test]
    fn summary_lists_active_filters_in_order() {
        let sel = FilterSelection::new("Cook");
        assert_eq!(summary(&sel), "Cook | Level1");

        let sel = sel.with_level(WageField::raw(WageLevel::Average))
            .with_state(Some("VA".into()))
            .with_city(Some("Richmond".into()))
            .with_county(Some("Henrico".into()))
            .with_wage_range(40_000.0, 1_250_000.5);
        assert_eq!(
            summary(&sel),
            "Cook | Average | VA | Richmond | Henrico | Min: $40,000.00 | Max: $1,250,000.50"
        );
    }

    #[test]
    fn table_sorts_by_annual_wage_descending() {
        let rs = records();
        let filtered = derive_filtered_set(&rs, &FilterSelection::new("Cook"));
        let rows = table_rows(&filtered, WageField::raw(WageLevel::Level1));
        assert_eq!(codes(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn table_keeps_input_order_for_ties() {
        let rs = vec![record(7, "Cook", 10.0), record(5, "Cook", 10.0), record(6, "Cook", 12.0)];
        let filtered: Vec<&WageRecord> = rs.iter().collect();
        assert_eq!(codes(&table_rows(&filtered, WageField::raw(WageLevel::Level2))), vec![6, 7, 5]);
    }
}
