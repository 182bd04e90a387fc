use anyhow::{ensure, Context, Result};
use tracing::{debug, info};

use crate::common::{optional_text_column, read_csv_text, text_column, has_column};
use crate::wage::{WageLevels, WageRecord};

/// Columns a row must fill for the record to be kept.
pub const REQUIRED_COLUMNS: [&str; 8] = ["Area", "Title", "Level1", "Level2", "Level3", "Level4", "Average", "StateAb"];

/// Parse wage CSV text into records.
///
/// Fails when the text is not CSV or a required column is missing from the
/// header. Rows missing any required value, or whose area code or wages are
/// not numbers, are dropped without error.
pub fn load(csv: &str) -> Result<Vec<WageRecord>> {
    let df = read_csv_text(csv).context("[wage::load] Failed to parse wage CSV")?;

    let missing = REQUIRED_COLUMNS.iter()
        .filter(|name| !has_column(&df, name))
        .copied()
        .collect::<Vec<_>>();
    ensure!(missing.is_empty(), "[wage::load] CSV is missing required columns: {}", missing.join(", "));

    let area = text_column(&df, "Area")?;
    let title = text_column(&df, "Title")?;
    let level1 = text_column(&df, "Level1")?;
    let level2 = text_column(&df, "Level2")?;
    let level3 = text_column(&df, "Level3")?;
    let level4 = text_column(&df, "Level4")?;
    let average = text_column(&df, "Average")?;
    let state_abbr = text_column(&df, "StateAb")?;
    let area_name = optional_text_column(&df, "AreaName")?;
    let county_town_name = optional_text_column(&df, "CountyTownName")?;
    let label = optional_text_column(&df, "Label")?;
    let state_name = optional_text_column(&df, "State")?;

    let mut records = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let parsed = (|| {
            let hourly = WageLevels {
                level1: parse_wage(level1[row].as_deref())?,
                level2: parse_wage(level2[row].as_deref())?,
                level3: parse_wage(level3[row].as_deref())?,
                level4: parse_wage(level4[row].as_deref())?,
                average: parse_wage(average[row].as_deref())?,
            };
            let label = label[row].clone().unwrap_or_default();

            Some(WageRecord {
                area_code: parse_area_code(area[row].as_deref())?,
                title: title[row].clone()?,
                state_abbr: state_abbr[row].clone()?,
                area_name: area_name[row].clone().unwrap_or_default(),
                state_name: state_name[row].clone().unwrap_or_default(),
                county_town_name: county_town_name[row].clone().unwrap_or_default(),
                annual: WageRecord::annualize(&hourly, &label),
                hourly,
                label,
            })
        })();

        if let Some(record) = parsed { records.push(record) }
    }

    let dropped = df.height() - records.len();
    if dropped > 0 {
        debug!(dropped, "[wage::load] dropped rows with missing or non-numeric required fields");
    }
    info!(records = records.len(), "[wage::load] loaded wage records");

    Ok(records)
}

/// Parse an area code such as `10180`. Numeric text written as a float
/// (`10180.0`) is accepted when it is integral.
fn parse_area_code(cell: Option<&str>) -> Option<u32> {
    let cell = cell?;
    cell.parse::<u32>().ok().or_else(|| {
        let value = cell.parse::<f64>().ok()?;
        (value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64).then_some(value as u32)
    })
}

/// Parse a wage cell, tolerating thousands separators.
fn parse_wage(cell: Option<&str>) -> Option<f64> {
    let value = cell?.replace(',', "").parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
