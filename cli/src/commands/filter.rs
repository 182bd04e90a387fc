use anyhow::{anyhow, Result};
use wagemap::{format_currency, WageField, WageLevel, WageRecord};

use crate::cli::{Cli, FilterArgs};

pub fn run(cli: &Cli, args: &FilterArgs) -> Result<()> {
    let config = super::config(cli)?;
    let mut session = super::session(&config, false)?;

    let selection = args.selection.apply(session.selection());
    session.select(selection);
    let view = session.view().ok_or_else(|| anyhow!("[cli::filter] wage data not loaded"))?;

    println!("{}", view.subtitle);
    println!("{} matching rows", view.rows.len());
    println!();

    let selected = view.selection.level.level;
    let header = WageLevel::order().iter()
        .map(|level| mark(level.to_str(), *level == selected))
        .collect::<Vec<_>>();
    println!("{:<40} {:<5} {}", "Area", "State", header.iter().map(|h| format!("{h:>14}")).collect::<String>());

    let limit = args.limit.unwrap_or(usize::MAX);
    for record in view.rows.iter().take(limit) {
        println!("{}", row(record, selected));
    }

    Ok(())
}

fn row(record: &WageRecord, selected: WageLevel) -> String {
    let area = if record.area_name.is_empty() { format!("Area {}", record.area_code) } else { record.area_name.clone() };
    let wages = WageLevel::order().iter()
        .map(|level| {
            let value = format_currency(Some(record.wage(WageField::annual(*level))));
            format!("{:>14}", mark(&value, *level == selected))
        })
        .collect::<String>();
    format!("{area:<40} {:<5} {wages}", record.state_abbr)
}

fn mark(text: &str, selected: bool) -> String {
    if selected { format!("*{text}") } else { text.to_string() }
}
