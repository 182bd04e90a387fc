use anyhow::Result;
use wagemap::{AreaInfo, FilterSelection, Session};

use crate::cli::{Cli, LocateArgs};

pub fn run(cli: &Cli, args: &LocateArgs) -> Result<()> {
    let config = super::config(cli)?;
    let mut session = super::session(&config, true)?;
    select_title(&mut session, args.title.as_deref());

    match session.locate_point(args.lat, args.lon)? {
        Some(info) => print_area(&info),
        None => println!("Area: not found in area boundaries (the point may be outside defined metropolitan areas)"),
    }
    Ok(())
}

/// Switch to `title`, keeping the session's default when none is given.
pub fn select_title(session: &mut Session, title: Option<&str>) {
    if let Some(title) = title {
        session.select(FilterSelection::new(title));
    }
}

pub fn print_area(info: &AreaInfo) {
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());

    println!("Area: {}", or_na(&info.area_name));
    println!("County: {}", or_na(&info.county_name));
    if let Some(code) = info.area_code {
        println!("Area code: {code}");
    }
    println!("Wage data available: {}", if info.has_wage_data { "Yes" } else { "No" });
}
