use anyhow::Result;
use tracing::info;
use wagemap::ZippopotamGeocoder;

use crate::cli::{Cli, ZipArgs};
use crate::commands::locate::{print_area, select_title};

pub fn run(cli: &Cli, args: &ZipArgs) -> Result<()> {
    let config = super::config(cli)?;
    let mut session = super::session(&config, true)?;
    select_title(&mut session, args.title.as_deref());

    let geocoder = ZippopotamGeocoder::new(config.geocoder_url.as_str())?;
    let report = session.lookup_zip(&geocoder, &args.zip)?;
    let place = &report.place;
    info!(lat = place.lat, lon = place.lon, "[cli::zip] geocoded {}", args.zip.trim());

    println!("Location: {}, {} ({})", place.name, place.state_abbr, place.state);
    match &report.area {
        Some(area) => print_area(area),
        None => {
            println!("Area: not found in area boundaries");
            println!("Note: this location may be outside defined metropolitan areas.");
        }
    }
    Ok(())
}
