use anyhow::{anyhow, Result};
use tracing::info;
use wagemap::{write_geojson, write_matched_geojson};

use crate::cli::{Cli, ExportArgs};

pub fn run(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let config = super::config(cli)?;
    let mut session = super::session(&config, true)?;

    let selection = args.selection.apply(session.selection());
    session.select(selection);
    let view = session.view().ok_or_else(|| anyhow!("[cli::export] wage data not loaded"))?;
    let map = view.map.ok_or_else(|| anyhow!("[cli::export] boundaries not loaded"))?;

    let areas = map.areas.iter().map(|a| a.area).collect::<Vec<_>>();
    let geojson = write_matched_geojson(&areas, view.selection);
    write_geojson(&args.output, &geojson, args.force)?;

    let selected = map.areas.iter().filter(|a| a.selected).count();
    info!(areas = areas.len(), selected, focus = ?map.focus, "[cli::export] wrote {}", args.output.display());
    Ok(())
}
