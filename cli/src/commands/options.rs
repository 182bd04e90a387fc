use anyhow::{anyhow, Result};
use wagemap::suggest;

use crate::cli::{Cli, OptionsArgs};

pub fn run(cli: &Cli, args: &OptionsArgs) -> Result<()> {
    let config = super::config(cli)?;
    let session = super::session(&config, false)?;
    let dataset = session.dataset().loaded()
        .ok_or_else(|| anyhow!("[cli::options] wage data not loaded"))?;

    let titles = match &args.search {
        Some(text) => suggest(dataset.titles(), text).into_iter().map(str::to_string).collect(),
        None => dataset.titles().to_vec(),
    };
    print_list("Titles", &titles);
    print_list("States", dataset.states());
    print_list("Cities", &dataset.cities_in(args.state.as_deref()));
    print_list("Counties", &dataset.counties_in(args.state.as_deref(), args.city.as_deref()));

    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    println!("{heading} ({}):", items.len());
    for item in items {
        println!("  {item}");
    }
}
