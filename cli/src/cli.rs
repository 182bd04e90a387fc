use std::path::PathBuf;

use wagemap::{parse_wage_bound, FilterSelection, WageField};

/// Prevailing wage map CLI
#[derive(clap::Parser, Debug)]
#[command(name = "wagemap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// JSON config file with data paths and geocoder URL
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override the wage CSV path
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub wages: Option<PathBuf>,

    /// Override the state boundaries path
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub states: Option<PathBuf>,

    /// Override the area boundaries path
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub areas: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List job titles, states, cities and counties available as filters
    Options(OptionsArgs),

    /// Print the wage table for a selection
    Filter(FilterArgs),

    /// Show the area containing a coordinate
    Locate(LocateArgs),

    /// Geocode a zip code and show the area it falls in
    #[cfg(feature = "geocode")]
    Zip(ZipArgs),

    /// Write the area boundaries annotated with wages as GeoJSON
    Export(ExportArgs),
}

/// Filter choices shared by the commands that take a selection.
#[derive(clap::Args, Debug)]
pub struct SelectionArgs {
    /// Job title, defaults to the first title in the data
    #[arg(short, long)]
    pub title: Option<String>,

    /// Wage level: Level1..Level4 or Average, optionally with an _Annual suffix
    #[arg(short, long, default_value = "Level1")]
    pub level: WageField,

    /// Two-letter state abbreviation
    #[arg(long)]
    pub state: Option<String>,

    /// City (the part of the area name before the comma)
    #[arg(long)]
    pub city: Option<String>,

    /// County name
    #[arg(long)]
    pub county: Option<String>,

    /// Minimum annual wage, e.g. 65000 or "$65,000"
    #[arg(long)]
    pub min: Option<String>,

    /// Maximum annual wage
    #[arg(long)]
    pub max: Option<String>,
}

impl SelectionArgs {
    /// Apply these choices on top of `base`, which carries the default title.
    pub fn apply(&self, base: &FilterSelection) -> FilterSelection {
        let bound = |text: &Option<String>| text.as_deref().map(parse_wage_bound).unwrap_or(0.0);

        let mut selection = base.with_level(self.level);
        if let Some(title) = &self.title {
            selection = selection.with_title(title.clone());
        }
        selection
            .with_state(self.state.clone())
            .with_city(self.city.clone())
            .with_county(self.county.clone())
            .with_wage_range(bound(&self.min), bound(&self.max))
    }
}

#[derive(clap::Args, Debug)]
pub struct OptionsArgs {
    /// Limit cities and counties to this state
    #[arg(long)]
    pub state: Option<String>,

    /// Limit counties to this city
    #[arg(long)]
    pub city: Option<String>,

    /// Only list job titles containing this text
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Print at most this many rows
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Job title used to report wage data, defaults to the first title
    #[arg(short, long)]
    pub title: Option<String>,
}

#[cfg(feature = "geocode")]
#[derive(clap::Args, Debug)]
pub struct ZipArgs {
    /// Five-digit US zip code
    pub zip: String,

    /// Job title used to report wage data, defaults to the first title
    #[arg(short, long)]
    pub title: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output GeoJSON file
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub force: bool,
}
