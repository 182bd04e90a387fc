mod cli;
mod commands;

use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{export, filter, locate, options};

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Options(args) => options::run(cli, args),
        Commands::Filter(args) => filter::run(cli, args),
        Commands::Locate(args) => locate::run(cli, args),
        #[cfg(feature = "geocode")]
        Commands::Zip(args) => commands::zip::run(cli, args),
        Commands::Export(args) => export::run(cli, args),
    }
}

fn main() {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `-v` raises the level.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
