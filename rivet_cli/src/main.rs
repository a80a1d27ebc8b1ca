//! # Riveter CLI Application
//!
//! Terminal session for rivet layouts: collect one or more sheets, print
//! the computed layouts, then answer questions about them.
//!
//! ## Configuration
//!
//! - `--units inches|mm` (or `RIVETER_UNITS`) skips the unit prompt
//! - `--json` (or `RIVETER_JSON`) prints the session as JSON after data entry
//! - `RUST_LOG` controls log output on stderr (default `warn`, `-v` for `debug`)

mod app;

use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use app::{App, AppConfig};
use rivet_core::UnitSystem;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitsArg {
    Inches,
    Mm,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Inches => UnitSystem::Inches,
            UnitsArg::Mm => UnitSystem::Millimeters,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "riveter",
    about = "Rivet layout calculator for rectangular sheets",
    version
)]
struct Cli {
    /// Units for sheet dimensions. Prompted for when omitted.
    #[arg(long, value_enum, env = "RIVETER_UNITS")]
    units: Option<UnitsArg>,

    /// Print all calculated layouts as JSON before the question prompt.
    #[arg(long, env = "RIVETER_JSON")]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig {
        units: cli.units.map(UnitSystem::from),
        json: cli.json,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(stdin.lock(), stdout.lock(), config);
    let session = app.run().context("rivet layout session failed")?;

    tracing::info!(layouts = session.len(), "session finished");
    Ok(())
}
