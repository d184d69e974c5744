//! gpxloc CLI - find GPX files recorded in a given area
//!
//! Matched file paths are written to stdout, one per line. Diagnostics go
//! to stderr.

mod commands;
mod error;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use commands::search::{self, RegionArgs, SearchArgs};
use error::CliError;
use runner::CliRunner;

const EXAMPLES: &str = "\
EXAMPLES:
  Files passing through a bounding box:
    gpxloc --bbox=\"5.68678,45.08596,5.68979,45.08778\" /data/gps/2023 /data/gps/2024

  Files passing within 20 meters of a point:
    gpxloc --lat=45.087 --lon=5.688 --radius=20 /data/gps/2023";

#[derive(Debug, Parser)]
#[command(name = "gpxloc")]
#[command(version = gpxloc::VERSION)]
#[command(about = "GPX files Location Finder")]
#[command(
    long_about = "Recursively searches the given directories for GPX files whose \
track passes through a rectangle (--bbox) or a circle (--lat, --lon, --radius) \
and prints their paths."
)]
#[command(after_help = EXAMPLES)]
struct Args {
    #[command(flatten)]
    region: RegionArgs,

    /// Configuration file (default: ~/.gpxloc/config.ini)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Directories to search
    #[arg(value_name = "DIR")]
    dirs: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        e.exit();
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref(), args.verbose)?;
    runner.log_startup();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    search::run(
        SearchArgs {
            region: args.region,
            dirs: args.dirs,
        },
        runner.config(),
        &mut out,
    )?;

    Ok(())
}
