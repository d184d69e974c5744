//! gpxloc - find track logs recorded in a given area
//!
//! This library locates GPX files whose recorded path passes through a
//! rectangle or a circle on the globe. Matching happens in two stages: the
//! file's overall bounding box is compared with the region's bounding box,
//! and only files that overlap have their points tested one by one.
//!
//! # High-Level API
//!
//! ```no_run
//! use gpxloc::finder::LocationFinder;
//! use gpxloc::region::Region;
//! use gpxloc::scanner::FileScanner;
//!
//! let region = Region::circle(45.087, 5.688, 20.0)?;
//! let finder = LocationFinder::new(region);
//! let scanner = FileScanner::default();
//!
//! let summary = finder.run(scanner.scan(&["/data/gps/2023"]), |path| {
//!     println!("{}", path.display());
//! });
//! println!("{} of {} files matched", summary.matched, summary.examined);
//! # Ok::<(), gpxloc::coord::CoordError>(())
//! ```

pub mod config;
pub mod coord;
pub mod finder;
pub mod logging;
pub mod region;
pub mod scanner;
pub mod track;

/// Version of the gpxloc library and CLI.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
