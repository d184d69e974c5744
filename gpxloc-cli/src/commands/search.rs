//! Search command - print every track file passing through a region.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use gpxloc::config::ConfigFile;
use gpxloc::finder::{LocationFinder, ScanSummary};
use gpxloc::region::{Region, RegionMatcher};
use gpxloc::scanner::FileScanner;

use crate::error::CliError;

/// Region selection: either a bounding box or a circle.
#[derive(Debug, Clone, Default, Args)]
pub struct RegionArgs {
    /// Bounding box "lon1,lat1,lon2,lat2"
    #[arg(long, value_name = "LON1,LAT1,LON2,LAT2", allow_hyphen_values = true)]
    pub bbox: Option<String>,

    /// Latitude of the circle center (WGS84 [-90,+90])
    #[arg(long, visible_alias = "lat", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude of the circle center (WGS84 [-180,+180])
    #[arg(long, visible_alias = "lon", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Radius of the circle in meters
    #[arg(long, allow_negative_numbers = true)]
    pub radius: Option<f64>,
}

impl RegionArgs {
    /// Build the search region, requiring exactly one of the two forms.
    pub fn to_region(&self) -> Result<Region, CliError> {
        let circle_given = [
            self.latitude.is_some(),
            self.longitude.is_some(),
            self.radius.is_some(),
        ];

        match (&self.bbox, circle_given) {
            (Some(_), c) if c.contains(&true) => Err(CliError::Usage(
                "too many options. Indicate either --bbox or --latitude, --longitude and --radius"
                    .to_string(),
            )),
            (Some(bbox), _) => Ok(Region::from_bound_descriptor(bbox)?),
            (None, [false, false, false]) => Err(CliError::Usage(
                "indicate either --bbox or --latitude, --longitude and --radius".to_string(),
            )),
            (None, _) => match (self.latitude, self.longitude, self.radius) {
                (Some(lat), Some(lon), Some(radius)) => Ok(Region::circle(lat, lon, radius)?),
                _ => Err(CliError::Usage(format!(
                    "circle search is missing {}",
                    self.missing_circle_flags().join(", ")
                ))),
            },
        }
    }

    fn missing_circle_flags(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.latitude.is_none() {
            missing.push("--latitude");
        }
        if self.longitude.is_none() {
            missing.push("--longitude");
        }
        if self.radius.is_none() {
            missing.push("--radius");
        }
        missing
    }
}

/// Arguments for the search command.
pub struct SearchArgs {
    pub region: RegionArgs,
    pub dirs: Vec<PathBuf>,
}

/// Validate arguments before any file is touched.
///
/// Returns the region and the cleaned root directories.
pub fn validate(args: &SearchArgs) -> Result<(Region, Vec<PathBuf>), CliError> {
    let region = args.region.to_region()?;

    if args.dirs.is_empty() {
        return Err(CliError::Usage("missing directory argument".to_string()));
    }

    let mut roots = Vec::with_capacity(args.dirs.len());
    for dir in &args.dirs {
        let path = clean_path(dir);
        if !path.is_dir() {
            return Err(CliError::DirectoryNotFound(path));
        }
        roots.push(path);
    }

    Ok((region, roots))
}

/// Run the search command, writing one matched path per line to `out`.
pub fn run<W: Write>(
    args: SearchArgs,
    config: &ConfigFile,
    out: &mut W,
) -> Result<ScanSummary, CliError> {
    let (region, roots) = validate(&args)?;
    let bounds = region.bounds();
    info!(
        kind = region.kind(),
        min_lon = bounds.min_lon(),
        min_lat = bounds.min_lat(),
        max_lon = bounds.max_lon(),
        max_lat = bounds.max_lat(),
        "Searching {} director{}",
        roots.len(),
        if roots.len() == 1 { "y" } else { "ies" }
    );

    let scanner = FileScanner::new(&config.scan.extensions);
    let finder = LocationFinder::new(region);

    let mut write_error = None;
    let summary = finder.run(scanner.scan(&roots), |path| {
        if write_error.is_none() {
            if let Err(e) = writeln!(out, "{}", path.display()) {
                write_error = Some(e);
            }
        }
    });

    if let Some(e) = write_error {
        return Err(CliError::Output(e));
    }
    out.flush().map_err(CliError::Output)?;

    info!(
        examined = summary.examined,
        matched = summary.matched,
        rejected_by_bounds = summary.rejected_by_bounds,
        skipped = summary.skipped,
        "Search complete"
    );

    Ok(summary)
}

/// Normalize a directory argument.
///
/// On Windows, shell completion of a quoted directory leaves a trailing `"`
/// (`"C:\gps\"` arrives as `C:\gps"`), which is stripped.
pub fn clean_path(path: &Path) -> PathBuf {
    #[cfg(windows)]
    let trimmed = {
        let raw = path.to_string_lossy();
        PathBuf::from(raw.strip_suffix('"').unwrap_or(raw.as_ref()))
    };
    #[cfg(windows)]
    let path = trimmed.as_path();

    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TRACK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <trk><trkseg>
    <trkpt lat="45.00" lon="5.00"></trkpt>
    <trkpt lat="45.10" lon="5.10"></trkpt>
  </trkseg></trk>
</gpx>"#;

    fn bbox_args(bbox: &str) -> RegionArgs {
        RegionArgs {
            bbox: Some(bbox.to_string()),
            ..Default::default()
        }
    }

    fn circle_args(lat: f64, lon: f64, radius: f64) -> RegionArgs {
        RegionArgs {
            latitude: Some(lat),
            longitude: Some(lon),
            radius: Some(radius),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_region_is_usage_error() {
        let err = RegionArgs::default().to_region().unwrap_err();
        assert!(matches!(err, CliError::Usage(msg) if msg.starts_with("indicate either")));
    }

    #[test]
    fn test_both_forms_is_usage_error() {
        let mut args = bbox_args("5.0,45.0,5.1,45.1");
        args.radius = Some(20.0);
        let err = args.to_region().unwrap_err();
        assert!(matches!(err, CliError::Usage(msg) if msg.starts_with("too many options")));
    }

    #[test]
    fn test_partial_circle_names_missing_flags() {
        let args = RegionArgs {
            latitude: Some(45.0),
            ..Default::default()
        };
        let err = args.to_region().unwrap_err();
        assert_eq!(
            err.to_string(),
            "circle search is missing --longitude, --radius"
        );
    }

    #[test]
    fn test_bbox_region() {
        let region = bbox_args("5.68678,45.08596,5.68979,45.08778").to_region().unwrap();
        assert_eq!(region.kind(), "rectangle");
    }

    #[test]
    fn test_malformed_bbox_is_region_error() {
        let err = bbox_args("5.68678 ,45.08596,5.68979,45.08778")
            .to_region()
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidRegion(_)));
    }

    #[test]
    fn test_circle_region() {
        let region = circle_args(45.087, 5.688, 20.0).to_region().unwrap();
        assert_eq!(region.kind(), "circle");
    }

    #[test]
    fn test_circle_invalid_radius() {
        let err = circle_args(45.087, 5.688, 0.0).to_region().unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidRegion(gpxloc::coord::CoordError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_validate_requires_directory() {
        let args = SearchArgs {
            region: bbox_args("5.0,45.0,5.1,45.1"),
            dirs: Vec::new(),
        };
        assert!(matches!(validate(&args), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_validate_rejects_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let args = SearchArgs {
            region: bbox_args("5.0,45.0,5.1,45.1"),
            dirs: vec![missing.clone()],
        };
        match validate(&args) {
            Err(CliError::DirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_rejects_file_as_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("track.gpx");
        fs::write(&file, TRACK).unwrap();
        let args = SearchArgs {
            region: bbox_args("5.0,45.0,5.1,45.1"),
            dirs: vec![file],
        };
        assert!(matches!(validate(&args), Err(CliError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_clean_path_removes_cur_dir_and_trailing_separator() {
        assert_eq!(
            clean_path(Path::new("data/./gps/")),
            PathBuf::from("data/gps")
        );
    }

    #[test]
    fn test_run_prints_matching_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("2023")).unwrap();
        fs::write(root.join("2023/ride.gpx"), TRACK).unwrap();
        fs::write(root.join("broken.gpx"), "<gpx").unwrap();
        fs::write(root.join("notes.txt"), TRACK).unwrap();

        let args = SearchArgs {
            region: bbox_args("5.05,45.05,5.15,45.15"),
            dirs: vec![root.to_path_buf()],
        };
        let mut out = Vec::new();
        let summary = run(args, &ConfigFile::default(), &mut out).unwrap();

        let printed = String::from_utf8(out).unwrap();
        let expected = format!("{}\n", clean_path(&root.join("2023/ride.gpx")).display());
        assert_eq!(printed, expected);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.examined, 2);
    }

    #[test]
    fn test_run_honours_configured_extensions() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ride.track"), TRACK).unwrap();

        let mut config = ConfigFile::default();
        config.scan.extensions = vec!["track".to_string()];

        let args = SearchArgs {
            region: circle_args(45.10, 5.10, 10.0),
            dirs: vec![temp_dir.path().to_path_buf()],
        };
        let mut out = Vec::new();
        let summary = run(args, &config, &mut out).unwrap();

        assert_eq!(summary.matched, 1);
        assert!(String::from_utf8(out).unwrap().ends_with("ride.track\n"));
    }
}
