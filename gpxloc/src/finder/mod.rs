//! Two-stage location matching over a stream of track files.
//!
//! For each candidate the finder first compares the file's overall bound
//! with the region's bound. Only files that survive this cheap test have
//! their points examined, and the examination stops at the first point
//! inside the region. A file is reported at most once.
//!
//! # Example
//!
//! ```
//! use gpxloc::coord::Point;
//! use gpxloc::finder::LocationFinder;
//! use gpxloc::region::Region;
//! use gpxloc::track::TrackFile;
//!
//! let region = Region::from_bound_descriptor("5.05,45.05,5.15,45.15").unwrap();
//! let finder = LocationFinder::new(region);
//!
//! let track = TrackFile::new(vec![
//!     Point::new(45.00, 5.00).unwrap(),
//!     Point::new(45.10, 5.10).unwrap(),
//! ]);
//! assert!(finder.find(&track));
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::region::{Region, RegionMatcher};
use crate::track::{TrackError, TrackFile};

/// Counters collected over one [`LocationFinder::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Candidates received, including the ones that failed to parse
    pub examined: usize,
    /// Files reported as passing through the region
    pub matched: usize,
    /// Files discarded by the bounding box test (or without points)
    pub rejected_by_bounds: usize,
    /// Files that could not be read or parsed
    pub skipped: usize,
}

/// Outcome of evaluating one parsed track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackMatch {
    /// A point lies in the region.
    Matched,
    /// The bounds overlap but no point is inside.
    NoPointInside,
    /// The track's bound does not reach the region, or there is no bound.
    OutOfBounds,
}

/// Matches track files against a search region.
#[derive(Debug, Clone)]
pub struct LocationFinder<M = Region> {
    region: M,
}

impl<M: RegionMatcher> LocationFinder<M> {
    pub fn new(region: M) -> Self {
        Self { region }
    }

    pub fn region(&self) -> &M {
        &self.region
    }

    /// Evaluate one track.
    pub fn evaluate(&self, track: &TrackFile) -> TrackMatch {
        let Some(bound) = track.bound() else {
            return TrackMatch::OutOfBounds;
        };
        if !self.region.possible_match(bound) {
            return TrackMatch::OutOfBounds;
        }

        if track.points().iter().any(|p| self.region.matches(p)) {
            TrackMatch::Matched
        } else {
            TrackMatch::NoPointInside
        }
    }

    /// Whether any point of `track` lies in the region.
    pub fn find(&self, track: &TrackFile) -> bool {
        self.evaluate(track) == TrackMatch::Matched
    }

    /// Evaluate every candidate, calling `report` once per matching file.
    ///
    /// Candidates that failed to parse are logged and skipped; they never
    /// stop the run.
    pub fn run<I, F>(&self, candidates: I, mut report: F) -> ScanSummary
    where
        I: IntoIterator<Item = (PathBuf, Result<TrackFile, TrackError>)>,
        F: FnMut(&Path),
    {
        let mut summary = ScanSummary::default();

        for (path, parsed) in candidates {
            summary.examined += 1;

            let track = match parsed {
                Ok(track) => track,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable track file");
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.evaluate(&track) {
                TrackMatch::Matched => {
                    debug!(path = %path.display(), "Track passes through region");
                    summary.matched += 1;
                    report(&path);
                }
                TrackMatch::NoPointInside => {
                    debug!(path = %path.display(), points = track.len(), "No point inside region");
                }
                TrackMatch::OutOfBounds => {
                    summary.rejected_by_bounds += 1;
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{BoundingBox, Point};
    use std::cell::Cell;

    fn point(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    fn sample_track() -> TrackFile {
        TrackFile::new(vec![point(45.00, 5.00), point(45.10, 5.10)])
    }

    /// Wraps a region and counts how often each test is invoked.
    struct SpyRegion {
        inner: Region,
        possible_calls: Cell<usize>,
        match_calls: Cell<usize>,
    }

    impl SpyRegion {
        fn new(inner: Region) -> Self {
            Self {
                inner,
                possible_calls: Cell::new(0),
                match_calls: Cell::new(0),
            }
        }
    }

    impl RegionMatcher for SpyRegion {
        fn possible_match(&self, bound: &BoundingBox) -> bool {
            self.possible_calls.set(self.possible_calls.get() + 1);
            self.inner.possible_match(bound)
        }

        fn matches(&self, point: &Point) -> bool {
            self.match_calls.set(self.match_calls.get() + 1);
            self.inner.matches(point)
        }

        fn bounds(&self) -> BoundingBox {
            self.inner.bounds()
        }
    }

    #[test]
    fn test_second_point_inside_matches() {
        let region = Region::from_bound_descriptor("5.05,45.05,5.15,45.15").unwrap();
        let finder = LocationFinder::new(SpyRegion::new(region));

        assert_eq!(finder.evaluate(&sample_track()), TrackMatch::Matched);
        assert_eq!(finder.region().possible_calls.get(), 1);
        assert_eq!(finder.region().match_calls.get(), 2);
    }

    #[test]
    fn test_disjoint_region_never_tests_points() {
        let region = Region::from_bound_descriptor("10,10,11,11").unwrap();
        let finder = LocationFinder::new(SpyRegion::new(region));

        assert_eq!(finder.evaluate(&sample_track()), TrackMatch::OutOfBounds);
        assert_eq!(finder.region().possible_calls.get(), 1);
        assert_eq!(finder.region().match_calls.get(), 0);
    }

    #[test]
    fn test_first_match_stops_iteration() {
        let region = Region::from_bound_descriptor("4.95,44.95,5.15,45.15").unwrap();
        let finder = LocationFinder::new(SpyRegion::new(region));

        let track = TrackFile::new(vec![
            point(45.00, 5.00),
            point(45.10, 5.10),
            point(45.12, 5.12),
        ]);
        assert!(finder.find(&track));
        assert_eq!(finder.region().match_calls.get(), 1);
    }

    #[test]
    fn test_bounds_overlap_without_point_inside() {
        // The track's box crosses the region but the path goes around it
        let region = Region::from_bound_descriptor("5.04,45.04,5.06,45.06").unwrap();
        let finder = LocationFinder::new(region);

        assert_eq!(finder.evaluate(&sample_track()), TrackMatch::NoPointInside);
    }

    #[test]
    fn test_empty_track_never_matches() {
        let region = Region::from_bound_descriptor("-180,-90,180,90").unwrap();
        let finder = LocationFinder::new(SpyRegion::new(region));

        assert!(!finder.find(&TrackFile::default()));
        assert_eq!(finder.region().possible_calls.get(), 0);
    }

    #[test]
    fn test_circle_region_match() {
        let region = Region::circle(45.10, 5.10, 50.0).unwrap();
        let finder = LocationFinder::new(region);
        assert!(finder.find(&sample_track()));

        let region = Region::circle(45.05, 5.05, 50.0).unwrap();
        let finder = LocationFinder::new(region);
        assert!(!finder.find(&sample_track()));
    }

    #[test]
    fn test_run_reports_each_match_once_and_skips_errors() {
        let region = Region::from_bound_descriptor("5.05,45.05,5.15,45.15").unwrap();
        let finder = LocationFinder::new(region);

        let far = TrackFile::new(vec![point(10.5, 10.5)]);
        let broken: Result<TrackFile, TrackError> = Err(TrackError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "truncated",
        )));
        let candidates = vec![
            (PathBuf::from("a.gpx"), Ok(sample_track())),
            (PathBuf::from("b.gpx"), broken),
            (PathBuf::from("c.gpx"), Ok(far)),
            (PathBuf::from("d.gpx"), Ok(TrackFile::default())),
            (PathBuf::from("e.gpx"), Ok(sample_track())),
        ];

        let mut reported = Vec::new();
        let summary = finder.run(candidates, |p| reported.push(p.to_path_buf()));

        assert_eq!(reported, vec![PathBuf::from("a.gpx"), PathBuf::from("e.gpx")]);
        assert_eq!(
            summary,
            ScanSummary {
                examined: 5,
                matched: 2,
                rejected_by_bounds: 2,
                skipped: 1,
            }
        );
    }
}
