//! GPX reader producing [`TrackFile`]s.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::TrackFile;
use crate::coord::{CoordError, Point};

/// Error type for track file reading.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GPX parse error: {0}")]
    Gpx(#[from] gpx::errors::GpxError),

    #[error("Invalid track point #{index}: {source}")]
    InvalidPoint {
        index: usize,
        #[source]
        source: CoordError,
    },
}

/// Read and parse the GPX file at `path`.
pub fn read_track_file(path: &Path) -> Result<TrackFile, TrackError> {
    let file = File::open(path)?;
    parse_track(BufReader::new(file))
}

/// Parse a GPX document, flattening all track segments into one sequence.
pub fn parse_track<R: Read>(reader: R) -> Result<TrackFile, TrackError> {
    let document = gpx::read(reader)?;

    let waypoints = document
        .tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter());

    let mut points = Vec::new();
    for (index, waypoint) in waypoints.enumerate() {
        // geo_types points are (x = longitude, y = latitude)
        let position = waypoint.point();
        let point = Point::new(position.y(), position.x())
            .map_err(|source| TrackError::InvalidPoint { index, source })?;
        points.push(point);
    }

    Ok(TrackFile::new(points))
}
