//! Parsed track logs.
//!
//! A [`TrackFile`] is the flattened view of a GPX document used for
//! matching: every track point of every segment, in document order, plus the
//! bounding box around them. Routes and standalone waypoints are not part of
//! the recorded path and are ignored.

mod parser;

pub use parser::{parse_track, read_track_file, TrackError};

use crate::coord::{BoundingBox, Point};

/// Points of one track log together with their overall extent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackFile {
    points: Vec<Point>,
    bound: Option<BoundingBox>,
}

impl TrackFile {
    /// Build a track file from its points, computing the bound.
    pub fn new(points: Vec<Point>) -> Self {
        let bound = BoundingBox::enclosing(&points);
        Self { points, bound }
    }

    /// Track points in recording order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Overall extent, `None` for a file without track points.
    pub fn bound(&self) -> Option<&BoundingBox> {
        self.bound.as_ref()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_bound() {
        let track = TrackFile::new(vec![
            Point::new(45.00, 5.00).unwrap(),
            Point::new(45.10, 5.10).unwrap(),
        ]);

        let bound = track.bound().unwrap();
        assert_eq!(bound.min(), Point::new(45.00, 5.00).unwrap());
        assert_eq!(bound.max(), Point::new(45.10, 5.10).unwrap());
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_empty_track_has_no_bound() {
        let track = TrackFile::new(Vec::new());
        assert!(track.is_empty());
        assert!(track.bound().is_none());
        assert_eq!(track, TrackFile::default());
    }
}
