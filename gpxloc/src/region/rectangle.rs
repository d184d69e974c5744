//! Rectangular search region.

use super::RegionMatcher;
use crate::coord::{bounds_intersect, parse_bound_descriptor, BoundingBox, CoordError, Point};

/// A lon/lat aligned rectangle. Its pre-filter bound is the rectangle itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    bound: BoundingBox,
}

impl Rectangle {
    /// Wrap an already validated bounding box.
    pub fn new(bound: BoundingBox) -> Self {
        Self { bound }
    }

    /// Parse a `lon1,lat1,lon2,lat2` descriptor.
    ///
    /// See [`parse_bound_descriptor`] for the accepted syntax.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, CoordError> {
        parse_bound_descriptor(descriptor).map(Self::new)
    }
}

impl RegionMatcher for Rectangle {
    #[inline]
    fn possible_match(&self, bound: &BoundingBox) -> bool {
        bounds_intersect(&self.bound, bound)
    }

    /// Boundary points are inside.
    #[inline]
    fn matches(&self, point: &Point) -> bool {
        self.bound.contains(point)
    }

    fn bounds(&self) -> BoundingBox {
        self.bound
    }
}
