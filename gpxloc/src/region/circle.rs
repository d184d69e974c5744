//! Circular search region.

use super::RegionMatcher;
use crate::coord::{bound_around_point, bounds_intersect, distance_m, BoundingBox, CoordError, Point};

/// Every point within `radius_m` meters (great-circle) of `center`.
///
/// The enclosing box is derived once at construction and only serves the
/// pre-filter; the precise test is always the haversine distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius_m: f64,
    bound: BoundingBox,
}

impl Circle {
    /// Build a circle, validating the center and requiring a positive radius.
    ///
    /// # Errors
    ///
    /// - [`CoordError::InvalidLatitude`] / [`CoordError::InvalidLongitude`]
    ///   for an out-of-range center.
    /// - [`CoordError::InvalidRadius`] when `radius_m` is not a finite
    ///   number greater than zero.
    pub fn new(lat: f64, lon: f64, radius_m: f64) -> Result<Self, CoordError> {
        let center = Point::new(lat, lon)?;
        if !(radius_m.is_finite() && radius_m > 0.0) {
            return Err(CoordError::InvalidRadius(radius_m));
        }

        Ok(Self {
            center,
            radius_m,
            bound: bound_around_point(&center, radius_m),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius in meters.
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }
}

impl RegionMatcher for Circle {
    #[inline]
    fn possible_match(&self, bound: &BoundingBox) -> bool {
        bounds_intersect(&self.bound, bound)
    }

    #[inline]
    fn matches(&self, point: &Point) -> bool {
        distance_m(&self.center, point) <= self.radius_m
    }

    fn bounds(&self) -> BoundingBox {
        self.bound
    }
}
