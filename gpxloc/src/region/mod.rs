//! Search regions.
//!
//! A [`Region`] is the geographic area a track must pass through. Two shapes
//! exist, a [`Rectangle`] and a [`Circle`], each answering the same three
//! questions through [`RegionMatcher`]:
//!
//! - `possible_match`: can a track with this overall bound touch the region?
//!   Cheap and conservative (no false negatives).
//! - `matches`: is this exact point inside the region?
//! - `bounds`: the rectangle used for the cheap test.
//!
//! # Example
//!
//! ```
//! use gpxloc::coord::Point;
//! use gpxloc::region::{Region, RegionMatcher};
//!
//! let region = Region::circle(45.087, 5.688, 20.0).unwrap();
//! let nearby = Point::new(45.08705, 5.68805).unwrap();
//! assert!(region.matches(&nearby));
//! ```

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::coord::{BoundingBox, CoordError, Point};

/// Matching contract shared by every region shape.
///
/// The location finder is generic over this trait so it can be driven by a
/// [`Region`] in production and by instrumented matchers in tests.
pub trait RegionMatcher {
    /// Whether a track whose points all lie within `bound` could match.
    fn possible_match(&self, bound: &BoundingBox) -> bool;

    /// Whether `point` lies inside the region.
    fn matches(&self, point: &Point) -> bool;

    /// The rectangle used by [`RegionMatcher::possible_match`].
    fn bounds(&self) -> BoundingBox;
}

/// A search region, built once from user input and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Region {
    /// Rectangle region from a `lon1,lat1,lon2,lat2` descriptor.
    pub fn from_bound_descriptor(descriptor: &str) -> Result<Self, CoordError> {
        Rectangle::from_descriptor(descriptor).map(Region::Rectangle)
    }

    /// Circle region around (`lat`, `lon`) with `radius_m` meters radius.
    pub fn circle(lat: f64, lon: f64, radius_m: f64) -> Result<Self, CoordError> {
        Circle::new(lat, lon, radius_m).map(Region::Circle)
    }

    /// Short label for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Region::Rectangle(_) => "rectangle",
            Region::Circle(_) => "circle",
        }
    }
}

impl RegionMatcher for Region {
    #[inline]
    fn possible_match(&self, bound: &BoundingBox) -> bool {
        match self {
            Region::Rectangle(r) => r.possible_match(bound),
            Region::Circle(c) => c.possible_match(bound),
        }
    }

    #[inline]
    fn matches(&self, point: &Point) -> bool {
        match self {
            Region::Rectangle(r) => r.matches(point),
            Region::Circle(c) => c.matches(point),
        }
    }

    fn bounds(&self) -> BoundingBox {
        match self {
            Region::Rectangle(r) => r.bounds(),
            Region::Circle(c) => c.bounds(),
        }
    }
}

impl From<Rectangle> for Region {
    fn from(rect: Rectangle) -> Self {
        Region::Rectangle(rect)
    }
}

impl From<Circle> for Region {
    fn from(circle: Circle) -> Self {
        Region::Circle(circle)
    }
}
