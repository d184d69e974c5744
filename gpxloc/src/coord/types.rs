//! Coordinate type definitions

use thiserror::Error;

/// WGS84 valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// WGS84 valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A validated WGS84 position in decimal degrees.
///
/// Construction goes through [`Point::new`], so every `Point` in circulation
/// has a latitude in `[-90, 90]` and a longitude in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Create a point, rejecting out-of-range (or NaN) coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CoordError::InvalidLatitude`] or [`CoordError::InvalidLongitude`].
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        super::validate_latitude(lat)?;
        super::validate_longitude(lon)?;
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Axis-aligned rectangle over longitude/latitude.
///
/// Always stored in normalized form: `min_lon <= max_lon` and
/// `min_lat <= max_lat`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min_lon: f64,
    min_lat: f64,
    max_lon: f64,
    max_lat: f64,
}

impl BoundingBox {
    /// Build the box spanned by two opposite corners, given in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_lon: a.lon.min(b.lon),
            min_lat: a.lat.min(b.lat),
            max_lon: a.lon.max(b.lon),
            max_lat: a.lat.max(b.lat),
        }
    }

    /// Smallest box containing every point, or `None` when there are none.
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bound = Self::from_corners(*first, *first);
        for p in iter {
            bound.extend(p);
        }
        Some(bound)
    }

    /// Grow the box so that it contains `point`.
    pub fn extend(&mut self, point: &Point) {
        self.min_lon = self.min_lon.min(point.lon);
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lon = self.max_lon.max(point.lon);
        self.max_lat = self.max_lat.max(point.lat);
    }

    /// Closed-interval containment on both axes.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        (self.min_lon..=self.max_lon).contains(&point.lon)
            && (self.min_lat..=self.max_lat).contains(&point.lat)
    }

    /// South-west corner.
    pub fn min(&self) -> Point {
        Point {
            lat: self.min_lat,
            lon: self.min_lon,
        }
    }

    /// North-east corner.
    pub fn max(&self) -> Point {
        Point {
            lat: self.max_lat,
            lon: self.max_lon,
        }
    }

    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Build a box from raw edges that are already known to be in range.
    pub(crate) fn from_edges(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        debug_assert!(min_lon <= max_lon && min_lat <= max_lat);
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }
}

/// Errors raised while validating coordinates or building a search region.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude is outside valid range (-90.0 to 90.0)
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude is outside valid range (-180.0 to 180.0)
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    /// Radius is zero, negative or not a finite number
    #[error("Invalid radius: {0} (must be greater than 0 meters)")]
    InvalidRadius(f64),

    /// Bounding box descriptor could not be tokenized
    #[error("Malformed bounding box '{input}': {reason}")]
    MalformedInput { input: String, reason: String },
}

impl CoordError {
    /// True for the latitude/longitude range failures.
    pub fn is_invalid_coordinate(&self) -> bool {
        matches!(
            self,
            CoordError::InvalidLatitude(_) | CoordError::InvalidLongitude(_)
        )
    }

    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        CoordError::MalformedInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
