//! Coordinate validation and planar/spherical geometry helpers.
//!
//! Provides the WGS84 range checks, the `lon1,lat1,lon2,lat2` bounding box
//! descriptor parser, the closed-interval box intersection test and
//! great-circle distance used by the search regions.

mod types;


pub use types::{BoundingBox, CoordError, Point, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Mean earth radius used for every spherical computation, in meters.
///
/// The WGS84 equatorial radius. Distance and the circle's enclosing box must
/// share the same value.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees conversion factor.
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Checks that `lat` lies within `[-90, 90]`.
#[inline]
pub fn validate_latitude(lat: f64) -> Result<(), CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    Ok(())
}

/// Checks that `lon` lies within `[-180, 180]`.
#[inline]
pub fn validate_longitude(lon: f64) -> Result<(), CoordError> {
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }
    Ok(())
}

/// Parses a `lon1,lat1,lon2,lat2` descriptor into a normalized bounding box.
///
/// Each token may be preceded by a single space (`"5.6, 45.0"`), but a space
/// before a comma is rejected (`"5.6 ,45.0"`). The two corners may be given
/// in either order.
///
/// # Errors
///
/// - [`CoordError::MalformedInput`] for a wrong token count or a token that
///   is not a number.
/// - [`CoordError::InvalidLatitude`] / [`CoordError::InvalidLongitude`] when
///   a corner is out of range.
///
/// # Example
///
/// ```
/// use gpxloc::coord::parse_bound_descriptor;
///
/// let bound = parse_bound_descriptor("5.630665,45.031614,5.634817,45.034214").unwrap();
/// assert_eq!(bound.min_lon(), 5.630665);
/// assert_eq!(bound.max_lat(), 45.034214);
/// ```
pub fn parse_bound_descriptor(input: &str) -> Result<BoundingBox, CoordError> {
    let tokens: Vec<&str> = input.split(',').collect();
    if tokens.len() != 4 {
        return Err(CoordError::malformed(
            input,
            format!("expected 4 comma-separated values, found {}", tokens.len()),
        ));
    }

    let mut values = [0.0_f64; 4];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = parse_token(input, token)?;
    }
    let [lon1, lat1, lon2, lat2] = values;

    let first = Point::new(lat1, lon1)?;
    let second = Point::new(lat2, lon2)?;
    Ok(BoundingBox::from_corners(first, second))
}

fn parse_token(input: &str, token: &str) -> Result<f64, CoordError> {
    let trimmed = token.strip_prefix(' ').unwrap_or(token);
    trimmed
        .parse::<f64>()
        .map_err(|_| CoordError::malformed(input, format!("'{}' is not a number", token)))
}

/// Closed-interval overlap test on both axes.
///
/// Boxes that only share an edge or a single corner intersect.
#[inline]
pub fn bounds_intersect(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.min_lon() <= b.max_lon()
        && b.min_lon() <= a.max_lon()
        && a.min_lat() <= b.max_lat()
        && b.min_lat() <= a.max_lat()
}

/// Great-circle distance between two points, in meters.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
///
/// # Example
///
/// ```
/// use gpxloc::coord::{distance_m, Point};
///
/// let a = Point::new(0.0, 0.0).unwrap();
/// let b = Point::new(1.0, 0.0).unwrap();
/// let d = distance_m(&a, &b);
/// assert!((d - 111_319.5).abs() < 1.0);
/// ```
pub fn distance_m(from: &Point, to: &Point) -> f64 {
    let lat1_rad = from.lat() * DEG_TO_RAD;
    let lat2_rad = to.lat() * DEG_TO_RAD;
    let delta_lat = (to.lat() - from.lat()) * DEG_TO_RAD;
    let delta_lon = (to.lon() - from.lon()) * DEG_TO_RAD;

    // Haversine formula
    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

/// Padding added on every side of [`bound_around_point`], in degrees.
///
/// Absorbs floating-point rounding at the box edges (roughly 0.1 mm).
const BOUND_PADDING_DEG: f64 = 1e-9;

/// Smallest lat/lon box guaranteed to contain every point within
/// `distance_m` meters of `center`.
///
/// The latitude extent is `±d/R`. The longitude half-width is the tangent
/// meridian offset `asin(sin(d/R) / cos(lat))`, which grows as the center
/// approaches a pole. When the circle reaches a pole, or its longitude
/// extent crosses the antimeridian, the box spans every longitude.
pub fn bound_around_point(center: &Point, distance_m: f64) -> BoundingBox {
    let angular = distance_m / EARTH_RADIUS_M;
    let lat_rad = center.lat() * DEG_TO_RAD;
    let min_lat_rad = lat_rad - angular;
    let max_lat_rad = lat_rad + angular;

    let half_pi = PI / 2.0;
    let reaches_pole = min_lat_rad <= -half_pi || max_lat_rad >= half_pi;

    let (min_lon, max_lon) = if reaches_pole {
        (MIN_LON, MAX_LON)
    } else {
        let ratio = angular.sin() / lat_rad.cos();
        if ratio >= 1.0 {
            (MIN_LON, MAX_LON)
        } else {
            let delta_lon = ratio.asin() * RAD_TO_DEG;
            let west = center.lon() - delta_lon - BOUND_PADDING_DEG;
            let east = center.lon() + delta_lon + BOUND_PADDING_DEG;
            if west < MIN_LON || east > MAX_LON {
                // A wrapped box would have min > max; cover the whole band instead.
                (MIN_LON, MAX_LON)
            } else {
                (west, east)
            }
        }
    };

    let min_lat = (min_lat_rad * RAD_TO_DEG - BOUND_PADDING_DEG).max(MIN_LAT);
    let max_lat = (max_lat_rad * RAD_TO_DEG + BOUND_PADDING_DEG).min(MAX_LAT);

    BoundingBox::from_edges(min_lon, min_lat, max_lon, max_lat)
}
