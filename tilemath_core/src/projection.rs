//! Degree/radian helpers and the Spherical Mercator (EPSG:3857) projection.
//!
//! None of these functions clamp their input. The Mercator `y` diverges towards the poles, so
//! callers must keep latitudes inside [`MAX_LAT`](crate::constants::MAX_LAT) when they need
//! finite meters.

use crate::{LngLat, XY, constants::EARTH_RADIUS};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Converts degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
	deg * (PI / 180.0)
}

/// Converts radians to degrees.
#[inline]
pub fn rad2deg(rad: f64) -> f64 {
	rad * (180.0 / PI)
}

/// Projects a WGS84 point in degrees to Spherical Mercator meters.
///
/// # Examples
/// ```
/// use approx::assert_abs_diff_eq;
/// use tilemath_core::{LngLat, to_mercator};
///
/// let xy = to_mercator(&LngLat::new(0.0, 0.0));
/// assert_eq!(xy.x, 0.0);
/// assert_abs_diff_eq!(xy.y, 0.0, epsilon = 1e-6);
/// ```
pub fn to_mercator(point: &LngLat) -> XY {
	XY {
		x: EARTH_RADIUS * deg2rad(point.lng),
		y: EARTH_RADIUS * (FRAC_PI_4 + deg2rad(point.lat) / 2.0).tan().ln(),
	}
}

/// Inverse of [`to_mercator`]: Spherical Mercator meters back to degrees.
pub fn from_mercator(point: &XY) -> LngLat {
	LngLat {
		lng: rad2deg(point.x / EARTH_RADIUS),
		lat: rad2deg(2.0 * (point.y / EARTH_RADIUS).exp().atan() - FRAC_PI_2),
	}
}
