use crate::{Tile, TileFraction, XY, point_to_fractional_tile, point_to_tile, to_mercator};
use std::fmt::{self, Debug};

/// A geographic point in decimal degrees (WGS84).
///
/// No range validation is performed. Longitudes outside `[-180, 180]` wrap when converted to
/// tiles, latitudes beyond [`MAX_LAT`](crate::constants::MAX_LAT) leave the tile grid.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct LngLat {
	/// Longitude in degrees, positive east.
	pub lng: f64,
	/// Latitude in degrees, positive north.
	pub lat: f64,
}

impl LngLat {
	pub const fn new(lng: f64, lat: f64) -> LngLat {
		LngLat { lng, lat }
	}

	/// Projects this point to Spherical Mercator meters.
	#[must_use]
	pub fn to_mercator(&self) -> XY {
		to_mercator(self)
	}

	/// Returns the tile containing this point at zoom level `z`.
	#[must_use]
	pub fn to_tile(&self, z: u8) -> Tile {
		point_to_tile(self, z)
	}

	/// Returns the fractional tile position of this point at zoom level `z`.
	#[must_use]
	pub fn to_tile_fraction(&self, z: u8) -> TileFraction {
		point_to_fractional_tile(self, z)
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		[self.lng, self.lat]
	}
}

impl From<[f64; 2]> for LngLat {
	fn from(value: [f64; 2]) -> Self {
		LngLat::new(value[0], value[1])
	}
}

impl From<(f64, f64)> for LngLat {
	fn from((lng, lat): (f64, f64)) -> Self {
		LngLat::new(lng, lat)
	}
}

impl Debug for LngLat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "LngLat({}, {})", self.lng, self.lat)
	}
}
