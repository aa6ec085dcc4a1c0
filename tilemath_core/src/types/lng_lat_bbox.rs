use crate::{Bbox, LngLat, Tile, bbox_to_tile, to_mercator};
use anyhow::{Result, ensure};
use std::fmt::{self, Debug};
use tilemath_derive::context;

/// A geographic bounding box in decimal degrees, ordered `west, south, east, north`.
///
/// `west < east` and `south < north` are expected but not enforced, so a tile's extent and an
/// arbitrary query region share the same type.
///
/// # Examples
/// ```
/// use tilemath_core::{LngLatBbox, Tile};
///
/// let bbox = LngLatBbox::new(-77.04615354537964, 38.899967510782346, -77.03664779663086, 38.90728142481329);
/// assert_eq!(bbox.to_tile(), Tile::new(15, 9371, 12534));
/// ```
#[derive(Clone, Copy, PartialEq, Default)]
pub struct LngLatBbox {
	pub west: f64,
	pub south: f64,
	pub east: f64,
	pub north: f64,
}

impl LngLatBbox {
	pub const fn new(west: f64, south: f64, east: f64, north: f64) -> LngLatBbox {
		LngLatBbox {
			west,
			south,
			east,
			north,
		}
	}

	/// South-west corner.
	#[must_use]
	pub fn min(&self) -> LngLat {
		LngLat::new(self.west, self.south)
	}

	/// North-east corner.
	#[must_use]
	pub fn max(&self) -> LngLat {
		LngLat::new(self.east, self.north)
	}

	/// Returns `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}

	/// Smallest single tile that encloses this box. See [`bbox_to_tile`].
	#[must_use]
	pub fn to_tile(&self) -> Tile {
		bbox_to_tile(self)
	}

	/// Projects both corners to Spherical Mercator meters.
	#[must_use]
	pub fn to_mercator(&self) -> Bbox {
		Bbox::from_corners(to_mercator(&self.min()), to_mercator(&self.max()))
	}
}

impl Debug for LngLatBbox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "LngLatBbox({}, {}, {}, {})", self.west, self.south, self.east, self.north)
	}
}

impl From<[f64; 4]> for LngLatBbox {
	fn from(value: [f64; 4]) -> Self {
		LngLatBbox::new(value[0], value[1], value[2], value[3])
	}
}

impl TryFrom<Vec<f64>> for LngLatBbox {
	type Error = anyhow::Error;

	/// Builds a box from exactly four values `[west, south, east, north]`.
	#[context("Failed to convert {input:?} to LngLatBbox")]
	fn try_from(input: Vec<f64>) -> Result<Self> {
		ensure!(
			input.len() == 4,
			"bbox must have 4 elements (west, south, east, north), got {}",
			input.len()
		);
		Ok(LngLatBbox::new(input[0], input[1], input[2], input[3]))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	#[test]
	fn corners_and_array() {
		let bbox = LngLatBbox::new(-10.0, -5.0, 10.0, 5.0);
		assert_eq!(bbox.min(), LngLat::new(-10.0, -5.0));
		assert_eq!(bbox.max(), LngLat::new(10.0, 5.0));
		assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
		assert_eq!(LngLatBbox::from(bbox.as_array()), bbox);
	}

	#[test]
	fn try_from_vec() -> Result<()> {
		let bbox = LngLatBbox::try_from(vec![1.0, 2.0, 3.0, 4.0])?;
		assert_eq!(bbox.as_array(), [1.0, 2.0, 3.0, 4.0]);
		Ok(())
	}

	#[test]
	fn try_from_vec_wrong_length() {
		let err = LngLatBbox::try_from(vec![1.0, 2.0, 3.0]).unwrap_err();
		let message = format!("{err:#}");
		assert!(message.contains("Failed to convert [1.0, 2.0, 3.0] to LngLatBbox"), "{message}");
		assert!(message.contains("got 3"), "{message}");
	}

	#[test]
	fn inverted_boxes_are_accepted() {
		let bbox = LngLatBbox::new(10.0, 5.0, -10.0, -5.0);
		assert_eq!(bbox.as_array(), [10.0, 5.0, -10.0, -5.0]);
	}

	#[test]
	fn debug_format() {
		assert_eq!(
			format!("{:?}", LngLatBbox::new(-10.0, -5.0, 10.0, 5.0)),
			"LngLatBbox(-10, -5, 10, 5)"
		);
	}

	#[test]
	fn mercator_midlat() {
		let bbox = LngLatBbox::new(-10.0, 40.0, 10.0, 50.0).to_mercator();
		assert_eq!(bbox.left as i64, -1_113_194);
		assert_eq!(bbox.right as i64, 1_113_194);
		assert_eq!(bbox.bottom as i64, 4_865_942);
		assert_eq!(bbox.top as i64, 6_446_275);
		assert_abs_diff_eq!(bbox.left, -bbox.right, epsilon = 1e-9);
	}
}
