//! XYZ tile addresses and their geographic extent.
//!
//! A [`Tile`] names one cell of the `2^z × 2^z` grid at zoom level `z`, with `x` growing east
//! and `y` growing south. The type is a plain value: constructing one does not validate it,
//! use [`Tile::try_new`] or [`Tile::is_valid`] where a valid tile is required.
//!
//! # Examples
//!
//! ```
//! use tilemath_core::Tile;
//!
//! let tile = Tile::new(10, 486, 332);
//! assert_eq!(tile.parent(), Tile::new(9, 243, 166));
//! assert!(tile.parent().children().contains(&tile));
//!
//! let bounds = tile.bounds();
//! assert!(bounds.west < bounds.east && bounds.south < bounds.north);
//! ```

use crate::{Bbox, LngLat, LngLatBbox, constants::MAX_LEVEL, projection::rad2deg, to_mercator};
use anyhow::{Context, Result, ensure};
use std::{
	cmp::Ordering,
	f64::consts::PI,
	fmt::{self, Debug, Display},
	str::FromStr,
};
use tilemath_derive::context;

/// A tile in an XYZ tile pyramid.
#[derive(Eq, PartialEq, Clone, Hash, Copy, Default)]
pub struct Tile {
	/// Column, 0 at the antimeridian (-180°).
	pub x: i64,
	/// Row, 0 at the northern edge of the projection.
	pub y: i64,
	/// Zoom level.
	pub z: u8,
}

impl Tile {
	/// Creates a tile without checking that `x` and `y` fit the grid at level `z`.
	pub const fn new(z: u8, x: i64, y: i64) -> Tile {
		Tile { x, y, z }
	}

	/// Creates a tile, failing unless `z <= 32` and `0 <= x, y < 2^z`.
	#[context("Invalid tile {z}/{x}/{y}")]
	pub fn try_new(z: u8, x: i64, y: i64) -> Result<Tile> {
		ensure!(z <= MAX_LEVEL, "z ({z}) must be <= {MAX_LEVEL}");
		let max = 1i64 << z;
		ensure!((0..max).contains(&x), "x ({x}) out of bounds for level {z}");
		ensure!((0..max).contains(&y), "y ({y}) out of bounds for level {z}");
		Ok(Tile { x, y, z })
	}

	/// Whether `x` and `y` lie inside the grid at this tile's zoom level.
	pub fn is_valid(&self) -> bool {
		if self.z > MAX_LEVEL {
			return false;
		}
		let max = 1i64 << self.z;
		(0..max).contains(&self.x) && (0..max).contains(&self.y)
	}

	/// Field-wise equality, the same as `==`.
	pub fn equals(&self, other: &Tile) -> bool {
		self.x == other.x && self.y == other.y && self.z == other.z
	}

	/// Northwest corner of the tile in degrees.
	#[must_use]
	pub fn upper_left(&self) -> LngLat {
		let n = 2.0f64.powi(i32::from(self.z));
		let lng = self.x as f64 / n * 360.0 - 180.0;
		let lat = rad2deg((PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan());
		LngLat::new(lng, lat)
	}

	/// Geographic extent of the tile.
	///
	/// The southeast corner is the northwest corner of the diagonal neighbour `(x + 1, y + 1)`.
	/// Both corners are unprojected separately because latitude is not linear in `y`.
	#[must_use]
	pub fn bounds(&self) -> LngLatBbox {
		let nw = self.upper_left();
		let se = Tile::new(self.z, self.x + 1, self.y + 1).upper_left();
		LngLatBbox::new(nw.lng, se.lat, se.lng, nw.lat)
	}

	/// Extent of the tile in Spherical Mercator meters.
	#[must_use]
	pub fn bounds_mercator(&self) -> Bbox {
		let bounds = self.bounds();
		Bbox::from_corners(to_mercator(&bounds.min()), to_mercator(&bounds.max()))
	}

	/// The tile one level up that contains this one.
	///
	/// Tiles at level 0 are returned unchanged, so `Tile::new(0, 0, 0)` is its own parent.
	/// Check `z == 0` to stop when walking up the pyramid.
	#[must_use]
	pub fn parent(&self) -> Tile {
		if self.z == 0 {
			return *self;
		}
		Tile::new(self.z - 1, self.x.div_euclid(2), self.y.div_euclid(2))
	}

	/// The four tiles one level down, in the order top-left, top-right, bottom-right, bottom-left.
	///
	/// The level saturates at 255.
	#[must_use]
	pub fn children(&self) -> [Tile; 4] {
		let (x, y, z) = (self.x * 2, self.y * 2, self.z.saturating_add(1));
		[
			Tile::new(z, x, y),
			Tile::new(z, x + 1, y),
			Tile::new(z, x + 1, y + 1),
			Tile::new(z, x, y + 1),
		]
	}
}

#[context("Failed to parse tile path '{input}'")]
fn parse_tile_path(input: &str) -> Result<Tile> {
	let parts: Vec<&str> = input.trim().trim_matches('/').split('/').collect();
	ensure!(parts.len() == 3, "expected 'z/x/y', got {} part(s)", parts.len());
	let z = parts[0].parse::<u8>().with_context(|| format!("invalid zoom level '{}'", parts[0]))?;
	let x = parts[1].parse::<i64>().with_context(|| format!("invalid column '{}'", parts[1]))?;
	let y = parts[2].parse::<i64>().with_context(|| format!("invalid row '{}'", parts[2]))?;
	Tile::try_new(z, x, y)
}

/// Parses the `z/x/y` form used in tile URLs. Only valid tiles are accepted.
impl FromStr for Tile {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		parse_tile_path(s).inspect_err(|err| log::debug!("rejected tile path {s:?}: {err:#}"))
	}
}

/// Formats as `z/x/y`.
impl Display for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}/{}", self.z, self.x, self.y)
	}
}

/// Compact `Tile(z, [x, y])` form.
impl Debug for Tile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tile({}, [{}, {}])", self.z, self.x, self.y)
	}
}

/// Ordered by zoom level, then `y`, then `x`.
impl Ord for Tile {
	fn cmp(&self, other: &Self) -> Ordering {
		self.z
			.cmp(&other.z)
			.then_with(|| self.y.cmp(&other.y))
			.then_with(|| self.x.cmp(&other.x))
	}
}

impl PartialOrd for Tile {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::cmp::Ordering::*;

	const IRISH_TILE: Tile = Tile::new(10, 486, 332);

	#[test]
	fn upper_left() {
		let ul = IRISH_TILE.upper_left();
		assert_abs_diff_eq!(ul.lng, -9.140625, epsilon = 1e-8);
		assert_abs_diff_eq!(ul.lat, 53.33087298301705, epsilon = 1e-8);
	}

	#[test]
	fn bounds() {
		let bounds = IRISH_TILE.bounds();
		assert_abs_diff_eq!(bounds.west, -9.140625, epsilon = 1e-8);
		assert_abs_diff_eq!(bounds.south, 53.120405283106564, epsilon = 1e-8);
		assert_abs_diff_eq!(bounds.east, -8.7890625, epsilon = 1e-8);
		assert_abs_diff_eq!(bounds.north, 53.33087298301705, epsilon = 1e-8);
	}

	#[test]
	fn bounds_of_root_cover_the_projection() {
		let bounds = Tile::new(0, 0, 0).bounds();
		assert_eq!(bounds.west, -180.0);
		assert_eq!(bounds.east, 180.0);
		assert_abs_diff_eq!(bounds.north, crate::constants::MAX_LAT, epsilon = 1e-10);
		assert_abs_diff_eq!(bounds.south, -crate::constants::MAX_LAT, epsilon = 1e-10);
	}

	#[test]
	fn bounds_mercator_truncated() {
		let bbox = Tile::new(2, 0, 0).bounds_mercator();
		assert_eq!(
			[bbox.left as i64, bbox.bottom as i64, bbox.right as i64, bbox.top as i64],
			[-20037508, 10018754, -10018754, 20037508]
		);
	}

	#[rstest]
	#[case(Tile::new(10, 486, 332), Tile::new(9, 243, 166))]
	#[case(Tile::new(10, 487, 332), Tile::new(9, 243, 166))]
	#[case(Tile::new(10, 486, 333), Tile::new(9, 243, 166))]
	#[case(Tile::new(10, 487, 333), Tile::new(9, 243, 166))]
	#[case(Tile::new(1, 1, 1), Tile::new(0, 0, 0))]
	#[case(Tile::new(0, 0, 0), Tile::new(0, 0, 0))]
	fn parent(#[case] tile: Tile, #[case] expected: Tile) {
		assert_eq!(tile.parent(), expected);
	}

	#[test]
	fn children() {
		let children = Tile::new(9, 246, 166).children();
		assert!(children.contains(&Tile::new(10, 492, 332)));
		assert_eq!(
			children,
			[
				Tile::new(10, 492, 332),
				Tile::new(10, 493, 332),
				Tile::new(10, 493, 333),
				Tile::new(10, 492, 333),
			]
		);
		for child in children {
			assert_eq!(child.parent(), Tile::new(9, 246, 166));
		}
	}

	#[test]
	fn children_at_highest_level_do_not_overflow() {
		let children = Tile::new(u8::MAX, 0, 0).children();
		assert!(children.iter().all(|child| child.z == u8::MAX));
		assert_eq!(children[2], Tile::new(u8::MAX, 1, 1));
	}

	#[test]
	fn equals() {
		let c = Tile::new(2, 2, 2);
		assert!(c.equals(&c));
		assert!(c.equals(&Tile::new(2, 2, 2)));
		assert!(!c.equals(&Tile::new(3, 2, 2)));
		assert!(!c.equals(&Tile::new(2, 3, 2)));
		assert!(!c.equals(&Tile::new(2, 2, 3)));
	}

	#[rstest]
	#[case(0, 0, 0, true)]
	#[case(2, 3, 3, true)]
	#[case(2, 4, 0, false)]
	#[case(2, 0, -1, false)]
	#[case(33, 0, 0, false)]
	fn validity(#[case] z: u8, #[case] x: i64, #[case] y: i64, #[case] valid: bool) {
		let tile = Tile::new(z, x, y);
		assert_eq!(tile.is_valid(), valid);
		assert_eq!(Tile::try_new(z, x, y).is_ok(), valid);
	}

	#[test]
	fn try_new_error_message() {
		let err = Tile::try_new(3, 8, 1).unwrap_err();
		assert_eq!(
			format!("{err:#}"),
			"Invalid tile 3/8/1: x (8) out of bounds for level 3"
		);
	}

	#[rstest]
	#[case("10/486/332", Tile::new(10, 486, 332))]
	#[case("/0/0/0/", Tile::new(0, 0, 0))]
	#[case(" 15/9371/12534 ", Tile::new(15, 9371, 12534))]
	fn parse(#[case] input: &str, #[case] expected: Tile) -> Result<()> {
		assert_eq!(input.parse::<Tile>()?, expected);
		Ok(())
	}

	#[rstest]
	#[case("10/486")]
	#[case("a/1/1")]
	#[case("1/x/1")]
	#[case("1/1/2")]
	#[case("1/2/3/4")]
	fn parse_errors(#[case] input: &str) {
		let err = input.parse::<Tile>().unwrap_err();
		assert!(
			format!("{err:#}").starts_with(&format!("Failed to parse tile path '{input}'")),
			"{err:#}"
		);
	}

	#[test]
	fn display_and_debug() {
		assert_eq!(IRISH_TILE.to_string(), "10/486/332");
		assert_eq!(format!("{IRISH_TILE:?}"), "Tile(10, [486, 332])");
		assert_eq!(IRISH_TILE.to_string().parse::<Tile>().unwrap(), IRISH_TILE);
	}

	#[rstest]
	#[case(1, 1, 1, Less)]
	#[case(2, 1, 2, Less)]
	#[case(2, 1, 3, Greater)]
	#[case(2, 2, 2, Equal)]
	#[case(2, 3, 2, Greater)]
	#[case(3, 0, 0, Greater)]
	fn ordering(#[case] z: u8, #[case] x: i64, #[case] y: i64, #[case] expected: Ordering) {
		assert_eq!(Tile::new(z, x, y).cmp(&Tile::new(2, 2, 2)), expected);
	}
}
