use crate::Tile;
use std::fmt::{self, Debug};

/// A tile position before truncation: `x` and `y` carry the offset inside the tile.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct TileFraction {
	pub x: f64,
	pub y: f64,
	pub z: u8,
}

impl TileFraction {
	/// Truncates to the tile that contains this position.
	///
	/// Values that are not finite saturate instead of panicking (NaN becomes 0).
	#[must_use]
	pub fn floor(&self) -> Tile {
		Tile::new(self.z, self.x.floor() as i64, self.y.floor() as i64)
	}
}

impl Debug for TileFraction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileFraction({}, [{}, {}])", self.z, self.x, self.y)
	}
}
