//! Bing Maps style quadkeys: one base-4 digit per zoom level, most significant first.

use crate::{Tile, constants::MAX_LEVEL};
use anyhow::{Result, bail, ensure};
use tilemath_derive::context;

impl Tile {
	/// Encodes the tile as a quadkey. The root tile encodes to an empty string.
	///
	/// Levels beyond 32 are not encoded, matching what [`Tile::from_quadkey`] accepts.
	///
	/// # Examples
	/// ```
	/// use tilemath_core::Tile;
	///
	/// assert_eq!(Tile::new(3, 3, 5).to_quadkey(), "213");
	/// ```
	#[must_use]
	pub fn to_quadkey(&self) -> String {
		(1..=self.z.min(MAX_LEVEL))
			.rev()
			.map(|level| {
				let mask = 1i64 << (level - 1);
				let digit = u8::from(self.x & mask != 0) + 2 * u8::from(self.y & mask != 0);
				char::from(b'0' + digit)
			})
			.collect()
	}

	/// Decodes a quadkey; its length is the zoom level.
	#[context("Invalid quadkey '{quadkey}'")]
	pub fn from_quadkey(quadkey: &str) -> Result<Tile> {
		ensure!(
			quadkey.len() <= usize::from(MAX_LEVEL),
			"length {} exceeds {MAX_LEVEL}",
			quadkey.len()
		);
		let mut tile = Tile::new(0, 0, 0);
		for c in quadkey.chars() {
			let (dx, dy) = match c {
				'0' => (0, 0),
				'1' => (1, 0),
				'2' => (0, 1),
				'3' => (1, 1),
				_ => bail!("unexpected character {c:?}"),
			};
			tile = Tile::new(tile.z + 1, tile.x * 2 + dx, tile.y * 2 + dy);
		}
		Ok(tile)
	}
}
