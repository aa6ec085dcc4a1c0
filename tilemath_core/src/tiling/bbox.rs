use crate::{LngLatBbox, Tile, config::BBoxSearch, point_to_fractional_tile};

/// Smallest single tile that contains the whole bounding box.
///
/// Both corners are floored at zoom level 32, without the edge snapping of
/// [`point_to_tile`](crate::point_to_tile), and the result is the deepest level (at most 28)
/// on which their column and row indices still share every leading bit. A box that straddles
/// the first split of the pyramid resolves to the root tile.
///
/// Inverted boxes (`west > east` or `south > north`) are not rejected; they yield the tile
/// enclosing the same two corners.
///
/// # Examples
/// ```
/// use tilemath_core::{LngLatBbox, Tile, bbox_to_tile};
///
/// let bbox = LngLatBbox::new(-10.0, -10.0, 10.0, 10.0);
/// assert_eq!(bbox_to_tile(&bbox), Tile::new(0, 0, 0));
/// ```
pub fn bbox_to_tile(bbox: &LngLatBbox) -> Tile {
	bbox_to_tile_with(bbox, &BBoxSearch::default())
}

/// [`bbox_to_tile`] with explicit search parameters.
pub fn bbox_to_tile_with(bbox: &LngLatBbox, search: &BBoxSearch) -> Tile {
	let min = point_to_fractional_tile(&bbox.min(), search.precision).floor();
	let max = point_to_fractional_tile(&bbox.max(), search.precision).floor();

	let z = common_prefix_level(&min, &max, search);
	log::trace!("bbox {bbox:?}: corners {min:?} and {max:?} share {z} leading bits");

	if z == 0 {
		return Tile::new(0, 0, 0);
	}
	let shift = search.precision - z;
	Tile::new(z, min.x >> shift, min.y >> shift)
}

/// Number of leading bits (out of `precision`) on which both corner tiles agree in x and y,
/// capped at `max_level`.
fn common_prefix_level(min: &Tile, max: &Tile, search: &BBoxSearch) -> u8 {
	let mask = (1u64 << search.precision) - 1;
	let diff = (((min.x ^ max.x) | (min.y ^ max.y)) as u64) & mask;
	if diff == 0 {
		return search.max_level;
	}
	let highest_bit = 63 - diff.leading_zeros() as u8;
	(search.precision - 1 - highest_bit).min(search.max_level)
}
