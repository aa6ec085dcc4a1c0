use crate::{LngLat, Tile, TileFraction, constants::TILE_EDGE_TOLERANCE, projection::deg2rad};
use std::f64::consts::PI;

/// Fractional tile position of `point` at zoom level `z`.
///
/// The column wraps into `[0, 2^z)`, so longitudes past the antimeridian land on the
/// same column as their counterpart within `[-180, 180)`. The row is left as computed:
/// latitudes beyond the Mercator limit (about ±85.0511°) give rows outside `[0, 2^z)`,
/// and exactly ±90° gives an infinite row.
pub fn point_to_fractional_tile(point: &LngLat, z: u8) -> TileFraction {
	let sin = deg2rad(point.lat).sin();
	let n = 2.0f64.powi(i32::from(z));
	let x = n * (point.lng / 360.0 + 0.5);
	let y = n * (0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI);

	TileFraction {
		x: x.rem_euclid(n),
		y,
		z,
	}
}

/// Tile that contains `point` at zoom level `z`.
///
/// Positions within [`TILE_EDGE_TOLERANCE`] of the world width below a tile edge are snapped
/// onto that edge, so the northwest corner of a tile resolves back to the tile itself.
///
/// # Examples
/// ```
/// use tilemath_core::{LngLat, Tile, point_to_tile};
///
/// assert_eq!(point_to_tile(&LngLat::new(20.6852, 40.1222), 9), Tile::new(9, 285, 193));
/// ```
pub fn point_to_tile(point: &LngLat, z: u8) -> Tile {
	let fraction = point_to_fractional_tile(point, z);
	let n = 2.0f64.powi(i32::from(z));
	let snap = TILE_EDGE_TOLERANCE * n;

	let mut x = fraction.x + snap;
	if x >= n {
		x -= n;
	}
	TileFraction {
		x,
		y: fraction.y + snap,
		z,
	}
	.floor()
}

/// Same as [`point_to_tile`] for raw longitude and latitude values.
pub fn tile_from_point(lng: f64, lat: f64, z: u8) -> Tile {
	point_to_tile(&LngLat::new(lng, lat), z)
}
