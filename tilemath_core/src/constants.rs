//! Geographic and Web Mercator constants.

use std::f64::consts::PI;

/// WGS84 semi-major axis (equatorial radius) in meters, the Web Mercator sphere radius.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half of the Web Mercator world width in meters (`PI * EARTH_RADIUS`).
pub const MERCATOR_HALF_WORLD: f64 = PI * EARTH_RADIUS;

/// Maximum latitude in degrees that the Web Mercator projection can represent.
///
/// Equals `atan(sinh(PI))` in degrees. Points beyond it map to rows outside the tile grid.
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Zoom level at which the corners of a bounding box are resolved before the common prefix search.
pub const BBOX_PRECISION_LEVEL: u8 = 32;

/// Highest zoom level returned by the bounding box search.
pub const BBOX_MAX_LEVEL: u8 = 28;

/// Highest zoom level accepted by checked constructors and quadkeys.
pub const MAX_LEVEL: u8 = 32;

/// Distance below a tile edge, as a fraction of the world width, that still counts as the edge.
///
/// Absorbs the rounding error of unprojecting and reprojecting a tile corner.
pub const TILE_EDGE_TOLERANCE: f64 = 1e-14;
