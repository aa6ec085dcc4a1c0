//! Tile pyramid math for web maps.
//!
//! Converts between geographic coordinates in degrees ([`LngLat`], [`LngLatBbox`]), XYZ tile
//! addresses ([`Tile`]) and Spherical Mercator meters ([`XY`], [`Bbox`]). Every function is pure
//! and works on plain values, so it can be called from any thread without coordination.
//!
//! Inputs are not validated: out-of-range latitudes, inverted boxes or tiles outside their grid
//! produce mathematically degenerate results rather than errors. [`Tile::try_new`] and the
//! parsers are the only fallible entry points.
//!
//! ```
//! use tilemath_core::{LngLat, Tile, point_to_tile};
//!
//! let tile = point_to_tile(&LngLat::new(20.6852, 40.1222), 9);
//! assert_eq!(tile, Tile::new(9, 285, 193));
//! assert_eq!(tile.to_string(), "9/285/193");
//! ```

pub mod config;
pub mod constants;
pub mod projection;
pub mod tiling;
pub mod types;

pub use config::BBoxSearch;
pub use projection::{deg2rad, from_mercator, rad2deg, to_mercator};
pub use tiling::*;
pub use types::*;
