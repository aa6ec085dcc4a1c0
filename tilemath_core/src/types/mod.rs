//! Value types: tiles, geographic points and boxes, Mercator points and boxes.

mod lng_lat;
pub use lng_lat::*;

mod lng_lat_bbox;
pub use lng_lat_bbox::*;

mod mercator;
pub use mercator::*;

mod tile;
pub use tile::*;

mod tile_fraction;
pub use tile_fraction::*;
