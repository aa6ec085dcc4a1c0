//! Resolving points and bounding boxes to tiles.

mod bbox;
pub use bbox::*;

mod point;
pub use point::*;

mod quadkey;
