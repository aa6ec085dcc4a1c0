use crate::{LngLat, from_mercator};
use std::fmt::{self, Debug};

/// A point in Spherical Mercator (EPSG:3857) meters.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct XY {
	pub x: f64,
	pub y: f64,
}

impl XY {
	pub const fn new(x: f64, y: f64) -> XY {
		XY { x, y }
	}

	/// Unprojects this point back to degrees.
	#[must_use]
	pub fn to_lng_lat(&self) -> LngLat {
		from_mercator(self)
	}
}

impl Debug for XY {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "XY({}, {})", self.x, self.y)
	}
}

/// A bounding box in Spherical Mercator meters.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Bbox {
	pub left: f64,
	pub bottom: f64,
	pub right: f64,
	pub top: f64,
}

impl Bbox {
	pub const fn new(left: f64, bottom: f64, right: f64, top: f64) -> Bbox {
		Bbox {
			left,
			bottom,
			right,
			top,
		}
	}

	/// Builds the box spanned by a south-west and a north-east corner.
	pub fn from_corners(min: XY, max: XY) -> Bbox {
		Bbox::new(min.x, min.y, max.x, max.y)
	}

	/// Returns `[left, bottom, right, top]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.left, self.bottom, self.right, self.top]
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.top - self.bottom
	}
}

impl Debug for Bbox {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Bbox({}, {}, {}, {})", self.left, self.bottom, self.right, self.top)
	}
}
