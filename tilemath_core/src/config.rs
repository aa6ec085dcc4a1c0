//! Parameters of the bounding box to tile search.

use crate::constants::{BBOX_MAX_LEVEL, BBOX_PRECISION_LEVEL};
use anyhow::{Result, ensure};
use tilemath_derive::context;

/// Controls how [`bbox_to_tile_with`](crate::bbox_to_tile_with) resolves a bounding box.
///
/// Both corners are resolved to tiles at `precision`, then the search looks for the lowest
/// level at which they fall apart, never going beyond `max_level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BBoxSearch {
	pub(crate) precision: u8,
	pub(crate) max_level: u8,
}

impl BBoxSearch {
	#[context("Invalid bbox search parameters (precision {precision}, max level {max_level})")]
	pub fn new(precision: u8, max_level: u8) -> Result<BBoxSearch> {
		ensure!(precision >= 1, "precision must be >= 1");
		ensure!(
			precision <= BBOX_PRECISION_LEVEL,
			"precision ({precision}) must be <= {BBOX_PRECISION_LEVEL}"
		);
		ensure!(
			max_level <= precision,
			"max_level ({max_level}) must be <= precision ({precision})"
		);
		Ok(BBoxSearch { precision, max_level })
	}

	pub fn precision(&self) -> u8 {
		self.precision
	}

	pub fn max_level(&self) -> u8 {
		self.max_level
	}
}

impl Default for BBoxSearch {
	fn default() -> Self {
		Self {
			precision: BBOX_PRECISION_LEVEL,
			max_level: BBOX_MAX_LEVEL,
		}
	}
}
