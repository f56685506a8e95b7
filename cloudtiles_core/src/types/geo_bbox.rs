//! A geographical bounding box in longitude/latitude degrees.

use std::fmt::Debug;

/// A rectangular area on the map, defined by its minimum and maximum
/// longitude (x) and latitude (y) coordinates.
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	/// Minimum longitude (west).
	pub x_min: f64,
	/// Minimum latitude (south).
	pub y_min: f64,
	/// Maximum longitude (east).
	pub x_max: f64,
	/// Maximum latitude (north).
	pub y_max: f64,
}

impl GeoBBox {
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> GeoBBox {
		GeoBBox {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// Builds a bounding box from the projected north-west and south-east
	/// corner positions, each given as `[longitude, latitude]`.
	#[must_use]
	pub fn from_corners(north_west: [f64; 2], south_east: [f64; 2]) -> GeoBBox {
		GeoBBox {
			x_min: north_west[0],
			y_min: south_east[1],
			x_max: south_east[0],
			y_max: north_west[1],
		}
	}

	/// Returns the bounding box as `[west, south, east, north]`.
	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Returns the bounding box as a tuple `(west, south, east, north)`.
	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
