//! This module defines the [`TileCoord`] struct, the address of a tile (or a
//! block) in the slippy map scheme: zoom level `z`, column `x` and row `y`,
//! with the origin in the north-west corner.
//!
//! The same type addresses both tiles and 256x256 tile blocks, since block
//! coordinates are just tile coordinates divided by 256.

use std::{
	f64::consts::PI,
	fmt::{self, Debug},
};

/// A tile or block address as zoom level, column and row.
///
/// Ordering is derived from the field order, so sorted collections keyed by
/// `TileCoord` order their entries by zoom level first, then column, then row.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TileCoord {
	pub z: u8,
	pub x: u32,
	pub y: u32,
}

impl TileCoord {
	#[must_use]
	pub fn new(z: u8, x: u32, y: u32) -> TileCoord {
		TileCoord { z, x, y }
	}

	/// Returns the geographic position of this tile's north-west corner as
	/// `[longitude, latitude]` in degrees, using the inverse Web Mercator
	/// projection.
	#[must_use]
	pub fn as_geo(&self) -> [f64; 2] {
		TileCoord::position_as_geo(self.z, u64::from(self.x), u64::from(self.y))
	}

	/// Projects the absolute tile position `(x, y)` at zoom level `level` to
	/// `[longitude, latitude]` in degrees.
	///
	/// The position is taken as u64 so that outer tile edges (one past the
	/// last column or row of a level) can be projected even where they no
	/// longer fit a tile coordinate.
	#[must_use]
	pub fn position_as_geo(level: u8, x: u64, y: u64) -> [f64; 2] {
		let zoom: f64 = 2.0f64.powi(i32::from(level));

		[
			(x as f64 / zoom - 0.5) * 360.0,
			((PI * (1.0 - 2.0 * y as f64 / zoom)).exp().atan() / PI - 0.25) * 360.0,
		]
	}
}

impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord({}, {}, {})", &self.z, &self.x, &self.y))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cmp::Ordering;

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", TileCoord::new(3, 1, 2)), "TileCoord(3, 1, 2)");
	}

	#[test]
	fn partial_eq() {
		let c = TileCoord::new(2, 2, 2);
		assert!(c.eq(&c));
		assert!(c.ne(&TileCoord::new(1, 2, 2)));
		assert!(c.ne(&TileCoord::new(2, 1, 2)));
		assert!(c.ne(&TileCoord::new(2, 2, 1)));
	}

	#[test]
	fn orders_by_zoom_then_column_then_row() {
		let check = |z: u8, x: u32, y: u32, order: Ordering| {
			let c1 = TileCoord::new(2, 2, 2);
			let c2 = TileCoord::new(z, x, y);
			assert_eq!(c2.cmp(&c1), order);
		};

		check(1, 9, 9, Ordering::Less);
		check(2, 1, 9, Ordering::Less);
		check(2, 2, 1, Ordering::Less);
		check(2, 2, 2, Ordering::Equal);
		check(2, 2, 3, Ordering::Greater);
		check(2, 3, 0, Ordering::Greater);
		check(3, 0, 0, Ordering::Greater);
	}

	#[test]
	fn as_geo() {
		// Longitudes are exact in binary floating point.
		let nw = TileCoord::new(0, 0, 0).as_geo();
		assert_eq!(nw[0], -180.0);
		assert!((nw[1] - 85.05112877980659).abs() < 1e-9);

		let se = TileCoord::new(0, 1, 1).as_geo();
		assert_eq!(se[0], 180.0);
		assert!((se[1] + 85.05112877980659).abs() < 1e-9);

		let geo = TileCoord::new(5, 3, 4).as_geo();
		assert_eq!(geo[0], -146.25);
		assert!((geo[1] - 79.17133464081945).abs() < 1e-9);

		// The equator maps to latitude zero.
		let equator = TileCoord::new(1, 1, 1).as_geo();
		assert_eq!(equator[0], 0.0);
		assert!(equator[1].abs() < 1e-12);
	}

	#[test]
	fn projects_positions_beyond_u32() {
		// The south-east edge of the last tile at level 32 is position 2^32.
		let se = TileCoord::position_as_geo(32, 1 << 32, 1 << 32);
		assert_eq!(se[0], 180.0);
		assert!((se[1] + 85.05112877980659).abs() < 1e-9);
	}
}
