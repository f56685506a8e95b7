//! This module defines the `BlockDefinition` struct: one record of the
//! block index, describing a block of up to 256x256 tiles and where to find
//! the block's tile index section.

use cloudtiles_core::{io::*, *};
use std::fmt;

/// A block of tiles within the archive.
///
/// `level`, `column` and `row` address the block itself (block coordinates
/// are tile coordinates divided by 256). `col_min` through `row_max`
/// describe the populated sub-rectangle in tile-within-block coordinates,
/// both ends inclusive.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockDefinition {
	pub level: u8,
	pub column: u32,
	pub row: u32,
	pub col_min: u8,
	pub row_min: u8,
	pub col_max: u8,
	pub row_max: u8,
	pub tile_index_range: ByteRange,
}

impl BlockDefinition {
	/// Decodes one 29-byte block index record.
	///
	/// # Errors
	///
	/// Returns a [`Error::Format`] if the buffer runs out before the record
	/// is complete.
	pub fn from_slice(slice: &[u8]) -> Result<BlockDefinition> {
		let mut reader = ValueReaderSlice::new_be(slice);

		let level = reader.read_u8()?;
		let column = reader.read_u32()?;
		let row = reader.read_u32()?;
		let col_min = reader.read_u8()?;
		let row_min = reader.read_u8()?;
		let col_max = reader.read_u8()?;
		let row_max = reader.read_u8()?;
		let tile_index_range = reader.read_range()?;

		Ok(BlockDefinition {
			level,
			column,
			row,
			col_min,
			row_min,
			col_max,
			row_max,
			tile_index_range,
		})
	}

	/// Encodes the record back into its 29-byte wire form.
	#[must_use]
	pub fn to_blob(&self) -> Blob {
		let mut writer = ValueWriterBlob::new_be();
		writer.write_u8(self.level);
		writer.write_u32(self.column);
		writer.write_u32(self.row);
		writer.write_u8(self.col_min);
		writer.write_u8(self.row_min);
		writer.write_u8(self.col_max);
		writer.write_u8(self.row_max);
		writer.write_range(&self.tile_index_range);
		writer.into_blob()
	}

	/// Returns `false` for placeholder records whose sub-rectangle is
	/// inverted. Such records carry no tiles and are dropped at load time.
	#[must_use]
	pub fn is_valid(&self) -> bool {
		self.col_max >= self.col_min && self.row_max >= self.row_min
	}

	/// The block coordinate this record is keyed by.
	#[must_use]
	pub fn coord(&self) -> TileCoord {
		TileCoord::new(self.level, self.column, self.row)
	}

	fn width(&self) -> u64 {
		u64::from(self.col_max) - u64::from(self.col_min) + 1
	}

	fn height(&self) -> u64 {
		u64::from(self.row_max) - u64::from(self.row_min) + 1
	}

	/// The number of records in this block's tile index.
	#[must_use]
	pub fn count_tiles(&self) -> u64 {
		self.width() * self.height()
	}

	#[must_use]
	pub fn contains_column(&self, tile_x: u8) -> bool {
		(self.col_min..=self.col_max).contains(&tile_x)
	}

	#[must_use]
	pub fn contains_row(&self, tile_y: u8) -> bool {
		(self.row_min..=self.row_max).contains(&tile_y)
	}

	/// Position of `(tile_x, tile_y)` in the row-major enumeration of the
	/// populated sub-rectangle. Only meaningful for positions inside the
	/// sub-rectangle.
	#[must_use]
	pub fn index_of(&self, tile_x: u8, tile_y: u8) -> u64 {
		let x = u64::from(tile_x) - u64::from(self.col_min);
		let y = u64::from(tile_y) - u64::from(self.row_min);
		y * self.width() + x
	}
}

impl fmt::Debug for BlockDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BlockDefinition")
			.field("coord", &self.coord())
			.field(
				"tiles",
				&format_args!(
					"[{},{}] - [{},{}]",
					self.col_min, self.row_min, self.col_max, self.row_max
				),
			)
			.field("tile_index_range", &self.tile_index_range)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;

	fn block(rect: [u8; 4]) -> BlockDefinition {
		BlockDefinition {
			level: 3,
			column: 0,
			row: 0,
			col_min: rect[0],
			row_min: rect[1],
			col_max: rect[2],
			row_max: rect[3],
			tile_index_range: ByteRange::new(62, 48),
		}
	}

	#[test]
	fn enumerates_sub_rectangle_row_major() {
		let square = block([0, 0, 1, 1]);
		assert_eq!(square.count_tiles(), 4);
		assert_eq!(square.index_of(0, 0), 0);
		assert_eq!(square.index_of(1, 0), 1);
		assert_eq!(square.index_of(0, 1), 2);
		assert_eq!(square.index_of(1, 1), 3);

		let shifted = block([3, 2, 5, 7]);
		assert_eq!(shifted.count_tiles(), 18);
		assert_eq!(shifted.index_of(3, 2), 0);
		assert_eq!(shifted.index_of(4, 5), 10);
	}

	#[test]
	fn checks_the_sub_rectangle() {
		let b = block([3, 2, 5, 7]);
		assert!(b.contains_column(3) && b.contains_column(5));
		assert!(!b.contains_column(2) && !b.contains_column(6));
		assert!(b.contains_row(2) && b.contains_row(7));
		assert!(!b.contains_row(1) && !b.contains_row(8));
	}

	#[test]
	fn detects_inverted_rectangles() {
		assert!(block([0, 0, 0, 0]).is_valid());
		assert!(block([3, 2, 5, 7]).is_valid());
		assert!(!block([1, 0, 0, 0]).is_valid());
		assert!(!block([0, 1, 0, 0]).is_valid());
	}

	#[test]
	fn round_trips_through_wire_form() -> Result<()> {
		let block1 = BlockDefinition {
			level: 14,
			column: 8800,
			row: 5374,
			col_min: 10,
			row_min: 20,
			col_max: 30,
			row_max: 40,
			tile_index_range: ByteRange::new(123_456_789, 987),
		};

		let blob = block1.to_blob();
		assert_eq!(blob.len(), 29);

		let block2 = BlockDefinition::from_slice(blob.as_slice())?;
		assert_eq!(block1, block2);
		assert_eq!(block2.coord(), TileCoord::new(14, 8800, 5374));
		Ok(())
	}

	#[test]
	fn debug() {
		assert_eq!(
			format!("{:?}", block([0, 0, 1, 1])),
			"BlockDefinition { coord: TileCoord(3, 0, 0), tiles: [0,0] - [1,1], tile_index_range: ByteRange[62,48] }"
		);
	}
}
