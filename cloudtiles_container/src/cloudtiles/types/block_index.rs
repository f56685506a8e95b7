//! This module defines [`BlockIndex`], the directory of every tile block in
//! a cloudtiles archive.
//!
//! The block index is stored brotli compressed at the end of the file as a
//! flat sequence of 29-byte records. Loaded once, it answers every "which
//! block holds tile x/y?" question without further I/O.

use super::BlockDefinition;
use cloudtiles_core::{utils::decompress_brotli, *};
use std::collections::BTreeMap;

const BLOCK_RECORD_LENGTH: usize = 29;

/// All blocks of an archive, keyed by their block coordinate.
///
/// Keys order by level first, so range scans over one level are cheap. When
/// the encoded index lists the same coordinate twice, the later record wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockIndex {
	lookup: BTreeMap<TileCoord, BlockDefinition>,
}

impl BlockIndex {
	/// Decodes a raw (already decompressed) block index section.
	///
	/// Records describing an inverted sub-rectangle are placeholders without
	/// tiles and are dropped.
	///
	/// # Errors
	///
	/// Returns a [`Error::Format`] if the buffer is not a whole number of
	/// records.
	pub fn from_blob(blob: &Blob) -> Result<BlockIndex> {
		let slice = blob.as_slice();
		if slice.len() % BLOCK_RECORD_LENGTH != 0 {
			return Err(Error::format(format!(
				"block index length {} is not a multiple of {BLOCK_RECORD_LENGTH}",
				slice.len()
			)));
		}

		let mut lookup = BTreeMap::new();
		for record in slice.chunks_exact(BLOCK_RECORD_LENGTH) {
			let block = BlockDefinition::from_slice(record)?;
			if block.is_valid() {
				lookup.insert(block.coord(), block);
			}
		}

		Ok(BlockIndex { lookup })
	}

	/// Decodes a block index section as stored in the file.
	pub fn from_brotli_blob(blob: &Blob) -> Result<BlockIndex> {
		BlockIndex::from_blob(&decompress_brotli(blob)?)
	}

	#[must_use]
	pub fn get_block(&self, coord: &TileCoord) -> Option<&BlockDefinition> {
		self.lookup.get(coord)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.lookup.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.lookup.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &BlockDefinition> {
		self.lookup.values()
	}

	/// All zoom levels with at least one block, in ascending order.
	#[must_use]
	pub fn zoom_levels(&self) -> Vec<u8> {
		let mut levels: Vec<u8> = self.lookup.keys().map(|coord| coord.z).collect();
		levels.dedup();
		levels
	}

	/// The highest zoom level with at least one block.
	#[must_use]
	pub fn deepest_level(&self) -> Option<u8> {
		self.lookup.keys().next_back().map(|coord| coord.z)
	}

	#[must_use]
	pub fn has_level(&self, level: u8) -> bool {
		self.blocks_at_level(level).next().is_some()
	}

	#[must_use]
	pub fn has_column(&self, level: u8, column: u32) -> bool {
		self
			.lookup
			.range(TileCoord::new(level, column, 0)..=TileCoord::new(level, column, u32::MAX))
			.next()
			.is_some()
	}

	fn blocks_at_level(&self, level: u8) -> impl Iterator<Item = &BlockDefinition> {
		self
			.lookup
			.range(TileCoord::new(level, 0, 0)..=TileCoord::new(level, u32::MAX, u32::MAX))
			.map(|(_, block)| block)
	}

	/// Computes the geographic bounding box of one zoom level, or `None` if
	/// the level has no blocks.
	///
	/// The corners are derived from the block grid: the first block in key
	/// order is the north-western one, the last row of its column and the
	/// last block's column locate the south-eastern one. If no block sits at
	/// that corner coordinate, the north-western block stands in, so sparse
	/// level layouts still yield a usable box.
	#[must_use]
	pub fn bounding_box_at(&self, level: u8) -> Option<GeoBBox> {
		let mut blocks = self.blocks_at_level(level);
		let north_west = blocks.next()?;

		let x_min = north_west.column;
		let mut x_max = north_west.column;
		let mut y_max = north_west.row;
		for block in blocks {
			if block.column == x_min {
				y_max = block.row;
			}
			x_max = block.column;
		}
		let south_east = self
			.get_block(&TileCoord::new(level, x_max, y_max))
			.unwrap_or(north_west);

		// Corner positions in u64: the outer edge of the last block column
		// of a level does not fit a u32 tile coordinate.
		let tile_x_min = u64::from(x_min) * 256 + u64::from(north_west.col_min);
		let tile_y_min = u64::from(north_west.row) * 256 + u64::from(north_west.row_min);
		let tile_x_max = u64::from(x_max) * 256 + u64::from(south_east.col_max) + 1;
		let tile_y_max = u64::from(y_max) * 256 + u64::from(south_east.row_max) + 1;

		Some(GeoBBox::from_corners(
			TileCoord::position_as_geo(level, tile_x_min, tile_y_min),
			TileCoord::position_as_geo(level, tile_x_max, tile_y_max),
		))
	}
}
