//! This module defines [`TileIndex`], the per-block table mapping tile slots
//! to byte ranges in the archive.

use cloudtiles_core::{io::*, utils::decompress_brotli, *};
use std::fmt;

const TILE_RECORD_LENGTH: u64 = 12;

/// The tile index of one block: `tile_count` records of 12 bytes, an
/// absolute `u64` file offset followed by a `u32` length, enumerating the
/// block's sub-rectangle in row-major order.
///
/// The buffer is kept as-is and records are decoded on access, so looking up
/// a single tile never materializes the whole table.
#[derive(Clone, PartialEq, Eq)]
pub struct TileIndex {
	data: Blob,
}

impl TileIndex {
	/// Wraps a raw (already decompressed) tile index section.
	///
	/// # Errors
	///
	/// Returns a [`Error::Format`] if the buffer is not a whole number of
	/// records or disagrees with the record count the block definition
	/// promises.
	pub fn from_blob(blob: Blob, expected_count: u64) -> Result<TileIndex> {
		if blob.len() % TILE_RECORD_LENGTH != 0 {
			return Err(Error::format(format!(
				"tile index length {} is not a multiple of {TILE_RECORD_LENGTH}",
				blob.len()
			)));
		}

		let count = blob.len() / TILE_RECORD_LENGTH;
		if count != expected_count {
			return Err(Error::format(format!(
				"tile index has {count} records, the block needs {expected_count}"
			)));
		}

		Ok(TileIndex { data: blob })
	}

	/// Decodes a tile index section as stored in the file.
	pub fn from_brotli_blob(blob: &Blob, expected_count: u64) -> Result<TileIndex> {
		TileIndex::from_blob(decompress_brotli(blob)?, expected_count)
	}

	/// Decodes the record at `position`. A zero-length range marks an empty
	/// slot.
	///
	/// # Errors
	///
	/// Returns a [`Error::Format`] if `position` is out of bounds.
	pub fn get(&self, position: u64) -> Result<ByteRange> {
		let mut reader = ValueReaderSlice::new_be(self.data.as_slice());
		reader.set_position(position * TILE_RECORD_LENGTH)?;

		let offset = reader.read_u64()?;
		let length = u64::from(reader.read_u32()?);
		Ok(ByteRange::new(offset, length))
	}

	#[must_use]
	pub fn len(&self) -> u64 {
		self.data.len() / TILE_RECORD_LENGTH
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

impl fmt::Debug for TileIndex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileIndex({} records)", self.len())
	}
}
