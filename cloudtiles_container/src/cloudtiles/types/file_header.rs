//! This module defines the `FileHeader` struct, which represents the fixed
//! 62-byte prologue of a cloudtiles archive.
//!
//! The header names the payload format and compression of all tiles in the
//! archive and points at the two top-level sections: the metadata document
//! and the block index. The magic word pins the container version;
//! everything after it is big-endian.

use cloudtiles_core::{io::*, *};

const HEADER_LENGTH: u64 = 62;
const MAGIC: &str = "OpenCloudTiles-Container-v1:";

/// A struct representing the header of a cloudtiles archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHeader {
	pub tile_format: TileFormat,
	pub compression: TileCompression,
	pub meta_range: ByteRange,
	pub blocks_range: ByteRange,
}

impl FileHeader {
	/// Reads a `FileHeader` from the start of a byte source.
	///
	/// # Errors
	///
	/// Fails with a network error if range `[0, 62)` cannot be read, or a
	/// format error if the bytes are not a valid header.
	pub async fn from_reader(reader: &DataReader) -> Result<FileHeader> {
		let blob = reader.read_range(&ByteRange::new(0, HEADER_LENGTH)).await?;
		FileHeader::from_blob(&blob)
	}

	/// Creates a `FileHeader` from its 62-byte wire form.
	///
	/// # Errors
	///
	/// Returns a [`Error::Format`] for buffers shorter than 62 bytes, a
	/// wrong magic word, or an unknown compression index. Unknown tile
	/// format indexes are not an error; they decode as [`TileFormat::BIN`].
	pub fn from_blob(blob: &Blob) -> Result<FileHeader> {
		if blob.len() < HEADER_LENGTH {
			return Err(Error::format(format!(
				"header is too short: {} bytes, expected {HEADER_LENGTH}",
				blob.len()
			)));
		}

		let mut reader = ValueReaderSlice::new_be(blob.as_slice());

		let magic = reader.read_string(MAGIC.len() as u64)?;
		if magic != MAGIC {
			return Err(Error::format(format!(
				"magic word mismatch: expected '{MAGIC}', found '{magic}'"
			)));
		}

		let tile_format = TileFormat::from_index(reader.read_u8()?);
		let compression = TileCompression::from_index(reader.read_u8()?)?;
		let meta_range = reader.read_range()?;
		let blocks_range = reader.read_range()?;

		Ok(FileHeader {
			tile_format,
			compression,
			meta_range,
			blocks_range,
		})
	}

	/// Encodes the header back into its 62-byte wire form.
	#[must_use]
	pub fn to_blob(&self) -> Blob {
		let mut writer = ValueWriterBlob::new_be();
		writer.write_slice(MAGIC.as_bytes());
		writer.write_u8(self.tile_format.as_index());
		writer.write_u8(self.compression.as_index());
		writer.write_range(&self.meta_range);
		writer.write_range(&self.blocks_range);
		debug_assert_eq!(writer.position(), HEADER_LENGTH);
		writer.into_blob()
	}
}
