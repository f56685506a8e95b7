//! This module defines [`Tile`], a decompressed tile payload together with
//! its format.

use cloudtiles_core::*;

/// A tile as handed out by the reader: decompressed bytes plus the archive
/// wide tile format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
	pub data: Blob,
	pub format: TileFormat,
}

impl Tile {
	/// The MIME type matching this tile's format, e.g. for HTTP responses.
	#[must_use]
	pub fn media_type(&self) -> &str {
		self.format.as_mime_str()
	}
}
