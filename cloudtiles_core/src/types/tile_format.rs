//! This module defines the [`TileFormat`] enum, representing the payload
//! format of the tiles in a cloudtiles archive.
//!
//! The archive header stores the format as a one-byte index. The index table
//! has reserved gaps for formats that were planned but never assigned; those
//! decode to [`TileFormat::BIN`] so that an archive written by a newer tool
//! can still be served as raw bytes.

use std::fmt::{Display, Formatter};

/// Enum representing supported tile formats.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileFormat {
	AVIF,
	BIN,
	GEOJSON,
	JPG,
	JSON,
	PBF,
	PNG,
	SVG,
	TOPOJSON,
	WEBP,
}

impl TileFormat {
	/// Decodes the one-byte format index stored in the archive header.
	///
	/// Unassigned indexes fall back to [`TileFormat::BIN`], so decoding
	/// never fails.
	///
	/// # Examples
	/// ```
	/// use cloudtiles_core::TileFormat;
	/// assert_eq!(TileFormat::from_index(0), TileFormat::PNG);
	/// assert_eq!(TileFormat::from_index(16), TileFormat::PBF);
	/// assert_eq!(TileFormat::from_index(7), TileFormat::BIN);
	/// ```
	#[must_use]
	pub fn from_index(index: u8) -> TileFormat {
		match index {
			0 => TileFormat::PNG,
			1 => TileFormat::JPG,
			2 => TileFormat::WEBP,
			3 => TileFormat::SVG,
			4 => TileFormat::AVIF,
			12 => TileFormat::GEOJSON,
			13 => TileFormat::TOPOJSON,
			14 => TileFormat::JSON,
			16 => TileFormat::PBF,
			_ => TileFormat::BIN,
		}
	}

	/// The one-byte index this format is stored as in the archive header.
	#[must_use]
	pub fn as_index(&self) -> u8 {
		match self {
			TileFormat::PNG => 0,
			TileFormat::JPG => 1,
			TileFormat::WEBP => 2,
			TileFormat::SVG => 3,
			TileFormat::AVIF => 4,
			TileFormat::GEOJSON => 12,
			TileFormat::TOPOJSON => 13,
			TileFormat::JSON => 14,
			TileFormat::BIN => 15,
			TileFormat::PBF => 16,
		}
	}

	/// Returns a lowercase string identifier for this tile format.
	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			TileFormat::AVIF => "avif",
			TileFormat::BIN => "bin",
			TileFormat::GEOJSON => "geojson",
			TileFormat::JPG => "jpg",
			TileFormat::JSON => "json",
			TileFormat::PBF => "pbf",
			TileFormat::PNG => "png",
			TileFormat::SVG => "svg",
			TileFormat::TOPOJSON => "topojson",
			TileFormat::WEBP => "webp",
		}
	}

	/// Returns the MIME type to serve tiles of this format with.
	///
	/// # Examples
	/// ```
	/// use cloudtiles_core::TileFormat;
	/// assert_eq!(TileFormat::PNG.as_mime_str(), "image/png");
	/// assert_eq!(TileFormat::PBF.as_mime_str(), "application/x-protobuf");
	/// ```
	#[must_use]
	pub fn as_mime_str(&self) -> &str {
		match self {
			TileFormat::AVIF => "image/avif",
			TileFormat::BIN => "application/octet-stream",
			TileFormat::GEOJSON => "application/geo+json",
			TileFormat::JPG => "image/jpeg",
			TileFormat::JSON => "application/json",
			TileFormat::PBF => "application/x-protobuf",
			TileFormat::PNG => "image/png",
			TileFormat::SVG => "image/svg+xml",
			TileFormat::TOPOJSON => "application/topo+json",
			TileFormat::WEBP => "image/webp",
		}
	}
}

impl Display for TileFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
