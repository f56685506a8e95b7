//! This module defines the [`TileCompression`] enum, which names the
//! compression algorithm applied to tile payloads in a cloudtiles archive.
//!
//! The archive header stores the compression as a one-byte index; the
//! metadata, block index and tile index sections are always brotli
//! compressed regardless of this value.

use crate::error::{Error, Result};
use std::fmt::Display;

/// Enum representing possible compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileCompression {
	Uncompressed,
	Gzip,
	Brotli,
}

impl TileCompression {
	/// Decodes the one-byte compression index stored in the archive header.
	///
	/// # Errors
	///
	/// Returns a [`Error::Format`] for indexes outside the known table.
	pub fn from_index(index: u8) -> Result<TileCompression> {
		match index {
			0 => Ok(TileCompression::Uncompressed),
			1 => Ok(TileCompression::Gzip),
			2 => Ok(TileCompression::Brotli),
			value => Err(Error::format(format!("unknown compression value: {value}"))),
		}
	}

	/// The one-byte index this compression is stored as in the archive header.
	#[must_use]
	pub fn as_index(&self) -> u8 {
		match self {
			TileCompression::Uncompressed => 0,
			TileCompression::Gzip => 1,
			TileCompression::Brotli => 2,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			TileCompression::Uncompressed => "none",
			TileCompression::Gzip => "gzip",
			TileCompression::Brotli => "brotli",
		}
	}
}

impl Display for TileCompression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_index() {
		assert_eq!(TileCompression::from_index(0).unwrap(), TileCompression::Uncompressed);
		assert_eq!(TileCompression::from_index(1).unwrap(), TileCompression::Gzip);
		assert_eq!(TileCompression::from_index(2).unwrap(), TileCompression::Brotli);

		let err = TileCompression::from_index(3).unwrap_err();
		assert_eq!(err.to_string(), "format error: unknown compression value: 3");
		assert!(TileCompression::from_index(255).is_err());
	}

	#[test]
	fn test_index_round_trip() {
		for compression in [
			TileCompression::Uncompressed,
			TileCompression::Gzip,
			TileCompression::Brotli,
		] {
			assert_eq!(
				TileCompression::from_index(compression.as_index()).unwrap(),
				compression
			);
		}
	}

	#[test]
	fn test_display_trait() {
		fn test(compression: TileCompression, expected_display: &str) {
			assert_eq!(
				format!("{compression}"),
				expected_display,
				"Display output does not match expected for {compression:?}"
			);
		}

		test(TileCompression::Uncompressed, "none");
		test(TileCompression::Gzip, "gzip");
		test(TileCompression::Brotli, "brotli");
	}
}
