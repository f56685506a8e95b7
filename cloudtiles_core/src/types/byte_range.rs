//! The `ByteRange` struct describes a contiguous run of bytes inside an
//! archive by offset and length.
//!
//! Cloudtiles archives are never read as a whole: the header points at the
//! metadata and block index sections, the block index points at tile index
//! sections, and tile indexes point at tile payloads. All of these pointers
//! are `ByteRange`s.

use std::fmt;
use std::ops::Range;

/// A range of bytes with an offset and length.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ByteRange {
	/// The starting offset of the byte range.
	pub offset: u64,
	/// The length of the byte range.
	pub length: u64,
}

impl ByteRange {
	/// Creates a new `ByteRange` with the specified offset and length.
	pub fn new(offset: u64, length: u64) -> Self {
		Self { offset, length }
	}

	/// Creates an empty `ByteRange` with zero offset and length.
	pub fn empty() -> Self {
		Self { offset: 0, length: 0 }
	}

	/// Converts the `ByteRange` to a `Range<usize>`.
	pub fn as_range_usize(&self) -> Range<usize> {
		Range {
			start: self.offset as usize,
			end: (self.offset + self.length) as usize,
		}
	}
}

impl fmt::Debug for ByteRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ByteRange[{},{}]", self.offset, self.length)
	}
}
