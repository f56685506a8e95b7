//! This module provides the [`ValueReaderSlice`] struct for decoding values
//! from a byte slice.
//!
//! Every fixed-layout section of a cloudtiles archive (header, block index,
//! tile index) is big-endian, so the reader is big-endian only. All reads are
//! bounds-checked; running out of buffer is a format error, never a panic.

use crate::{
	error::{Error, Result},
	types::ByteRange,
};
use byteorder::{BigEndian, ByteOrder};

/// A bounds-checked big-endian reader over a byte slice.
pub struct ValueReaderSlice<'a> {
	slice: &'a [u8],
	position: u64,
}

impl<'a> ValueReaderSlice<'a> {
	/// Creates a new `ValueReaderSlice` with big-endian byte order.
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice { slice, position: 0 }
	}

	/// Returns the total length of the readable data.
	#[must_use]
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> u64 {
		self.slice.len() as u64
	}

	/// Returns the current position within the readable data.
	#[must_use]
	pub fn position(&self) -> u64 {
		self.position
	}

	/// Sets the current position within the readable data.
	pub fn set_position(&mut self, position: u64) -> Result<()> {
		if position >= self.len() {
			return Err(Error::format(format!(
				"cannot set position {position} in a buffer of {} bytes",
				self.slice.len()
			)));
		}
		self.position = position;
		Ok(())
	}

	/// Returns `true` if there are bytes left to read.
	#[must_use]
	pub fn has_remaining(&self) -> bool {
		self.position < self.len()
	}

	fn take(&mut self, length: u64, kind: &str) -> Result<&'a [u8]> {
		let start = self.position;
		let end = start + length;
		if end > self.len() {
			return Err(Error::format(format!(
				"unexpected end of buffer: reading {kind} ({length} bytes) at position {start} in a buffer of {} bytes",
				self.slice.len()
			)));
		}
		self.position = end;
		Ok(&self.slice[start as usize..end as usize])
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take(1, "u8")?[0])
	}

	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(BigEndian::read_u32(self.take(4, "u32")?))
	}

	pub fn read_u64(&mut self) -> Result<u64> {
		Ok(BigEndian::read_u64(self.take(8, "u64")?))
	}

	/// Reads `length` bytes as a UTF-8 string.
	pub fn read_string(&mut self, length: u64) -> Result<String> {
		let bytes = self.take(length, "string")?;
		String::from_utf8(bytes.to_vec()).map_err(|e| Error::format(format!("invalid UTF-8 in string: {e}")))
	}

	/// Reads an offset/length pair of big-endian u64 values.
	pub fn read_range(&mut self) -> Result<ByteRange> {
		Ok(ByteRange::new(self.read_u64()?, self.read_u64()?))
	}
}
