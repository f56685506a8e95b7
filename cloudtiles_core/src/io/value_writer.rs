//! This module provides the [`ValueWriterBlob`] struct, the encode-side
//! counterpart of [`super::ValueReaderSlice`].
//!
//! It is used by the header encoder and by tests that build synthetic
//! archive sections. Like the reader it is big-endian only; writing into a
//! growable buffer cannot fail, so the methods are infallible.

use crate::types::{Blob, ByteRange};
use byteorder::{BigEndian, ByteOrder};

/// A big-endian writer that collects values into an in-memory buffer.
pub struct ValueWriterBlob {
	data: Vec<u8>,
}

impl ValueWriterBlob {
	/// Creates a new `ValueWriterBlob` with big-endian byte order.
	#[must_use]
	pub fn new_be() -> ValueWriterBlob {
		ValueWriterBlob { data: Vec::new() }
	}

	/// Returns the number of bytes written so far.
	#[must_use]
	pub fn position(&self) -> u64 {
		self.data.len() as u64
	}

	pub fn write_u8(&mut self, value: u8) {
		self.data.push(value);
	}

	pub fn write_u32(&mut self, value: u32) {
		let mut buf = [0u8; 4];
		BigEndian::write_u32(&mut buf, value);
		self.data.extend_from_slice(&buf);
	}

	pub fn write_u64(&mut self, value: u64) {
		let mut buf = [0u8; 8];
		BigEndian::write_u64(&mut buf, value);
		self.data.extend_from_slice(&buf);
	}

	/// Appends raw bytes unchanged.
	pub fn write_slice(&mut self, slice: &[u8]) {
		self.data.extend_from_slice(slice);
	}

	/// Writes an offset/length pair as two big-endian u64 values.
	pub fn write_range(&mut self, range: &ByteRange) {
		self.write_u64(range.offset);
		self.write_u64(range.length);
	}

	/// Converts the written data into a [`Blob`].
	#[must_use]
	pub fn into_blob(self) -> Blob {
		Blob::from(self.data)
	}
}

impl Default for ValueWriterBlob {
	fn default() -> Self {
		Self::new_be()
	}
}
