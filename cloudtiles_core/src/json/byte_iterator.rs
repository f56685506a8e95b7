//! A peekable byte cursor over an in-memory buffer, used by the JSON parser.
//!
//! Parse errors carry the current position and a short snippet of the bytes
//! leading up to it, so a broken metadata document can be diagnosed from the
//! log line alone.

use crate::error::{Error, Result};

const SNIPPET_LENGTH: usize = 15;

pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	#[must_use]
	pub fn new(bytes: &'a [u8]) -> Self {
		ByteIterator { bytes, position: 0 }
	}

	/// Index of the next unconsumed byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Returns the next byte and advances, or `None` at the end of the buffer.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		if byte.is_some() {
			self.position += 1;
		}
		byte
	}

	pub fn expect_next_byte(&mut self) -> Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Builds a parse error from `msg`, the current position and the bytes
	/// just before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let start = self.position.saturating_sub(SNIPPET_LENGTH);
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..self.position]).into_owned();
		if self.position >= self.bytes.len() {
			snippet.push_str("<EOF>");
		}
		Error::Json(format!("{msg} at position {}: {snippet}", self.position))
	}
}
