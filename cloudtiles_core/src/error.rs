//! Error types shared by all cloudtiles crates.
//!
//! Every fallible operation in this workspace reports one of the variants of
//! [`Error`], so callers can match on the failure class instead of parsing
//! messages: unusable sources ([`Error::Source`]), transport problems
//! ([`Error::Network`]), malformed archive sections ([`Error::Format`]),
//! undecodable payloads ([`Error::Decompression`]) and tiles that are simply
//! not in the archive ([`Error::NotFound`]).

use crate::types::{ByteRange, TileCompression};
use thiserror::Error;

/// Result type for cloudtiles operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a requested tile could not be resolved.
///
/// A cloudtiles archive is sparse on three levels: whole zoom levels, whole
/// 256x256 blocks, and single tiles inside a block can be absent. The cause
/// names the first check that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCause {
	/// No blocks exist at the requested zoom level.
	Zoom,
	/// The zoom level exists, but not the block column.
	BlockColumn,
	/// The block column exists, but not the block row.
	BlockRow,
	/// The block exists, but the in-block column is outside its populated rectangle.
	TileColumn,
	/// The block exists, but the in-block row is outside its populated rectangle.
	TileRow,
	/// The tile index position exists but holds a zero-length record.
	EmptySlot,
}

impl NotFoundCause {
	fn as_str(&self) -> &'static str {
		match self {
			NotFoundCause::Zoom => "no blocks at this zoom level",
			NotFoundCause::BlockColumn => "no blocks in this block column",
			NotFoundCause::BlockRow => "no block in this block row",
			NotFoundCause::TileColumn => "tile column outside the populated block rectangle",
			NotFoundCause::TileRow => "tile row outside the populated block rectangle",
			NotFoundCause::EmptySlot => "tile slot is empty",
		}
	}
}

/// Error type for cloudtiles operations.
#[derive(Error, Debug)]
pub enum Error {
	/// A byte source could not be constructed in the first place.
	#[error("cannot open source '{name}': {reason}")]
	Source { name: String, reason: String },

	/// A byte source failed to deliver a requested range.
	#[error("reading {length} bytes at offset {offset} from '{name}' failed: {reason}")]
	Network {
		name: String,
		offset: u64,
		length: u64,
		reason: String,
	},

	/// A fixed-layout section was truncated or malformed.
	#[error("format error: {0}")]
	Format(String),

	/// A compressed section or tile payload could not be decoded.
	#[error("{compression} decompression failed: {reason}")]
	Decompression {
		compression: TileCompression,
		reason: String,
	},

	/// A payload could not be encoded. Only reachable through the compression
	/// helpers, never through the read path.
	#[error("{compression} compression failed: {reason}")]
	Compression {
		compression: TileCompression,
		reason: String,
	},

	/// The requested tile is not present in the archive.
	#[error("tile {z}/{x}/{y} not found: {}", cause.as_str())]
	NotFound {
		z: u8,
		x: u32,
		y: u32,
		cause: NotFoundCause,
	},

	/// JSON text could not be parsed. Recovered internally when the text is
	/// archive metadata; surfaced only by the JSON module itself.
	#[error("JSON error: {0}")]
	Json(String),
}

impl Error {
	/// Shorthand for a [`Error::Format`] with a formatted message.
	pub fn format(msg: impl Into<String>) -> Self {
		Error::Format(msg.into())
	}

	/// Build a [`Error::Source`] for a source that could not be opened.
	pub fn source(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
		Error::Source {
			name: name.into(),
			reason: reason.to_string(),
		}
	}

	/// Build a [`Error::Network`] for a failed range read.
	pub fn network(name: &str, range: &ByteRange, reason: impl std::fmt::Display) -> Self {
		Error::Network {
			name: name.to_string(),
			offset: range.offset,
			length: range.length,
			reason: reason.to_string(),
		}
	}

	/// Build a [`Error::NotFound`] for the given tile coordinate.
	pub fn not_found(z: u8, x: u32, y: u32, cause: NotFoundCause) -> Self {
		Error::NotFound { z, x, y, cause }
	}

	/// The cause of a [`Error::NotFound`], if this is one.
	pub fn not_found_cause(&self) -> Option<NotFoundCause> {
		match self {
			Error::NotFound { cause, .. } => Some(*cause),
			_ => None,
		}
	}
}
