//! Core building blocks for reading cloudtiles archives.
//!
//! This crate carries everything below the container format itself: shared
//! types ([`Blob`], [`ByteRange`], [`TileCoord`], [`TileFormat`],
//! [`TileCompression`], [`GeoBBox`]), the byte-source abstraction with file,
//! HTTP and in-memory adapters ([`io`]), brotli/gzip helpers ([`utils`]), a
//! small JSON model ([`json`]) and the archive [`Metadata`] document.

pub mod error;
pub mod io;
pub mod json;
pub mod metadata;
pub mod types;
pub mod utils;

pub use error::{Error, NotFoundCause, Result};
pub use metadata::Metadata;
pub use types::*;
