//! Compression and decompression of archive sections and tile payloads.
//!
//! The metadata, block index and tile index sections of a cloudtiles archive
//! are always brotli compressed; tile payloads use whatever
//! [`TileCompression`] the archive header declares. The dispatchers below
//! treat [`TileCompression::Uncompressed`] as the identity.

use crate::{
	error::{Error, Result},
	types::{Blob, TileCompression},
};
use brotli::{BrotliCompress, BrotliDecompress, enc::BrotliEncoderParams};
use flate2::bufread::{GzDecoder, GzEncoder};
use std::io::{Cursor, Read};

/// Compresses data based on the specified compression algorithm.
pub fn compress(blob: Blob, compression: &TileCompression) -> Result<Blob> {
	match compression {
		TileCompression::Uncompressed => Ok(blob),
		TileCompression::Gzip => compress_gzip(&blob),
		TileCompression::Brotli => compress_brotli(&blob),
	}
}

/// Decompresses data based on the specified compression algorithm.
pub fn decompress(blob: Blob, compression: &TileCompression) -> Result<Blob> {
	match compression {
		TileCompression::Uncompressed => Ok(blob),
		TileCompression::Gzip => decompress_gzip(&blob),
		TileCompression::Brotli => decompress_brotli(&blob),
	}
}

/// Compresses data using Brotli.
pub fn compress_brotli(blob: &Blob) -> Result<Blob> {
	let params = BrotliEncoderParams {
		quality: 10, // Highest quality
		lgwin: 19,   // Window size
		size_hint: blob.len() as usize,
		..Default::default()
	};
	let mut input = Cursor::new(blob.as_slice());
	let mut output = Vec::new();
	BrotliCompress(&mut input, &mut output, &params).map_err(|e| Error::Compression {
		compression: TileCompression::Brotli,
		reason: e.to_string(),
	})?;
	Ok(Blob::from(output))
}

/// Decompresses data that was compressed using Brotli.
pub fn decompress_brotli(blob: &Blob) -> Result<Blob> {
	let mut cursor = Cursor::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	BrotliDecompress(&mut cursor, &mut decompressed_data).map_err(|e| Error::Decompression {
		compression: TileCompression::Brotli,
		reason: e.to_string(),
	})?;
	Ok(Blob::from(decompressed_data))
}

/// Compresses data using Gzip.
pub fn compress_gzip(blob: &Blob) -> Result<Blob> {
	let mut encoder = GzEncoder::new(blob.as_slice(), flate2::Compression::best());
	let mut compressed_data = Vec::new();
	encoder.read_to_end(&mut compressed_data).map_err(|e| Error::Compression {
		compression: TileCompression::Gzip,
		reason: e.to_string(),
	})?;
	Ok(Blob::from(compressed_data))
}

/// Decompresses data that was compressed using Gzip.
pub fn decompress_gzip(blob: &Blob) -> Result<Blob> {
	let mut decoder = GzDecoder::new(blob.as_slice());
	let mut decompressed_data = Vec::new();
	decoder.read_to_end(&mut decompressed_data).map_err(|e| Error::Decompression {
		compression: TileCompression::Gzip,
		reason: e.to_string(),
	})?;
	Ok(Blob::from(decompressed_data))
}
