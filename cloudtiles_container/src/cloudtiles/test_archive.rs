//! Test support: builds complete cloudtiles archives in memory and wraps
//! byte sources to observe or disturb the reader's request pattern.

use super::types::{BlockDefinition, FileHeader};
use async_trait::async_trait;
use cloudtiles_core::{io::*, utils::*, *};
use std::sync::{
	Arc, Mutex,
	atomic::{AtomicUsize, Ordering},
};

const HEADER_LENGTH: u64 = 62;

struct BlockSpec {
	level: u8,
	column: u32,
	row: u32,
	rect: [u8; 4],
	tiles: Vec<Option<Blob>>,
}

/// Assembles a valid archive blob: header, brotli metadata, tile payloads
/// compressed with the archive compression, one brotli tile index per block
/// and the brotli block index at the end.
pub struct ArchiveBuilder {
	tile_format: TileFormat,
	compression: TileCompression,
	metadata: Option<String>,
	blocks: Vec<BlockSpec>,
}

impl ArchiveBuilder {
	pub fn new(tile_format: TileFormat, compression: TileCompression) -> ArchiveBuilder {
		ArchiveBuilder {
			tile_format,
			compression,
			metadata: None,
			blocks: Vec::new(),
		}
	}

	pub fn set_metadata(&mut self, metadata: &str) {
		self.metadata = Some(metadata.to_string());
	}

	/// Adds a block whose sub-rectangle is `rect` as `[col_min, row_min,
	/// col_max, row_max]`. `tiles` enumerates the sub-rectangle in row-major
	/// order; `None` leaves an empty slot.
	pub fn add_block(&mut self, level: u8, column: u32, row: u32, rect: [u8; 4], tiles: Vec<Option<Blob>>) {
		let count = (u64::from(rect[2]) - u64::from(rect[0]) + 1) * (u64::from(rect[3]) - u64::from(rect[1]) + 1);
		assert_eq!(tiles.len() as u64, count, "block needs {count} tile slots");
		self.blocks.push(BlockSpec {
			level,
			column,
			row,
			rect,
			tiles,
		});
	}

	pub fn build(&self) -> Result<Blob> {
		let mut body = ValueWriterBlob::new_be();

		let meta_range = match &self.metadata {
			Some(metadata) => {
				let compressed = compress_brotli(&Blob::from(metadata))?;
				let range = ByteRange::new(HEADER_LENGTH + body.position(), compressed.len());
				body.write_slice(compressed.as_slice());
				range
			}
			None => ByteRange::empty(),
		};

		let mut block_index = ValueWriterBlob::new_be();
		for spec in &self.blocks {
			let mut tile_index = ValueWriterBlob::new_be();
			for tile in &spec.tiles {
				match tile {
					Some(blob) => {
						let compressed = compress(blob.clone(), &self.compression)?;
						tile_index.write_u64(HEADER_LENGTH + body.position());
						tile_index.write_u32(compressed.len() as u32);
						body.write_slice(compressed.as_slice());
					}
					None => {
						tile_index.write_u64(0);
						tile_index.write_u32(0);
					}
				}
			}

			let compressed_index = compress_brotli(&tile_index.into_blob())?;
			let definition = BlockDefinition {
				level: spec.level,
				column: spec.column,
				row: spec.row,
				col_min: spec.rect[0],
				row_min: spec.rect[1],
				col_max: spec.rect[2],
				row_max: spec.rect[3],
				tile_index_range: ByteRange::new(HEADER_LENGTH + body.position(), compressed_index.len()),
			};
			body.write_slice(compressed_index.as_slice());
			block_index.write_slice(definition.to_blob().as_slice());
		}

		let compressed_index = compress_brotli(&block_index.into_blob())?;
		let blocks_range = ByteRange::new(HEADER_LENGTH + body.position(), compressed_index.len());
		body.write_slice(compressed_index.as_slice());

		let header = FileHeader {
			tile_format: self.tile_format,
			compression: self.compression,
			meta_range,
			blocks_range,
		};

		let mut archive = header.to_blob().into_vec();
		archive.extend_from_slice(body.into_blob().as_slice());
		Ok(Blob::from(archive))
	}
}

/// A byte source that records every requested range.
#[derive(Debug)]
pub struct CountingReader {
	inner: DataReaderBlob,
	log: Arc<Mutex<Vec<ByteRange>>>,
}

impl CountingReader {
	pub fn new(blob: Blob) -> (Box<CountingReader>, Arc<Mutex<Vec<ByteRange>>>) {
		let log = Arc::new(Mutex::new(Vec::new()));
		let reader = Box::new(CountingReader {
			inner: DataReaderBlob::from(blob),
			log: log.clone(),
		});
		(reader, log)
	}
}

#[async_trait]
impl DataReaderTrait for CountingReader {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		self.log.lock().unwrap().push(*range);
		self.inner.read_range(range).await
	}

	fn get_name(&self) -> &str {
		"counting"
	}
}

/// A byte source that fails its first `failures` reads, then recovers.
#[derive(Debug)]
pub struct FlakyReader {
	inner: DataReaderBlob,
	failures: AtomicUsize,
}

impl FlakyReader {
	pub fn new(blob: Blob, failures: usize) -> Box<FlakyReader> {
		Box::new(FlakyReader {
			inner: DataReaderBlob::from(blob),
			failures: AtomicUsize::new(failures),
		})
	}
}

#[async_trait]
impl DataReaderTrait for FlakyReader {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		let remaining = self.failures.load(Ordering::SeqCst);
		if remaining > 0 {
			self.failures.store(remaining - 1, Ordering::SeqCst);
			return Err(Error::network(self.get_name(), range, "simulated outage"));
		}
		self.inner.read_range(range).await
	}

	fn get_name(&self) -> &str {
		"flaky"
	}
}
