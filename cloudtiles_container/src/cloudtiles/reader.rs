//! This module provides [`CloudTilesReader`], a lazy random-access reader
//! for cloudtiles archives.
//!
//! Opening an archive performs no I/O. Every section is fetched on first
//! use and cached behind a single-flight cell, so concurrent requests on a
//! cold reader trigger each range read at most once, and a failed load is
//! retried on the next call.

use super::types::{BlockDefinition, BlockIndex, FileHeader, Tile, TileIndex};
use cloudtiles_core::{io::*, utils::*, *};
use log::{debug, trace};
use std::{
	collections::HashMap,
	fmt,
	ops::Shr,
	path::Path,
	sync::{Arc, Mutex, PoisonError},
};
use tokio::sync::OnceCell;

/// Reader for the `cloudtiles` container format.
///
/// The archive may live on the local filesystem, behind an HTTP server or in
/// memory; all access goes through range reads on a [`DataReaderTrait`]
/// source. Tiles are addressed by [`TileCoord`] and returned decompressed,
/// together with their media type.
pub struct CloudTilesReader {
	reader: DataReader,
	header: OnceCell<FileHeader>,
	metadata: OnceCell<Metadata>,
	block_index: OnceCell<BlockIndex>,
	tile_indexes: Mutex<HashMap<TileCoord, Arc<OnceCell<Arc<TileIndex>>>>>,
	zoom_levels: OnceCell<Vec<u8>>,
	bounding_box: OnceCell<Option<GeoBBox>>,
}

impl CloudTilesReader {
	/// Wraps an already constructed byte source. Performs no I/O.
	#[must_use]
	pub fn new(reader: DataReader) -> CloudTilesReader {
		CloudTilesReader {
			reader,
			header: OnceCell::new(),
			metadata: OnceCell::new(),
			block_index: OnceCell::new(),
			tile_indexes: Mutex::new(HashMap::new()),
			zoom_levels: OnceCell::new(),
			bounding_box: OnceCell::new(),
		}
	}

	/// Opens an archive file on the local filesystem.
	///
	/// # Errors
	///
	/// Fails with [`Error::Source`] if the path cannot be used; the file
	/// content is not touched until the first accessor call.
	pub fn open_path(path: &Path) -> Result<CloudTilesReader> {
		Ok(CloudTilesReader::new(DataReaderFile::open(path)?))
	}

	/// Opens an archive served over HTTP(S).
	///
	/// # Errors
	///
	/// Fails with [`Error::Source`] if the URL does not parse or uses an
	/// unsupported scheme; no request is sent until the first accessor call.
	pub fn open_url(url: &str) -> Result<CloudTilesReader> {
		let parsed = reqwest::Url::parse(url).map_err(|e| Error::source(url, e))?;
		Ok(CloudTilesReader::new(DataReaderHttp::from_url(parsed)?))
	}

	/// The name of the underlying byte source, e.g. the file path or URL.
	#[must_use]
	pub fn source_name(&self) -> &str {
		self.reader.get_name()
	}

	/// The archive header. Loaded on first call.
	pub async fn get_header(&self) -> Result<&FileHeader> {
		self
			.header
			.get_or_try_init(|| async {
				debug!("loading header from '{}'", self.reader.get_name());
				FileHeader::from_reader(&self.reader).await
			})
			.await
	}

	/// The archive metadata. Loaded on first call.
	///
	/// An archive without a metadata section, or with metadata that does not
	/// parse as JSON, yields the empty document.
	pub async fn get_metadata(&self) -> Result<&Metadata> {
		self
			.metadata
			.get_or_try_init(|| async {
				let header = self.get_header().await?;
				if header.meta_range.length == 0 {
					return Ok(Metadata::default());
				}
				debug!("loading {} bytes of metadata", header.meta_range.length);
				let blob = self.reader.read_range(&header.meta_range).await?;
				Ok(Metadata::try_from_blob_or_default(&decompress_brotli(&blob)?))
			})
			.await
	}

	/// The block index. Loaded on first call.
	pub async fn get_block_index(&self) -> Result<&BlockIndex> {
		self
			.block_index
			.get_or_try_init(|| async {
				let header = self.get_header().await?;
				debug!("loading {} bytes of block index", header.blocks_range.length);
				let blob = self.reader.read_range(&header.blocks_range).await?;
				BlockIndex::from_brotli_blob(&blob)
			})
			.await
	}

	/// All zoom levels with at least one block, ascending. Loaded on first
	/// call.
	pub async fn get_zoom_levels(&self) -> Result<&[u8]> {
		let levels = self
			.zoom_levels
			.get_or_try_init(|| async { Ok::<_, Error>(self.get_block_index().await?.zoom_levels()) })
			.await?;
		Ok(levels)
	}

	/// The geographic bounding box of the deepest zoom level, or `None` for
	/// an archive without blocks. Computed on first call.
	pub async fn get_bounding_box(&self) -> Result<Option<GeoBBox>> {
		let bbox = self
			.bounding_box
			.get_or_try_init(|| async {
				let block_index = self.get_block_index().await?;
				Ok::<_, Error>(
					block_index
						.deepest_level()
						.and_then(|level| block_index.bounding_box_at(level)),
				)
			})
			.await?;
		Ok(*bbox)
	}

	/// The geographic bounding box of one zoom level, or `None` if that
	/// level has no blocks.
	pub async fn get_bounding_box_at(&self, level: u8) -> Result<Option<GeoBBox>> {
		Ok(self.get_block_index().await?.bounding_box_at(level))
	}

	/// Resolves one tile and returns its decompressed payload.
	///
	/// # Errors
	///
	/// Fails with [`Error::NotFound`] when the archive holds no tile at
	/// `coord`; the cause names the level at which resolution stopped. Tile
	/// bytes are only fetched for tiles that exist.
	pub async fn get_tile(&self, coord: &TileCoord) -> Result<Tile> {
		trace!("resolving tile {coord:?}");
		let header = self.get_header().await?;
		let block_index = self.get_block_index().await?;

		let block_coord = TileCoord::new(coord.z, coord.x.shr(8), coord.y.shr(8));
		let Some(block) = block_index.get_block(&block_coord) else {
			let cause = if !block_index.has_level(coord.z) {
				NotFoundCause::Zoom
			} else if !block_index.has_column(coord.z, block_coord.x) {
				NotFoundCause::BlockColumn
			} else {
				NotFoundCause::BlockRow
			};
			return Err(Error::not_found(coord.z, coord.x, coord.y, cause));
		};

		let tile_x = (coord.x % 256) as u8;
		let tile_y = (coord.y % 256) as u8;
		if !block.contains_column(tile_x) {
			return Err(Error::not_found(coord.z, coord.x, coord.y, NotFoundCause::TileColumn));
		}
		if !block.contains_row(tile_y) {
			return Err(Error::not_found(coord.z, coord.x, coord.y, NotFoundCause::TileRow));
		}

		let tile_index = self.get_tile_index(block).await?;
		let tile_range = tile_index.get(block.index_of(tile_x, tile_y))?;
		if tile_range.length == 0 {
			return Err(Error::not_found(coord.z, coord.x, coord.y, NotFoundCause::EmptySlot));
		}

		trace!("fetching {} bytes for tile {coord:?}", tile_range.length);
		let blob = self.reader.read_range(&tile_range).await?;
		Ok(Tile {
			data: decompress(blob, &header.compression)?,
			format: header.tile_format,
		})
	}

	/// The tile index of one block, cached per block coordinate.
	async fn get_tile_index(&self, block: &BlockDefinition) -> Result<Arc<TileIndex>> {
		let cell = {
			let mut cells = self.tile_indexes.lock().unwrap_or_else(PoisonError::into_inner);
			cells
				.entry(block.coord())
				.or_insert_with(|| Arc::new(OnceCell::new()))
				.clone()
		};

		let index = cell
			.get_or_try_init(|| async {
				trace!("loading tile index of block {:?}", block.coord());
				let blob = self.reader.read_range(&block.tile_index_range).await?;
				Ok::<_, Error>(Arc::new(TileIndex::from_brotli_blob(&blob, block.count_tiles())?))
			})
			.await?;

		Ok(index.clone())
	}
}

impl fmt::Debug for CloudTilesReader {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CloudTilesReader")
			.field("source", &self.reader.get_name())
			.field("header", &self.header.get())
			.finish()
	}
}
