//! `*.cloudtiles` container
//!
//! A cloudtiles archive is one large binary file that is only ever accessed
//! through byte-range reads, so it can be served unchanged from a plain
//! file, an HTTP server or an object store.
//!
//! # File layout
//!
//! | Section | Content |
//! |-------------|---------------------------------------------------------|
//! | header | 62 bytes, fixed layout (see [`FileHeader`]) |
//! | metadata | brotli compressed JSON document |
//! | blocks | per block: tile payloads, then the block's tile index |
//! | block index | brotli compressed directory of all blocks |
//!
//! Tiles are grouped into blocks of up to 256x256 tiles per zoom level. The
//! block index locates every block and its tile index section
//! ([`BlockDefinition`]); the tile index locates every tile payload as an
//! absolute byte range in the file ([`TileIndex`]). Metadata and both index
//! sections are always brotli compressed; tile payloads use the compression
//! named in the header.
//!
//! # Usage example
//!
//! ```no_run
//! use cloudtiles_container::*;
//! use cloudtiles_core::*;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reader = CloudTilesReader::open_path(Path::new("/data/world.cloudtiles"))?;
//!
//!     println!("metadata: {}", reader.get_metadata().await?.as_string());
//!     println!("zoom levels: {:?}", reader.get_zoom_levels().await?);
//!
//!     let tile = reader.get_tile(&TileCoord::new(14, 8800, 5374)).await?;
//!     println!("{} bytes of {}", tile.data.len(), tile.media_type());
//!     Ok(())
//! }
//! ```

mod reader;
pub use reader::CloudTilesReader;

mod types;
pub use types::*;

#[cfg(test)]
mod test_archive;
