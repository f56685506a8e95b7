//! CloudTiles Container: lazy random-access reading of cloudtiles archives.
//!
//! This crate implements the `*.cloudtiles` container format on top of the
//! byte sources from `cloudtiles_core`:
//! - [`CloudTilesReader`], the reader with lazily populated section caches,
//! - the format types for the header, block index and tile indexes.
//!
//! Opening an archive performs no I/O; the header, metadata, block index
//! and per-block tile indexes are fetched on first use and cached, so a
//! single tile request on a remote archive costs a handful of small range
//! reads instead of a full download.
//!
//! # Quick start
//! ```no_run
//! use cloudtiles_container::CloudTilesReader;
//! use cloudtiles_core::TileCoord;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let reader = CloudTilesReader::open_url("https://example.org/world.cloudtiles")?;
//!
//!     let tile = reader.get_tile(&TileCoord::new(12, 2200, 1345)).await?;
//!     println!("{} bytes of {}", tile.data.len(), tile.media_type());
//!     Ok(())
//! }
//! ```

mod cloudtiles;
pub use cloudtiles::*;
