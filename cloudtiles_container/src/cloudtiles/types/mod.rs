//! Types implementing the sections of a cloudtiles archive: the fixed
//! header, the block index, per-block tile indexes and the tiles themselves.

mod block_definition;
pub use block_definition::BlockDefinition;

mod block_index;
pub use block_index::BlockIndex;

mod file_header;
pub use file_header::FileHeader;

mod tile;
pub use tile::Tile;

mod tile_index;
pub use tile_index::TileIndex;
