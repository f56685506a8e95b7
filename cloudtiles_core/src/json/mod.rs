//! Minimal JSON support for the archive metadata document.
//!
//! No serde: the one JSON consumer in this crate is the metadata section, and
//! a small recursive-descent parser keeps the dependency surface flat.

mod byte_iterator;
mod parse;
mod stringify;
mod value;

pub use byte_iterator::ByteIterator;
pub use parse::parse_json_str;
pub use stringify::{escape_json_string, stringify};
pub use value::{JsonArray, JsonObject, JsonValue};
