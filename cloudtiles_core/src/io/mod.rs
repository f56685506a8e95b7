//! Byte sources and binary coding.
//!
//! This module bundles the byte source contract ([`DataReaderTrait`]) with
//! the shipped adapters (file, HTTP, in-memory) and the bounds-checked
//! big-endian reader and writer used for the archive's fixed-layout
//! sections.

mod data_reader;
mod data_reader_blob;
mod data_reader_file;
mod data_reader_http;
mod value_reader;
mod value_writer;

pub use data_reader::*;
pub use data_reader_blob::*;
pub use data_reader_file::*;
pub use data_reader_http::*;
pub use value_reader::*;
pub use value_writer::*;
