//! Utilities for compressing and decompressing archive data.

mod compression;

pub use compression::*;
