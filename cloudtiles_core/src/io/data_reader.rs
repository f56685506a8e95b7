//! This module defines the `DataReaderTrait`, the byte source contract
//! consumed by the archive reader.
//!
//! A cloudtiles archive is one large file that is only ever accessed through
//! range reads. Implementations of this trait supply those ranges, whether
//! the archive sits on the local filesystem ([`super::DataReaderFile`]),
//! behind an HTTP server ([`super::DataReaderHttp`]) or in memory
//! ([`super::DataReaderBlob`]).

use crate::{
	error::Result,
	types::{Blob, ByteRange},
};
use async_trait::async_trait;
use std::fmt::Debug;

/// Type alias for a boxed dynamic implementation of the `DataReaderTrait`.
pub type DataReader = Box<dyn DataReaderTrait>;

/// A trait for reading byte ranges from a data source.
#[async_trait]
pub trait DataReaderTrait: Debug + Send + Sync {
	/// Reads a specific range of bytes from the data source.
	///
	/// # Errors
	///
	/// Fails with [`crate::Error::Network`] when the source cannot deliver the
	/// full range, including short reads past the end of the source.
	async fn read_range(&self, range: &ByteRange) -> Result<Blob>;

	/// Gets the name of the data source, for error messages and logging.
	fn get_name(&self) -> &str;
}
