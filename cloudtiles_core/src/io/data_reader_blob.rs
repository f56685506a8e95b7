//! This module provides an in-memory byte source, used by tests and by
//! callers that already hold a complete archive in a buffer.

use super::DataReaderTrait;
use crate::{
	error::{Error, Result},
	types::{Blob, ByteRange},
};
use async_trait::async_trait;

/// A byte source over an in-memory buffer.
#[derive(Debug)]
pub struct DataReaderBlob {
	data: Vec<u8>,
}

impl DataReaderBlob {
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

impl From<Blob> for DataReaderBlob {
	fn from(blob: Blob) -> Self {
		DataReaderBlob { data: blob.into_vec() }
	}
}

impl From<Vec<u8>> for DataReaderBlob {
	fn from(data: Vec<u8>) -> Self {
		DataReaderBlob { data }
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderBlob {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		// checked_add: a corrupt index record can point near u64::MAX.
		let end = range.offset.checked_add(range.length);
		if end.is_none_or(|end| end > self.data.len() as u64) {
			return Err(Error::network(
				self.get_name(),
				range,
				format!("source is only {} bytes long", self.data.len()),
			));
		}
		Ok(Blob::from(&self.data[range.as_range_usize()]))
	}

	fn get_name(&self) -> &str {
		"memory"
	}
}
