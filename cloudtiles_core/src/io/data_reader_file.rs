//! This module provides a byte source over a local file.
//!
//! The file is checked up front (it must exist, be absolute and be a regular
//! file); each range read clones the handle, seeks and reads exactly the
//! requested number of bytes. A read past the end of the file is reported as
//! a network error, the same class a remote source would produce.

use super::DataReaderTrait;
use crate::{
	error::{Error, Result},
	types::{Blob, ByteRange},
};
use async_trait::async_trait;
use std::{
	fs::File,
	io::{Read, Seek, SeekFrom},
	path::Path,
};

/// A byte source over a local file.
#[derive(Debug)]
pub struct DataReaderFile {
	name: String,
	file: File,
}

impl DataReaderFile {
	/// Opens a file and creates a `DataReaderFile` instance.
	///
	/// # Errors
	///
	/// Fails with [`Error::Source`] if the path does not exist, is not
	/// absolute, or is not a regular file.
	pub fn open(path: &Path) -> Result<Box<DataReaderFile>> {
		let name = path.to_string_lossy().to_string();

		if !path.exists() {
			return Err(Error::source(&name, "file does not exist"));
		}
		if !path.is_absolute() {
			return Err(Error::source(&name, "path must be absolute"));
		}
		if !path.is_file() {
			return Err(Error::source(&name, "path must be a regular file"));
		}

		let path = path
			.canonicalize()
			.map_err(|e| Error::source(&name, e))?;
		let file = File::open(&path).map_err(|e| Error::source(&name, e))?;

		Ok(Box::new(DataReaderFile {
			name: path.to_string_lossy().to_string(),
			file,
		}))
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderFile {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		let mut buffer = vec![0; range.length as usize];
		let mut file = self
			.file
			.try_clone()
			.map_err(|e| Error::network(&self.name, range, format!("failed to clone file handle: {e}")))?;
		file
			.seek(SeekFrom::Start(range.offset))
			.map_err(|e| Error::network(&self.name, range, format!("failed to seek: {e}")))?;
		file
			.read_exact(&mut buffer)
			.map_err(|e| Error::network(&self.name, range, e))?;
		Ok(Blob::from(buffer))
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}
