//! The archive metadata document.
//!
//! Metadata is an arbitrary JSON object (name, attribution, vector layer
//! descriptions and so on) stored brotli-compressed in the archive. A broken
//! document never takes the reader down: parsing falls back to an empty
//! document and logs what went wrong.

use crate::{
	error::Result,
	json::{JsonObject, JsonValue},
	types::Blob,
};
use log::warn;
use std::fmt::Debug;

/// A parsed metadata document with stable key order.
#[derive(Clone, Default, PartialEq)]
pub struct Metadata {
	object: JsonObject,
}

impl Metadata {
	/// Parses a metadata blob. The document root must be a JSON object.
	pub fn try_from_blob(blob: &Blob) -> Result<Metadata> {
		Ok(Metadata {
			object: JsonValue::parse_blob(blob)?.into_object()?,
		})
	}

	/// Parses a metadata blob, recovering any parse failure into the empty
	/// document. This is the entry point the reader uses: metadata is
	/// advisory and must never make an otherwise readable archive fail.
	#[must_use]
	pub fn try_from_blob_or_default(blob: &Blob) -> Metadata {
		Metadata::try_from_blob(blob).unwrap_or_else(|e| {
			warn!("cannot parse archive metadata, falling back to an empty document: {e}");
			Metadata::default()
		})
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.object.get(key)
	}

	/// The string value at `key`, or `None` if the key is absent or holds a
	/// non-string value.
	#[must_use]
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(|value| value.as_str().ok())
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.object.is_empty()
	}

	/// Serializes the document back to compact JSON.
	#[must_use]
	pub fn as_string(&self) -> String {
		self.object.stringify()
	}

	#[must_use]
	pub fn as_blob(&self) -> Blob {
		Blob::from(self.as_string())
	}
}

impl Debug for Metadata {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Metadata({})", self.as_string())
	}
}
