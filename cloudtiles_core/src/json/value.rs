//! JSON document model backing the archive metadata.
//!
//! Deliberately hand-rolled: the only JSON this crate ever touches is the
//! metadata section of an archive, which needs a strict little parser and a
//! compact serializer but no schema layer and no serde machinery. Broken
//! documents are rejected here; recovery into the empty document happens one
//! level up, in [`crate::Metadata`].

use super::{escape_json_string, parse_json_str, stringify};
use crate::{
	error::{Error, Result},
	types::Blob,
};
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// Any JSON value: array, boolean, null, number, object or string.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Parses a blob of JSON text. Invalid UTF-8 is a JSON error, not a panic.
	pub fn parse_blob(blob: &Blob) -> Result<JsonValue> {
		let text =
			std::str::from_utf8(blob.as_slice()).map_err(|e| Error::Json(format!("document is not valid UTF-8: {e}")))?;
		parse_json_str(text)
	}

	/// The JSON type as a lowercase string, for error messages.
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serializes to a compact JSON string without any whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => Err(Error::Json(format!("expected a string, found a {}", self.type_as_str()))),
		}
	}

	pub fn as_string(&self) -> Result<String> {
		self.as_str().map(str::to_owned)
	}

	pub fn as_number(&self) -> Result<f64> {
		if let JsonValue::Number(value) = self {
			Ok(*value)
		} else {
			Err(Error::Json(format!("expected a number, found a {}", self.type_as_str())))
		}
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			Err(Error::Json(format!("expected an array, found a {}", self.type_as_str())))
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			Err(Error::Json(format!("expected an object, found a {}", self.type_as_str())))
		}
	}

	pub fn into_object(self) -> Result<JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			Err(Error::Json(format!("expected an object, found a {}", self.type_as_str())))
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<&String> for JsonValue {
	fn from(input: &String) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

/// `From<Number>` for number types with a lossless f64 conversion.
macro_rules! impl_from_number_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

/// `From<Number>` for number types that may round when cast to f64.
macro_rules! impl_from_number_lossy {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(input as f64)
				}
			}
		)+
	};
}

impl_from_number_lossless!(f32, u8, u16, u32, i8, i16, i32);
impl_from_number_lossy!(u64, usize, i64);

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

/// A JSON object backed by a `BTreeMap`, so iteration order is stable.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// The string at `key`, or `None` if absent. A non-string value is an error.
	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(JsonValue::as_string).transpose()
	}

	/// The number at `key`, or `None` if absent. A non-number value is an error.
	pub fn get_number(&self, key: &str) -> Result<Option<f64>> {
		self.get(key).map(JsonValue::as_number).transpose()
	}

	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

/// A JSON array backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	pub fn as_string_vec(&self) -> Result<Vec<String>> {
		self.0.iter().map(JsonValue::as_string).collect()
	}

	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn converts_primitives() {
		assert_eq!(JsonValue::from("hello"), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(String::from("hi")), JsonValue::String("hi".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42u8), JsonValue::Number(42.0));
		assert_eq!(JsonValue::from(-7i32), JsonValue::Number(-7.0));
	}

	#[test]
	fn converts_vectors_and_pairs() {
		assert_eq!(
			JsonValue::from(vec!["a", "b"]),
			JsonValue::Array(JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]))
		);
		assert_eq!(
			JsonValue::from(vec![("key", "value")]),
			JsonValue::Object(JsonObject::from(vec![("key", "value")]))
		);
	}

	#[test]
	fn reports_its_type() {
		assert_eq!(JsonValue::from("x").type_as_str(), "string");
		assert_eq!(JsonValue::from(1).type_as_str(), "number");
		assert_eq!(JsonValue::from(false).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::from(vec![1]).type_as_str(), "array");
		assert_eq!(JsonValue::from(JsonObject::new()).type_as_str(), "object");
	}

	#[test]
	fn accessors_check_the_type() {
		let text = JsonValue::from("value");
		assert_eq!(text.as_str().unwrap(), "value");
		assert_eq!(text.as_string().unwrap(), "value");
		assert_eq!(
			text.as_number().unwrap_err().to_string(),
			"JSON error: expected a number, found a string"
		);

		let number = JsonValue::from(42);
		assert_eq!(number.as_number().unwrap(), 42.0);
		assert_eq!(
			number.as_string().unwrap_err().to_string(),
			"JSON error: expected a string, found a number"
		);

		assert!(JsonValue::from(vec![1]).as_array().is_ok());
		assert!(JsonValue::from(JsonObject::new()).as_object().is_ok());
		assert!(JsonValue::Null.as_object().is_err());
		assert!(JsonValue::Null.into_object().is_err());
	}

	#[test]
	fn object_get_and_set() {
		let mut object = JsonObject::new();
		assert!(object.is_empty());

		object.set("name", "test");
		object.set("count", 3);

		assert_eq!(object.get("name"), Some(&JsonValue::from("test")));
		assert_eq!(object.get("missing"), None);
		assert_eq!(object.get_string("name").unwrap(), Some("test".to_string()));
		assert_eq!(object.get_string("missing").unwrap(), None);
		assert_eq!(object.get_number("count").unwrap(), Some(3.0));
		assert!(object.get_string("count").is_err());
	}

	#[test]
	fn object_iterates_in_key_order() {
		let object = JsonObject::from(vec![("z", 1), ("a", 2), ("m", 3)]);
		let keys: Vec<&String> = object.iter().map(|(key, _)| key).collect();
		assert_eq!(keys, ["a", "m", "z"]);
	}

	#[test]
	fn array_conversions() {
		let array = JsonArray::from(vec!["a", "b"]);
		assert_eq!(array.as_string_vec().unwrap(), vec!["a", "b"]);
		assert_eq!(array.as_vec().len(), 2);

		assert_eq!(
			JsonArray::from(vec![1, 2]).as_string_vec().unwrap_err().to_string(),
			"JSON error: expected a string, found a number"
		);
		assert_eq!(JsonArray::from(vec![1, 2]).as_number_vec().unwrap(), vec![1.0, 2.0]);
	}

	#[test]
	fn parses_from_blob() {
		let blob = Blob::from(r#"{"key":"value","number":42}"#);
		let parsed = JsonValue::parse_blob(&blob).unwrap();
		assert_eq!(
			parsed,
			JsonValue::from(vec![
				("key", JsonValue::from("value")),
				("number", JsonValue::from(42.0)),
			])
		);

		let broken = Blob::from(vec![0xff, 0xfe, 0x01]);
		assert!(
			JsonValue::parse_blob(&broken)
				.unwrap_err()
				.to_string()
				.contains("not valid UTF-8")
		);
	}

	#[test]
	fn debug_and_display() {
		let object = JsonObject::from(vec![("k", 1)]);
		assert_eq!(object.to_string(), r#"{"k":1}"#);

		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(42.0)]"#);
	}
}
