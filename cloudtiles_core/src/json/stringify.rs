//! Compact JSON serialization.

use super::JsonValue;

/// Serializes a value to compact JSON without any whitespace.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) => n.to_string(),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Null => String::from("null"),
		JsonValue::Array(array) => array.stringify(),
		JsonValue::Object(object) => object.stringify(),
	}
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	input
		.chars()
		.map(|c| match c {
			'"' => "\\\"".to_string(),
			'\\' => "\\\\".to_string(),
			'\n' => "\\n".to_string(),
			'\r' => "\\r".to_string(),
			'\t' => "\\t".to_string(),
			'\u{08}' => "\\b".to_string(),
			'\u{0c}' => "\\f".to_string(),
			c if c.is_control() => format!("\\u{:04x}", c as u32),
			c => c.to_string(),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::super::parse_json_str;
	use super::*;
	use anyhow::Result;

	#[test]
	fn stringifies_primitives() -> Result<()> {
		assert_eq!(stringify(&parse_json_str("\"Hello, World!\"")?), "\"Hello, World!\"");
		assert_eq!(stringify(&parse_json_str("42")?), "42");
		assert_eq!(stringify(&parse_json_str("23.42")?), "23.42");
		assert_eq!(stringify(&parse_json_str("true")?), "true");
		assert_eq!(stringify(&parse_json_str("null")?), "null");
		Ok(())
	}

	#[test]
	fn escapes_round_trip() -> Result<()> {
		let text = "\"Line1\\nLine2\\rTab\\tBackslash\\\\ \\\"quoted\\\"\"";
		assert_eq!(stringify(&parse_json_str(text)?), text);
		Ok(())
	}

	#[test]
	fn keeps_unicode_untouched() -> Result<()> {
		assert_eq!(stringify(&parse_json_str("\"Unicode: 😊\"")?), "\"Unicode: 😊\"");
		Ok(())
	}

	#[test]
	fn stringifies_containers() -> Result<()> {
		assert_eq!(
			stringify(&parse_json_str("[\"item1\", 123, false, null]")?),
			"[\"item1\",123,false,null]"
		);
		assert_eq!(stringify(&parse_json_str("[]")?), "[]");
		assert_eq!(
			stringify(&parse_json_str("{\"key1\": \"value1\", \"key2\": 42}")?),
			"{\"key1\":\"value1\",\"key2\":42}"
		);
		assert_eq!(stringify(&parse_json_str("{}")?), "{}");
		assert_eq!(
			stringify(&parse_json_str(
				"{\"nested\": {\"array\": [\"value\", {\"inner_key\": 3.14}], \"boolean\": true}}"
			)?),
			"{\"nested\":{\"array\":[\"value\",{\"inner_key\":3.14}],\"boolean\":true}}"
		);
		Ok(())
	}

	#[test]
	fn escapes_control_characters() {
		assert_eq!(escape_json_string("Control:\x01\x02"), "Control:\\u0001\\u0002");
	}
}
