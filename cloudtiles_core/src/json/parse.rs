//! Recursive-descent JSON parser over a [`ByteIterator`].

use super::{ByteIterator, JsonArray, JsonObject, JsonValue};
use crate::error::Result;
use std::collections::BTreeMap;

/// Parses a complete JSON value from a string slice.
///
/// Trailing bytes after the first value are ignored; a later duplicate key
/// inside an object wins.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	parse_json_value(&mut ByteIterator::new(json.as_bytes()))
}

fn parse_json_value(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array(iter),
		b'{' => parse_object(iter),
		b'"' => parse_quoted_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'.' || d == b'-' => parse_number(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_object(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.advance(); // '{'
	let mut entries = BTreeMap::new();
	loop {
		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b'}' => {
				iter.advance();
				break;
			}
			b'"' => {
				let key = parse_quoted_string(iter)?;

				iter.skip_whitespace();
				if iter.expect_next_byte()? != b':' {
					return Err(iter.format_error("expected ':'"));
				}

				entries.insert(key, parse_json_value(iter)?);

				iter.skip_whitespace();
				match iter.expect_next_byte()? {
					b',' => {}
					b'}' => break,
					_ => return Err(iter.format_error("expected ',' or '}'")),
				}
			}
			_ => return Err(iter.format_error("parsing object, expected '\"' or '}'")),
		}
	}
	Ok(JsonValue::Object(JsonObject(entries)))
}

fn parse_array(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.advance(); // '['
	let mut values = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(JsonValue::Array(JsonArray(values)));
	}

	values.push(parse_json_value(iter)?);
	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => values.push(parse_json_value(iter)?),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
	Ok(JsonValue::Array(JsonArray(values)))
}

fn parse_quoted_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	let mut hex = [0u8; 4];

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					for i in &mut hex {
						*i = iter.expect_next_byte()?;
					}
					let code_point = std::str::from_utf8(&hex)
						.ok()
						.and_then(|h| u16::from_str_radix(h, 16).ok())
						.ok_or_else(|| iter.format_error("invalid unicode escape"))?;
					bytes.extend_from_slice(
						String::from_utf16(&[code_point])
							.map_err(|_| iter.format_error("invalid unicode code point"))?
							.as_bytes(),
					);
				}
				c => return Err(iter.format_error(&format!("unknown escape character '\\{}'", c as char))),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(|_| iter.format_error("string is not valid UTF-8"))
}

fn parse_number(iter: &mut ByteIterator) -> Result<f64> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		number.push(iter.expect_next_byte()?);
	}
	if !has_digits {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let mut fraction_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			fraction_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !fraction_digits {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let mut exponent_digits = false;
		while let Some(b'0'..=b'9') = iter.peek() {
			exponent_digits = true;
			number.push(iter.expect_next_byte()?);
		}
		if !exponent_digits {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	// ASCII by construction, so only f64 parsing can fail here.
	std::str::from_utf8(&number)
		.ok()
		.and_then(|text| text.parse::<f64>().ok())
		.ok_or_else(|| iter.format_error("invalid number"))
}

fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}
