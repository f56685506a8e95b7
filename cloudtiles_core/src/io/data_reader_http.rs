//! This module provides a byte source over an HTTP(S) endpoint.
//!
//! Ranges are requested with a `Range` header; the server must answer with
//! status 206 and a `Content-Range` that matches the request exactly, so a
//! misconfigured server that ignores range requests is detected instead of
//! silently handing back the whole archive. Retryable transport errors are
//! retried a bounded number of times with exponential backoff; retry policy
//! lives here and not in the archive reader.

use super::DataReaderTrait;
use crate::{
	error::{Error, Result},
	types::{Blob, ByteRange},
};
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use reqwest::{Client, Method, Request, StatusCode, Url, header::HeaderValue};
use std::sync::LazyLock;
use std::time::Duration;
use tokio::time::sleep;

const MAX_RETRIES: u32 = 3;

static RE_CONTENT_RANGE: LazyLock<Regex> = LazyLock::new(|| {
	RegexBuilder::new(r"^bytes (\d+)-(\d+)/\d+$")
		.case_insensitive(true)
		.build()
		.unwrap()
});

fn is_retryable_error(err: &reqwest::Error) -> bool {
	err.is_connect() || err.is_timeout() || err.is_body()
}

/// A byte source over an HTTP(S) endpoint.
#[derive(Debug)]
pub struct DataReaderHttp {
	client: Client,
	name: String,
	url: Url,
}

impl DataReaderHttp {
	/// Creates a `DataReaderHttp` from a URL.
	///
	/// # Errors
	///
	/// Fails with [`Error::Source`] for URL schemes other than `http` and
	/// `https`.
	pub fn from_url(url: Url) -> Result<Box<DataReaderHttp>> {
		match url.scheme() {
			"http" | "https" => (),
			other => {
				return Err(Error::source(
					url.as_str(),
					format!("unsupported URL scheme '{other}', expected 'http' or 'https'"),
				));
			}
		}

		let client = Client::builder()
			.tcp_keepalive(Duration::from_secs(600))
			.use_rustls_tls()
			.build()
			.map_err(|e| Error::source(url.as_str(), e))?;

		Ok(Box::new(DataReaderHttp {
			client,
			name: url.to_string(),
			url,
		}))
	}
}

#[async_trait]
impl DataReaderTrait for DataReaderHttp {
	async fn read_range(&self, range: &ByteRange) -> Result<Blob> {
		let request_range: String = format!("bytes={}-{}", range.offset, range.length + range.offset - 1);
		let header_value: HeaderValue = request_range
			.parse()
			.map_err(|e| Error::network(&self.name, range, format!("invalid Range header value: {e}")))?;

		for attempt in 0..=MAX_RETRIES {
			if attempt > 0 {
				let backoff = Duration::from_secs(1 << (attempt - 1));
				log::warn!(
					"retry attempt {attempt}/{MAX_RETRIES} reading {range:?} from '{}', waiting {backoff:?}",
					self.url
				);
				sleep(backoff).await;
			}

			let mut request = Request::new(Method::GET, self.url.clone());
			request.headers_mut().append("range", header_value.clone());

			let response = match self.client.execute(request).await {
				Ok(r) => r,
				Err(e) if is_retryable_error(&e) && attempt < MAX_RETRIES => {
					log::warn!("retryable error: {e}");
					continue;
				}
				Err(e) => return Err(Error::network(&self.name, range, e)),
			};

			if response.status() != StatusCode::PARTIAL_CONTENT {
				return Err(Error::network(
					&self.name,
					range,
					format!("expected HTTP 206 (Partial Content), got {}", response.status()),
				));
			}

			let content_range = response
				.headers()
				.get("content-range")
				.ok_or_else(|| Error::network(&self.name, range, "response is missing Content-Range header"))?
				.to_str()
				.map_err(|e| Error::network(&self.name, range, format!("unreadable Content-Range header: {e}")))?
				.to_string();

			let (start, end) = parse_content_range(&content_range)
				.ok_or_else(|| Error::network(&self.name, range, format!("unexpected Content-Range: '{content_range}'")))?;

			if start != range.offset || end != range.offset + range.length - 1 {
				return Err(Error::network(
					&self.name,
					range,
					format!("Content-Range mismatch: requested '{request_range}', got '{content_range}'"),
				));
			}

			let bytes = match response.bytes().await {
				Ok(b) => b,
				Err(e) if is_retryable_error(&e) && attempt < MAX_RETRIES => {
					log::warn!("retryable error reading response body: {e}");
					continue;
				}
				Err(e) => return Err(Error::network(&self.name, range, e)),
			};

			return Ok(Blob::from(&*bytes));
		}

		Err(Error::network(
			&self.name,
			range,
			format!("request failed after {MAX_RETRIES} retries"),
		))
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}

/// Extracts start and end offsets from a `Content-Range` header value of the
/// form `bytes <start>-<end>/<total>`.
fn parse_content_range(value: &str) -> Option<(u64, u64)> {
	let caps = RE_CONTENT_RANGE.captures(value)?;
	let start: u64 = caps[1].parse().ok()?;
	let end: u64 = caps[2].parse().ok()?;
	Some((start, end))
}
