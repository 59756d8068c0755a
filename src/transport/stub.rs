//! Canned-response [`HttpClient`] for unit tests.
use std::{
	collections::VecDeque,
	sync::{Mutex, PoisonError},
};

use http::{HeaderMap, Method, header::AsHeaderName};

use crate::{client::Error, transport::HttpClient};

/// Request as seen by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: Method,
	pub uri: String,
	pub headers: HeaderMap,
	pub body: String,
}

impl RecordedRequest {
	pub fn header(&self, name: impl AsHeaderName) -> Option<&str> {
		self.headers.get(name).and_then(|v| v.to_str().ok())
	}
}

/// Replays queued responses in order and fails like a refused connection
/// once the queue is empty.
#[derive(Default)]
pub struct StubHttpClient {
	responses: Mutex<VecDeque<http::Response<Vec<u8>>>>,
	requests: Mutex<Vec<RecordedRequest>>,
}

impl StubHttpClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn response(status: u16, body: &str) -> http::Response<Vec<u8>> {
		http::Response::builder()
			.status(status)
			.body(body.as_bytes().to_vec())
			.unwrap()
	}

	pub fn respond(self, status: u16, body: &str) -> Self {
		self.responses
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push_back(Self::response(status, body));
		self
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests().pop().expect("no request was sent")
	}
}

impl HttpClient for StubHttpClient {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error> {
		let (parts, body) = request.into_parts();
		self.requests
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(RecordedRequest {
				method: parts.method,
				uri: parts.uri.to_string(),
				headers: parts.headers,
				body: String::from_utf8_lossy(&body).into_owned(),
			});

		self.responses
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.pop_front()
			.ok_or_else(|| Error::transport("connection refused"))
	}
}
