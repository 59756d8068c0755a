//! [`HttpClient`] backed by a [`reqwest::Client`].
//!
//! Timeouts, proxies and TLS roots are whatever the `reqwest::Client` was
//! built with.
use crate::{client::Error, transport::HttpClient};

/// Failure to reach the API, tagged with the request line.
///
/// Query strings are left out: they may carry client credentials.
fn failed(method: &http::Method, path: &str, e: impl std::fmt::Display) -> Error {
	Error::transport(format!("{method} {path}: {e}"))
}

impl HttpClient for reqwest::Client {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error> {
		let method = request.method().clone();
		let path = request.uri().path().to_owned();

		log::debug!("{method} {path}");
		log::trace!("HTTP request: {request:?}");

		let request: reqwest::Request = request
			.try_into()
			.map_err(|e| failed(&method, &path, e))?;
		let response = self
			.execute(request)
			.await
			.map_err(|e| failed(&method, &path, e))?;

		let mut builder = http::Response::builder().status(response.status());

		#[cfg(not(target_arch = "wasm32"))]
		{
			builder = builder.version(response.version());
		}

		if let Some(headers) = builder.headers_mut() {
			headers.extend(response.headers().clone());
		}

		let body = response
			.bytes()
			.await
			.map_err(|e| failed(&method, &path, e))?;
		let response = builder
			.body(body.to_vec())
			.map_err(|e| failed(&method, &path, e))?;

		log::trace!("HTTP response: {response:?}");
		Ok(response)
	}
}
