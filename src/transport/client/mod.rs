use crate::client::Error;

#[cfg(feature = "reqwest")]
mod reqwest;

/// Sends HTTP requests on behalf of the [`Client`](crate::Client).
///
/// Any response, whatever its status, is a successful send: the client maps
/// 404 and error bodies itself. Only failing to get a response at all is an
/// error, reported as [`Error::Transport`] with a message naming the request.
///
/// Tests swap in a recording stub; the `reqwest` feature provides the
/// production implementation.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error>;
}

/// Lets several clients share one connection pool.
impl<T> HttpClient for &T
where
	T: HttpClient,
{
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error> {
		T::send(*self, request).await
	}
}
