//! API client and error types.
use std::sync::Arc;

use http::{
	Method, StatusCode,
	header::{ACCEPT, AUTHORIZATION},
};
use serde::de::DeserializeOwned;

use crate::{
	endpoints::token::AccessGrant,
	query::{EncodingError, RequestDescription},
	server::{ApiError, AuthorizationError},
	transport::{APPLICATION_JSON, HttpClient},
	util::build_url,
};

mod config;
mod session;

pub use config::*;
pub use session::*;

/// Credentials attached to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auth {
	/// The application's server token (products and estimates).
	ServerToken,

	/// The user's OAuth 2.0 bearer token (history, profile, ride requests).
	OAuth,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Encoding(#[from] EncodingError),

	#[error("unable to send request: {0}")]
	Transport(String),

	#[error("unable to decode response: {0}")]
	Decode(String),

	#[error("authorization rejected: {0}")]
	AuthorizationRejected(AuthorizationError),

	#[error("request rejected: {0}")]
	ApiRejected(ApiError),

	#[error("unexpected token type `{0}`")]
	UnexpectedTokenType(String),

	#[error("server responded with status code: {0}")]
	ServerError(StatusCode),

	#[error("authorization has not begun")]
	NoAuthorizationSession,

	#[error("no access grant, authorize the client first")]
	NoAccessGrant,

	#[error("no server token configured")]
	NoServerToken,

	#[cfg(feature = "axum")]
	#[error("authorization callback failed: {0}")]
	Callback(String),
}

impl Error {
	pub fn transport(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("transport error: {msg}");
		Self::Transport(msg)
	}

	pub fn decode(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("decode error: {msg}");
		Self::Decode(msg)
	}

	pub fn server(status: StatusCode) -> Self {
		log::error!("unexpected server response status: {status}");
		Self::ServerError(status)
	}
}

/// Uber API client.
///
/// Holds an optional server token, used by the product and estimate
/// endpoints, and at most one [`AuthorizationSession`], used by the
/// endpoints acting on behalf of a user. Which one a request uses is fixed
/// by the endpoint (see [`Auth`]).
///
/// ```no_run
/// # async fn run(http_client: impl uber_api::HttpClient) -> Result<(), uber_api::Error> {
/// use uber_api::{Client, scope_token};
///
/// let mut client = Client::new(http_client).with_server_token("SERVER_TOKEN");
/// let products = client.products(37.7759792, -122.41823).await?;
///
/// let url = client.begin_authorization(
/// 	"CLIENT_ID",
/// 	"CLIENT_SECRET",
/// 	"https://example.com/callback",
/// 	[scope_token!("profile")],
/// )?;
/// // Send the user to `url`, then exchange the code they are redirected with.
/// client.exchange_code("AUTHORIZATION_CODE").await?;
/// let me = client.user_profile().await?;
/// # Ok(())
/// # }
/// ```
pub struct Client<H> {
	pub(crate) http_client: H,
	pub(crate) config: ClientConfig,
	server_token: Option<String>,
	pub(crate) session: Option<AuthorizationSession>,
}

impl<H> Client<H> {
	pub fn new(http_client: H) -> Self {
		Self {
			http_client,
			config: ClientConfig::default(),
			server_token: None,
			session: None,
		}
	}

	pub fn with_config(self, config: ClientConfig) -> Self {
		Self { config, ..self }
	}

	pub fn with_server_token(self, server_token: impl Into<String>) -> Self {
		Self {
			server_token: Some(server_token.into()),
			..self
		}
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	pub fn session(&self) -> Option<&AuthorizationSession> {
		self.session.as_ref()
	}

	pub fn authorization_state(&self) -> AuthorizationState {
		self.session
			.as_ref()
			.map(AuthorizationSession::state)
			.unwrap_or(AuthorizationState::Unauthorized)
	}

	/// Access grant obtained by the last successful exchange or refresh.
	pub fn current_grant(&self) -> Option<Arc<AccessGrant>> {
		self.session.as_ref().and_then(AuthorizationSession::grant)
	}

	fn authorization_header(&self, auth: Auth) -> Result<String, Error> {
		match auth {
			Auth::ServerToken => self
				.server_token
				.as_ref()
				.map(|token| format!("Token {token}"))
				.ok_or(Error::NoServerToken),
			Auth::OAuth => self
				.current_grant()
				.map(|grant| grant.token.bearer_header())
				.ok_or(Error::NoAccessGrant),
		}
	}
}

impl<H: HttpClient> Client<H> {
	/// Sends a request and decodes the JSON response.
	pub(crate) async fn call<T: DeserializeOwned>(
		&self,
		method: Method,
		host: &str,
		endpoint: &str,
		description: Option<&RequestDescription>,
		auth: Auth,
	) -> Result<T, Error> {
		let response = self
			.execute(method, host, endpoint, description, auth)
			.await?;
		serde_json::from_slice(response.body()).map_err(Error::decode)
	}

	/// Sends a request, returning successful responses undecoded.
	///
	/// Parameters are sent in the URL query, whatever the method.
	pub(crate) async fn execute(
		&self,
		method: Method,
		host: &str,
		endpoint: &str,
		description: Option<&RequestDescription>,
		auth: Auth,
	) -> Result<http::Response<Vec<u8>>, Error> {
		let url = build_url(host, endpoint, description)?;
		log::debug!("{method} {endpoint}");

		let request = http::Request::builder()
			.method(method)
			.uri(url)
			.header(AUTHORIZATION, self.authorization_header(auth)?)
			.header(ACCEPT, APPLICATION_JSON)
			.body(Vec::new())
			.map_err(Error::transport)?;

		let response = self.http_client.send(request).await?;
		check_status(endpoint, response)
	}
}

fn check_status(
	endpoint: &str,
	response: http::Response<Vec<u8>>,
) -> Result<http::Response<Vec<u8>>, Error> {
	let status = response.status();

	if status == StatusCode::NOT_FOUND {
		return Err(Error::ApiRejected(ApiError::new(
			format!("Endpoint '{endpoint}' not found."),
			"",
		)));
	}

	if status.is_success() {
		return Ok(response);
	}

	let error: ApiError = serde_json::from_slice(response.body()).map_err(Error::decode)?;
	if error.is_unidentified() {
		return Err(Error::server(status));
	}

	Err(Error::ApiRejected(error))
}
