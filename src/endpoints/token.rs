use http::{
	Method, StatusCode,
	header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
	AccessTokenBuf, Client, ScopeToken,
	client::Error,
	endpoints::authorization::AuthFields,
	query::{RequestDescription, encode},
	server::AuthorizationError,
	transport::{APPLICATION_JSON, APPLICATION_X_WWW_FORM_URLENCODED, HttpClient},
	util::serialize_query,
};

/// Path of the token endpoint, relative to the authorization host.
pub const TOKEN_ENDPOINT: &str = "token";

/// The only token type the API accepts.
pub const BEARER: &str = "Bearer";

/// Access Token Response.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-5.1>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGrant {
	/// Access token issued by the authorization server.
	#[serde(rename = "access_token")]
	pub token: AccessTokenBuf,

	/// Type of the token. Value is case insensitive.
	pub token_type: String,

	/// Lifetime in seconds of the access token.
	pub expires_in: Option<u64>,

	/// Token used to obtain a new grant once this one expires.
	pub refresh_token: Option<String>,

	/// Scope of the access token.
	///
	/// Omitted by the server when identical to the requested scope.
	///
	/// Kept as sent: the server may echo an empty or loosely spaced scope.
	pub scope: Option<String>,
}

impl AccessGrant {
	pub fn is_bearer(&self) -> bool {
		self.token_type.eq_ignore_ascii_case(BEARER)
	}

	pub fn has_scope(&self, token: &ScopeToken) -> bool {
		self.scope
			.as_deref()
			.is_some_and(|scope| scope.split_ascii_whitespace().any(|t| t == token.as_str()))
	}
}

/// Grant presented to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant<'a> {
	/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.3>
	AuthorizationCode(&'a str),

	/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-6>
	RefreshToken(&'a str),
}

impl Grant<'_> {
	pub fn grant_type(&self) -> &'static str {
		match self {
			Self::AuthorizationCode(_) => "authorization_code",
			Self::RefreshToken(_) => "refresh_token",
		}
	}
}

pub struct TokenRequest<'a> {
	pub auth: AuthFields<'a>,
	pub grant: Grant<'a>,
}

impl TokenRequest<'_> {
	pub fn describe(&self) -> RequestDescription {
		let description = RequestDescription::new()
			.embed(self.auth.describe())
			.required("client_secret", self.auth.client_secret)
			.required("grant_type", self.grant.grant_type());

		match self.grant {
			Grant::AuthorizationCode(code) => description.required("code", code),
			Grant::RefreshToken(token) => description.required("refresh_token", token),
		}
	}
}

impl<H: HttpClient> Client<H> {
	/// Exchanges the authorization `code` the user was redirected with for an
	/// access grant.
	///
	/// The grant is stored in the session and used by every endpoint acting
	/// on behalf of the user. On error the current grant, if any, is kept.
	pub async fn exchange_code(&self, code: &str) -> Result<(), Error> {
		self.request_grant(Grant::AuthorizationCode(code)).await
	}

	/// Replaces the current grant using its refresh token.
	pub async fn refresh_access_token(&self) -> Result<(), Error> {
		let grant = self.current_grant().ok_or(Error::NoAccessGrant)?;
		let refresh_token = grant
			.refresh_token
			.as_deref()
			.filter(|t| !t.is_empty())
			.ok_or(Error::NoAccessGrant)?;

		self.request_grant(Grant::RefreshToken(refresh_token)).await
	}

	async fn request_grant(&self, grant: Grant<'_>) -> Result<(), Error> {
		let session = self.session.as_ref().ok_or(Error::NoAuthorizationSession)?;
		let request = TokenRequest {
			auth: session.auth_fields(),
			grant,
		};

		let body = serialize_query(&encode(Some(&request.describe()))?);
		let uri = format!(
			"{}/{TOKEN_ENDPOINT}",
			self.config.auth_host.trim_end_matches('/')
		);

		let request = http::Request::builder()
			.method(Method::POST)
			.uri(uri)
			.header(CONTENT_TYPE, APPLICATION_X_WWW_FORM_URLENCODED)
			.header(ACCEPT, APPLICATION_JSON)
			.body(body.into_bytes())
			.map_err(Error::transport)?;

		let response = self.http_client.send(request).await?;
		let grant = decode_grant(response)?;

		log::debug!("access grant obtained, expires in {:?}s", grant.expires_in);
		session.publish(grant);
		Ok(())
	}
}

fn decode_grant(response: http::Response<Vec<u8>>) -> Result<AccessGrant, Error> {
	let status = response.status();

	if status != StatusCode::OK {
		let error: AuthorizationError =
			serde_json::from_slice(response.body()).map_err(Error::decode)?;
		log::warn!("token request rejected with status {status}: {error}");
		return Err(Error::AuthorizationRejected(error));
	}

	let grant: AccessGrant = serde_json::from_slice(response.body()).map_err(Error::decode)?;

	if !grant.is_bearer() {
		log::warn!("unexpected token type `{}`", grant.token_type);
		return Err(Error::UnexpectedTokenType(grant.token_type));
	}

	Ok(grant)
}
