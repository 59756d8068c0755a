use crate::{
	Client, Scope, ScopeBuf, ScopeToken, State,
	client::AuthorizationSession,
	query::{EncodingError, RequestDescription},
	util::build_url,
};

/// Path of the authorization endpoint, relative to the authorization host.
pub const AUTHORIZE_ENDPOINT: &str = "authorize";

/// Client credentials, embedded in both the authorization and token
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFields<'a> {
	pub client_id: &'a str,
	pub client_secret: &'a str,
	pub redirect_uri: &'a str,
}

impl AuthFields<'_> {
	/// The secret is part of the credentials but never sent from here: the
	/// authorization URL is public, and the token request adds it itself.
	pub fn describe(&self) -> RequestDescription {
		RequestDescription::new()
			.required("client_id", self.client_id)
			.skipped(self.client_secret)
			.required("redirect_uri", self.redirect_uri)
	}
}

/// Authorization Request.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.1>
pub struct AuthorizationRequest<'a> {
	pub auth: AuthFields<'a>,
	pub scope: Option<&'a Scope>,
	pub state: &'a State,
}

impl AuthorizationRequest<'_> {
	pub fn describe(&self) -> RequestDescription {
		RequestDescription::new()
			.embed(self.auth.describe())
			.required("response_type", "code")
			.optional("scope", self.scope.map(|s| s.as_str()).unwrap_or_default())
			.optional("state", self.state.as_str())
	}
}

impl<H> Client<H> {
	/// Starts the authorization code flow.
	///
	/// Replaces any previous session (and its grant) with the given
	/// credentials and returns the URL the user must visit to authorize the
	/// application. Nothing is sent over the network. On error the previous
	/// session is left untouched.
	pub fn begin_authorization<'s>(
		&mut self,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
		scopes: impl IntoIterator<Item = &'s ScopeToken>,
	) -> Result<String, EncodingError> {
		let session =
			AuthorizationSession::new(client_id.into(), client_secret.into(), redirect_uri.into());
		let scope = ScopeBuf::from_tokens(scopes);

		let request = AuthorizationRequest {
			auth: session.auth_fields(),
			scope: scope.as_deref(),
			state: State::default_state(),
		};

		let url = build_url(
			&self.config.auth_host,
			AUTHORIZE_ENDPOINT,
			Some(&request.describe()),
		)?;

		log::debug!("authorization begun for client `{}`", session.client_id());
		self.session = Some(session);
		Ok(url)
	}
}
