use std::sync::{Arc, PoisonError, RwLock};

use crate::endpoints::{authorization::AuthFields, token::AccessGrant};

/// Progress of the authorization code flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthorizationState {
	/// No authorization has begun.
	Unauthorized,

	/// The authorization URL was issued, waiting for the code exchange.
	AuthorizeUrlIssued,

	/// An access grant is available.
	TokenGranted,
}

/// OAuth 2.0 client credentials and the current access grant.
///
/// Owned by a single [`Client`](crate::Client), lives as long as the process.
/// The grant is only ever replaced as a whole: readers see either the
/// previous grant or the new one.
pub struct AuthorizationSession {
	client_id: String,
	client_secret: String,
	redirect_uri: String,
	grant: RwLock<Option<Arc<AccessGrant>>>,
}

impl AuthorizationSession {
	pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
		Self {
			client_id,
			client_secret,
			redirect_uri,
			grant: RwLock::new(None),
		}
	}

	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	pub fn redirect_uri(&self) -> &str {
		&self.redirect_uri
	}

	pub(crate) fn auth_fields(&self) -> AuthFields<'_> {
		AuthFields {
			client_id: &self.client_id,
			client_secret: &self.client_secret,
			redirect_uri: &self.redirect_uri,
		}
	}

	/// Current access grant, if the code exchange succeeded.
	pub fn grant(&self) -> Option<Arc<AccessGrant>> {
		self.grant
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Replaces the access grant.
	pub(crate) fn publish(&self, grant: AccessGrant) {
		let grant = Arc::new(grant);
		*self.grant.write().unwrap_or_else(PoisonError::into_inner) = Some(grant);
	}

	pub fn state(&self) -> AuthorizationState {
		if self.grant().is_some() {
			AuthorizationState::TokenGranted
		} else {
			AuthorizationState::AuthorizeUrlIssued
		}
	}
}
