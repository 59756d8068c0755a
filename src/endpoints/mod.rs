//! OAuth 2.0 endpoints of the authorization server.
//!
//! The authorization code flow goes through three states (see
//! [`AuthorizationState`](crate::client::AuthorizationState)):
//!
//! 1. [`Client::begin_authorization`](crate::Client::begin_authorization)
//!    records the client credentials and returns the URL the user must visit.
//! 2. [`Client::exchange_code`](crate::Client::exchange_code) trades the code
//!    the user is redirected with for an [`AccessGrant`](token::AccessGrant).
//! 3. Endpoints acting on behalf of the user read the grant on every call,
//!    until [`Client::refresh_access_token`](crate::Client::refresh_access_token)
//!    replaces it.
//!
//! A failing step changes nothing and may be retried.
pub mod authorization;
pub mod token;
