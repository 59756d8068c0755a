//! Client for the [Uber API][api] (v1).
//!
//! Covers the product and estimate endpoints, authenticated with the
//! application's server token, and the endpoints acting on behalf of a user
//! (history, profile, ride requests), authenticated with an access token
//! obtained through the [OAuth 2.0 authorization code flow][rfc6749].
//!
//! # Modules
//!
//! - [`api`]: Endpoint methods and response models.
//! - [`client`]: The [`Client`], its configuration and error type.
//! - [`endpoints`]: Authorization and token endpoints.
//! - [`query`]: Declarative request parameters and their encoding.
//! - [`server`]: Error payloads returned by the servers, and the interactive
//!   authorization callback listener (feature `axum`).
//! - [`transport`]: HTTP transport trait, implemented for `reqwest::Client`
//!   with the `reqwest` feature.
//! - [`util`]: URI query string utilities.
//!
//! OAuth 2.0 string types ([`AccessToken`], [`Scope`], [`State`], etc.) are
//! re-exported at the crate root.
//!
//! [api]: https://developer.uber.com/docs/riders/references/api
//! [rfc6749]: https://datatracker.ietf.org/doc/html/rfc6749
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod api;
pub mod client;
pub mod endpoints;
pub mod query;
pub mod server;
pub mod transport;
mod types;
pub mod util;

pub use client::{Auth, AuthorizationSession, AuthorizationState, Client, ClientConfig, Error};
pub use endpoints::token::AccessGrant;
pub use transport::HttpClient;
pub use types::*;
