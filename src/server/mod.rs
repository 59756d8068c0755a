//! Error payloads returned by the API and authorization servers, and the
//! interactive authorization callback listener (feature `axum`).
use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[cfg(feature = "axum")]
mod callback;

#[cfg(feature = "axum")]
pub use callback::*;

/// Error response of the authorization server.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-5.2>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuthorizationError {
	/// A single error code string, e.g. `invalid_grant`.
	pub error: String,

	/// Human-readable text providing additional information about the error.
	pub error_description: Option<String>,
}

impl AuthorizationError {
	pub fn new(error: impl Into<String>, error_description: Option<String>) -> Self {
		Self {
			error: error.into(),
			error_description,
		}
	}
}

impl fmt::Display for AuthorizationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.error_description {
			Some(description) => write!(f, "{} ({description})", self.error),
			None => f.write_str(&self.error),
		}
	}
}

impl std::error::Error for AuthorizationError {}

/// Error response of the API server.
///
/// ```json
/// {
///   "message": "Invalid request.",
///   "code": "validation_failed",
///   "fields": { "latitude": "Must be between -90.0 and 90.0" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
	/// Human readable message.
	#[serde(default)]
	pub message: String,

	/// Short error code.
	#[serde(default)]
	pub code: String,

	/// Per-field validation messages.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub fields: BTreeMap<String, String>,
}

impl ApiError {
	pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			code: code.into(),
			fields: BTreeMap::new(),
		}
	}

	/// The server sent neither a message nor a code.
	pub fn is_unidentified(&self) -> bool {
		self.message.is_empty() && self.code.is_empty()
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)?;

		if !self.code.is_empty() {
			write!(f, " ({})", self.code)?;
		}

		for (field, message) in &self.fields {
			write!(f, "; {field}: {message}")?;
		}

		Ok(())
	}
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_authorization_error() {
		let error: AuthorizationError = serde_json::from_str(r#"{"error":"invalid_grant"}"#).unwrap();
		assert_eq!(error, AuthorizationError::new("invalid_grant", None));
		assert_eq!(error.to_string(), "invalid_grant");
	}

	#[test]
	fn authorization_error_with_description() {
		let error = AuthorizationError::new("invalid_client", Some("unknown client".to_owned()));
		assert_eq!(error.to_string(), "invalid_client (unknown client)");
	}

	#[test]
	fn decode_api_error() {
		let error: ApiError = serde_json::from_str(
			r#"{
				"message": "Invalid request.",
				"code": "validation_failed",
				"fields": {
					"latitude": "Must be between -90.0 and 90.0",
					"longitude": "Must be between -180.0 and 180.0"
				}
			}"#,
		)
		.unwrap();

		assert_eq!(error.message, "Invalid request.");
		assert_eq!(error.code, "validation_failed");
		assert_eq!(error.fields["latitude"], "Must be between -90.0 and 90.0");
		assert_eq!(
			error.to_string(),
			"Invalid request. (validation_failed); latitude: Must be between -90.0 and 90.0; longitude: Must be between -180.0 and 180.0"
		);
	}

	#[test]
	fn api_error_without_body_fields() {
		let error: ApiError = serde_json::from_str("{}").unwrap();
		assert!(error.is_unidentified());
		assert!(!ApiError::new("Not found.", "not_found").is_unidentified());
	}
}
