use serde::{Deserialize, Serialize};

/// Production API host.
pub const DEFAULT_API_HOST: &str = "https://api.uber.com/v1";

/// Production authorization host.
pub const DEFAULT_AUTH_HOST: &str = "https://login.uber.com/oauth";

/// Sandbox API host.
pub const DEFAULT_SANDBOX_HOST: &str = "https://sandbox-api.uber.com/v1";

/// Hosts the [`Client`](crate::Client) talks to.
///
/// Can be deserialized from any serde format; missing fields take their
/// default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// Base URL of the API, including the version segment.
	pub api_host: String,

	/// Base URL of the OAuth 2.0 endpoints (`authorize`, `token`).
	pub auth_host: String,

	/// Base URL of the sandbox API.
	pub sandbox_host: String,

	/// Send ride requests to the sandbox instead of the production API.
	///
	/// No real driver is dispatched in the sandbox.
	pub sandbox: bool,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			api_host: DEFAULT_API_HOST.to_owned(),
			auth_host: DEFAULT_AUTH_HOST.to_owned(),
			sandbox_host: DEFAULT_SANDBOX_HOST.to_owned(),
			sandbox: false,
		}
	}
}

impl ClientConfig {
	pub fn with_api_host(self, api_host: impl Into<String>) -> Self {
		Self {
			api_host: api_host.into(),
			..self
		}
	}

	pub fn with_auth_host(self, auth_host: impl Into<String>) -> Self {
		Self {
			auth_host: auth_host.into(),
			..self
		}
	}

	pub fn with_sandbox_host(self, sandbox_host: impl Into<String>) -> Self {
		Self {
			sandbox_host: sandbox_host.into(),
			..self
		}
	}

	pub fn with_sandbox(self, sandbox: bool) -> Self {
		Self { sandbox, ..self }
	}

	/// Host serving the ride request endpoints.
	pub fn rides_host(&self) -> &str {
		if self.sandbox {
			&self.sandbox_host
		} else {
			&self.api_host
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_production() {
		let config = ClientConfig::default();
		assert_eq!(config.api_host, DEFAULT_API_HOST);
		assert_eq!(config.auth_host, DEFAULT_AUTH_HOST);
		assert_eq!(config.rides_host(), DEFAULT_API_HOST);
	}

	#[test]
	fn sandbox_serves_rides() {
		let config = ClientConfig::default()
			.with_sandbox_host("http://127.0.0.1:9000")
			.with_sandbox(true);
		assert_eq!(config.rides_host(), "http://127.0.0.1:9000");
		assert_eq!(config.api_host, DEFAULT_API_HOST);
	}

	#[test]
	fn partial_config_deserializes() {
		let config: ClientConfig =
			serde_json::from_str(r#"{"api_host": "http://localhost:8080/v1"}"#).unwrap();
		assert_eq!(config.api_host, "http://localhost:8080/v1");
		assert_eq!(config.auth_host, DEFAULT_AUTH_HOST);
		assert!(!config.sandbox);
	}
}
