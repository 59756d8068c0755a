use http::Method;
use serde::{Deserialize, Serialize};

use crate::{
	Client,
	client::{Auth, Error},
	query::RequestDescription,
	transport::HttpClient,
};

use super::{HISTORY_ENDPOINT, USER_ENDPOINT};

/// Page of the user's trip history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserActivity {
	pub offset: u32,
	pub limit: u32,

	/// Total number of trips.
	pub count: u32,

	pub history: Vec<Trip>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
	pub uuid: String,

	/// Unix timestamp.
	#[serde(default)]
	pub request_time: i64,

	#[serde(default)]
	pub product_id: String,

	#[serde(default)]
	pub status: String,

	/// Distance in miles.
	#[serde(default)]
	pub distance: f64,

	#[serde(default)]
	pub start_time: i64,

	pub start_location: Option<Location>,

	/// Zero while the trip is ongoing.
	#[serde(default)]
	pub end_time: i64,

	pub end_location: Option<Location>,
}

/// Address and coordinates of a place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
	/// e.g. `706 Mission St, San Francisco, CA`.
	#[serde(default)]
	pub address: String,

	pub latitude: f64,
	pub longitude: f64,
}

/// Profile of the authorized user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub first_name: String,
	pub last_name: String,
	pub email: String,

	/// URL of the profile picture.
	#[serde(default)]
	pub picture: String,

	#[serde(default)]
	pub promo_code: String,
}

impl<H: HttpClient> Client<H> {
	/// Trips taken by the authorized user, most recent first.
	///
	/// Requires the `history` scope.
	pub async fn user_activity(&self, offset: u32, limit: u32) -> Result<UserActivity, Error> {
		let description = RequestDescription::new()
			.required("offset", offset)
			.required("limit", limit);

		self.call(
			Method::GET,
			&self.config.api_host,
			HISTORY_ENDPOINT,
			Some(&description),
			Auth::OAuth,
		)
		.await
	}

	/// Requires the `profile` scope.
	pub async fn user_profile(&self) -> Result<User, Error> {
		self.call(
			Method::GET,
			&self.config.api_host,
			USER_ENDPOINT,
			None,
			Auth::OAuth,
		)
		.await
	}
}

#[cfg(test)]
mod tests {
	use http::header::AUTHORIZATION;

	use crate::{ClientConfig, transport::stub::StubHttpClient};

	use super::*;

	const GRANT: &str = r#"{"access_token":"tok","token_type":"Bearer","expires_in":2592000}"#;

	async fn authorized(stub: &StubHttpClient) -> Client<&StubHttpClient> {
		let mut client = Client::new(stub).with_config(
			ClientConfig::default()
				.with_api_host("http://api.test/v1")
				.with_auth_host("http://auth.test/oauth"),
		);
		client
			.begin_authorization("cid", "secret", "https://app/cb", [])
			.unwrap();
		client.exchange_code("abc").await.unwrap();
		client
	}

	#[tokio::test]
	async fn user_activity_targets_history() {
		let stub = StubHttpClient::new().respond(200, GRANT).respond(
			200,
			r#"{
				"offset": 0,
				"limit": 1,
				"count": 5,
				"history": [{
					"uuid": "7354db54-cc9b-4961-81f2-0094b8e2d215",
					"request_time": 1401884467,
					"product_id": "edf5e5eb-6ae6-44af-bec6-5bdcf1e3ed2c",
					"status": "completed",
					"distance": 0.0279562,
					"start_time": 1401884646,
					"start_location": {
						"address": "706 Mission St, San Francisco, CA",
						"latitude": 37.7860099,
						"longitude": -122.4025387
					},
					"end_time": 1401884732,
					"end_location": {
						"address": "1455 Market St, San Francisco, CA",
						"latitude": 37.7758179,
						"longitude": -122.4180285
					}
				}]
			}"#,
		);
		let client = authorized(&stub).await;

		let activity = client.user_activity(0, 1).await.unwrap();
		assert_eq!(activity.count, 5);
		assert_eq!(activity.history[0].status, "completed");
		assert_eq!(
			activity.history[0].end_location.as_ref().unwrap().address,
			"1455 Market St, San Francisco, CA"
		);

		let request = stub.last_request();
		assert_eq!(request.uri, "http://api.test/v1/history?offset=0&limit=1");
		assert_eq!(request.header(AUTHORIZATION), Some("Bearer tok"));
	}

	#[tokio::test]
	async fn user_profile() {
		let stub = StubHttpClient::new().respond(200, GRANT).respond(
			200,
			r#"{
				"first_name": "Uber",
				"last_name": "Developer",
				"email": "developer@uber.com",
				"picture": "https://profile-picture.jpg",
				"promo_code": "teypo"
			}"#,
		);
		let client = authorized(&stub).await;

		let user = client.user_profile().await.unwrap();
		assert_eq!(user.email, "developer@uber.com");
		assert_eq!(user.promo_code, "teypo");
		assert_eq!(stub.last_request().uri, "http://api.test/v1/me");
	}

	#[tokio::test]
	async fn incomplete_trips_decode() {
		let stub = StubHttpClient::new().respond(200, GRANT).respond(
			200,
			r#"{
				"offset": 0,
				"limit": 2,
				"count": 2,
				"history": [
					{"uuid": "7354db54", "status": "completed", "distance": 1.5},
					{"uuid": "a1b2c3d4", "request_time": 1401884467}
				]
			}"#,
		);
		let client = authorized(&stub).await;

		let activity = client.user_activity(0, 2).await.unwrap();
		assert_eq!(activity.history.len(), 2);
		assert_eq!(activity.history[0].request_time, 0);
		assert_eq!(activity.history[0].end_time, 0);
		assert!(activity.history[0].start_location.is_none());
		assert_eq!(activity.history[1].distance, 0.0);
		assert_eq!(activity.history[1].status, "");
	}

	#[tokio::test]
	async fn profile_requires_grant() {
		let stub = StubHttpClient::new();
		let client = Client::new(&stub);

		assert!(matches!(client.user_profile().await, Err(Error::NoAccessGrant)));
	}

	#[tokio::test]
	async fn expired_token() {
		let stub = StubHttpClient::new().respond(200, GRANT).respond(
			401,
			r#"{"message":"Invalid OAuth 2.0 credentials provided.","code":"unauthorized"}"#,
		);
		let client = authorized(&stub).await;

		let Err(Error::ApiRejected(error)) = client.user_profile().await else {
			panic!("expected an API error")
		};
		assert_eq!(error.code, "unauthorized");
	}
}
