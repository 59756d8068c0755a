use http::Method;
use serde::{Deserialize, Serialize};

use crate::{
	Client,
	client::{Auth, Error},
	query::RequestDescription,
	transport::HttpClient,
};

use super::{PRICE_ENDPOINT, TIME_ENDPOINT};

/// Price estimate of a product for a trip.
///
/// When surge pricing is active, `surge_multiplier` is greater than 1 and
/// already factored into the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
	pub product_id: String,

	/// ISO 4217 currency code, e.g. `USD`.
	#[serde(default)]
	pub currency_code: Option<String>,

	pub display_name: String,

	/// Human readable estimate, e.g. `$23-29`.
	pub estimate: String,

	#[serde(default)]
	pub low_estimate: Option<i64>,

	#[serde(default)]
	pub high_estimate: Option<i64>,

	#[serde(default = "no_surge")]
	pub surge_multiplier: f64,
}

fn no_surge() -> f64 {
	1.0
}

/// Time of arrival estimate of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
	pub product_id: String,
	pub display_name: String,

	/// ETA in seconds.
	pub estimate: u64,
}

#[derive(Deserialize)]
struct PricesResponse {
	prices: Vec<Price>,
}

#[derive(Deserialize)]
struct TimesResponse {
	times: Vec<Time>,
}

impl<H: HttpClient> Client<H> {
	/// Price estimates of every product for a trip between two locations.
	pub async fn prices(
		&self,
		start_latitude: f64,
		start_longitude: f64,
		end_latitude: f64,
		end_longitude: f64,
	) -> Result<Vec<Price>, Error> {
		let description = RequestDescription::new()
			.required("start_latitude", start_latitude)
			.required("start_longitude", start_longitude)
			.required("end_latitude", end_latitude)
			.required("end_longitude", end_longitude);

		let response: PricesResponse = self
			.call(
				Method::GET,
				&self.config.api_host,
				PRICE_ENDPOINT,
				Some(&description),
				Auth::ServerToken,
			)
			.await?;

		Ok(response.prices)
	}

	/// Arrival time estimates of every product at the given location.
	///
	/// `customer_uuid` and `product_id` narrow the estimates and are omitted
	/// when empty.
	pub async fn times(
		&self,
		start_latitude: f64,
		start_longitude: f64,
		customer_uuid: &str,
		product_id: &str,
	) -> Result<Vec<Time>, Error> {
		let description = RequestDescription::new()
			.required("start_latitude", start_latitude)
			.required("start_longitude", start_longitude)
			.optional("customer_uuid", customer_uuid)
			.optional("product_id", product_id);

		let response: TimesResponse = self
			.call(
				Method::GET,
				&self.config.api_host,
				TIME_ENDPOINT,
				Some(&description),
				Auth::ServerToken,
			)
			.await?;

		Ok(response.times)
	}
}
