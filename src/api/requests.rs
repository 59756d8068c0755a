use http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
	Client,
	client::{Auth, Error},
	query::RequestDescription,
	transport::HttpClient,
};

use super::{REQUESTS_ENDPOINT, SANDBOX_PRODUCTS_ENDPOINT, SANDBOX_REQUESTS_ENDPOINT, resource_path};

/// Ride request, as sent to the `requests` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct RideRequest {
	pub product_id: String,
	pub start_latitude: f64,
	pub start_longitude: f64,
	pub end_latitude: f64,
	pub end_longitude: f64,

	/// Confirmation obtained by the user when surge pricing is in effect.
	pub surge_confirmation_id: Option<String>,
}

impl RideRequest {
	pub fn new(
		product_id: impl Into<String>,
		(start_latitude, start_longitude): (f64, f64),
		(end_latitude, end_longitude): (f64, f64),
	) -> Self {
		Self {
			product_id: product_id.into(),
			start_latitude,
			start_longitude,
			end_latitude,
			end_longitude,
			surge_confirmation_id: None,
		}
	}

	pub fn with_surge_confirmation(self, id: impl Into<String>) -> Self {
		Self {
			surge_confirmation_id: Some(id.into()),
			..self
		}
	}

	pub fn describe(&self) -> RequestDescription {
		RequestDescription::new()
			.required("product_id", self.product_id.as_str())
			.required("start_latitude", self.start_latitude)
			.required("start_longitude", self.start_longitude)
			.required("end_latitude", self.end_latitude)
			.required("end_longitude", self.end_longitude)
			.optional(
				"surge_confirmation_id",
				self.surge_confirmation_id.as_deref().unwrap_or_default(),
			)
	}
}

/// Status of an ongoing ride request.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
	pub request_id: String,

	/// `processing`, `accepted`, `arriving`, `in_progress`, `completed`,
	/// `driver_canceled`, `rider_canceled` or `no_drivers_available`.
	pub status: String,

	/// Absent until a driver accepts.
	pub vehicle: Option<Vehicle>,

	pub driver: Option<Driver>,
	pub location: Option<VehicleLocation>,

	/// Expected minutes before the vehicle arrives.
	pub eta: Option<u32>,

	pub surge_multiplier: Option<f64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
	pub make: String,
	pub model: String,
	pub license_plate: String,
	pub picture_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
	pub name: String,
	pub phone_number: String,
	pub rating: Option<f64>,
	pub picture_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLocation {
	pub latitude: f64,
	pub longitude: f64,

	/// Compass bearing in degrees, 0 being north.
	pub bearing: Option<i32>,
}

#[derive(Deserialize)]
struct RequestMapResponse {
	href: String,
}

impl<H: HttpClient> Client<H> {
	/// Requests a ride on behalf of the authorized user.
	///
	/// Requires the `request` scope. Sent to the sandbox when
	/// [`ClientConfig::sandbox`](crate::ClientConfig::sandbox) is set.
	pub async fn create_request(&self, ride: &RideRequest) -> Result<Request, Error> {
		self.call(
			Method::POST,
			self.config.rides_host(),
			REQUESTS_ENDPOINT,
			Some(&ride.describe()),
			Auth::OAuth,
		)
		.await
	}

	/// Real time status of a ride request.
	pub async fn ride_request(&self, request_id: &str) -> Result<Request, Error> {
		let endpoint = resource_path(REQUESTS_ENDPOINT, "request_id", request_id)?;
		self.call(
			Method::GET,
			self.config.rides_host(),
			&endpoint,
			None,
			Auth::OAuth,
		)
		.await
	}

	/// Cancels a ride request.
	pub async fn cancel_request(&self, request_id: &str) -> Result<(), Error> {
		let endpoint = resource_path(REQUESTS_ENDPOINT, "request_id", request_id)?;
		self.execute(
			Method::DELETE,
			self.config.rides_host(),
			&endpoint,
			None,
			Auth::OAuth,
		)
		.await?;
		Ok(())
	}

	/// URL of a map showing the ride request.
	pub async fn request_map(&self, request_id: &str) -> Result<String, Error> {
		let endpoint = resource_path(REQUESTS_ENDPOINT, "request_id", request_id)?;
		let response: RequestMapResponse = self
			.call(
				Method::GET,
				self.config.rides_host(),
				&format!("{endpoint}/map"),
				None,
				Auth::OAuth,
			)
			.await?;

		Ok(response.href)
	}

	/// Moves a sandbox ride request to the given status.
	pub async fn sandbox_update_request(&self, request_id: &str, status: &str) -> Result<(), Error> {
		let endpoint = resource_path(SANDBOX_REQUESTS_ENDPOINT, "request_id", request_id)?;
		let description = RequestDescription::new().required("status", status);

		self.execute(
			Method::PUT,
			&self.config.sandbox_host,
			&endpoint,
			Some(&description),
			Auth::OAuth,
		)
		.await?;
		Ok(())
	}

	/// Simulates surge pricing or driver availability for a product in the
	/// sandbox.
	pub async fn sandbox_update_product(
		&self,
		product_id: &str,
		surge_multiplier: Option<f64>,
		drivers_available: Option<bool>,
	) -> Result<(), Error> {
		let endpoint = resource_path(SANDBOX_PRODUCTS_ENDPOINT, "product_id", product_id)?;

		let mut description = RequestDescription::new();
		if let Some(surge_multiplier) = surge_multiplier {
			description = description.optional("surge_multiplier", surge_multiplier);
		}
		if let Some(drivers_available) = drivers_available {
			description = description.optional("drivers_available", drivers_available);
		}

		self.execute(
			Method::PUT,
			&self.config.sandbox_host,
			&endpoint,
			Some(&description),
			Auth::OAuth,
		)
		.await?;
		Ok(())
	}
}
