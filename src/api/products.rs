use http::Method;
use serde::{Deserialize, Serialize};

use crate::{
	Client,
	client::{Auth, Error},
	query::RequestDescription,
	transport::HttpClient,
};

use super::PRODUCTS_ENDPOINT;

/// Uber product, a specific type of car or service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	/// e.g. `327f7914-cd12-4f77-9e0c-b27bac580d03`.
	pub product_id: String,

	/// e.g. `The original Uber`.
	#[serde(default)]
	pub description: String,

	/// e.g. `UberBLACK`.
	pub display_name: String,

	/// Number of passengers.
	#[serde(default)]
	pub capacity: u32,

	/// URL of an image of the product.
	#[serde(default)]
	pub image: String,
}

#[derive(Deserialize)]
struct ProductsResponse {
	products: Vec<Product>,
}

impl<H: HttpClient> Client<H> {
	/// Products offered at the given location, in display order.
	pub async fn products(&self, latitude: f64, longitude: f64) -> Result<Vec<Product>, Error> {
		let description = RequestDescription::new()
			.required("latitude", latitude)
			.required("longitude", longitude);

		let response: ProductsResponse = self
			.call(
				Method::GET,
				&self.config.api_host,
				PRODUCTS_ENDPOINT,
				Some(&description),
				Auth::ServerToken,
			)
			.await?;

		Ok(response.products)
	}
}
