//! API endpoints and response models.
//!
//! Product and estimate endpoints authenticate with the server token; every
//! other endpoint acts on behalf of the authorized user.
use crate::query::EncodingError;

mod estimates;
mod products;
mod requests;
mod user;

pub use estimates::*;
pub use products::*;
pub use requests::*;
pub use user::*;

pub const PRODUCTS_ENDPOINT: &str = "products";
pub const PRICE_ENDPOINT: &str = "estimates/price";
pub const TIME_ENDPOINT: &str = "estimates/time";
pub const HISTORY_ENDPOINT: &str = "history";
pub const USER_ENDPOINT: &str = "me";
pub const REQUESTS_ENDPOINT: &str = "requests";
pub const SANDBOX_REQUESTS_ENDPOINT: &str = "sandbox/requests";
pub const SANDBOX_PRODUCTS_ENDPOINT: &str = "sandbox/products";

/// Appends a resource identifier to `endpoint`.
///
/// An empty identifier would silently target the collection instead.
fn resource_path(
	endpoint: &str,
	name: &'static str,
	id: &str,
) -> Result<String, EncodingError> {
	if id.is_empty() {
		return Err(EncodingError::MissingRequiredField(name.to_owned()));
	}

	Ok(format!("{endpoint}/{id}"))
}
