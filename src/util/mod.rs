//! URI query string utilities.
use crate::query::{EncodingError, QueryParams, RequestDescription, encode};

/// Serializes parameters as `application/x-www-form-urlencoded` data.
///
/// Used both for URL query strings and for form bodies.
pub fn serialize_query(params: &QueryParams) -> String {
	serde_html_form::to_string(params)
		// UNWRAP SAFETY: a sequence of string pairs always serializes.
		.unwrap()
}

/// Appends `query` to `url`, separated with `?`.
///
/// An empty query leaves the URL untouched.
pub fn concat_query(mut url: String, query: &str) -> String {
	if !query.is_empty() {
		url.push('?');
		url.push_str(query);
	}

	url
}

/// Builds `base/endpoint`, followed by the encoded description if it yields
/// any parameter.
pub fn build_url(
	base: &str,
	endpoint: &str,
	description: Option<&RequestDescription>,
) -> Result<String, EncodingError> {
	let params = encode(description)?;
	let url = format!("{}/{endpoint}", base.trim_end_matches('/'));
	Ok(concat_query(url, &serialize_query(&params)))
}
