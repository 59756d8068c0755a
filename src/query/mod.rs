//! Request encoding.
//!
//! Each endpoint describes its parameters as a [`RequestDescription`]: an
//! ordered list of named, typed, optionally required parameters. Descriptions
//! may embed other descriptions (for instance the client credentials shared
//! by the authorization and token requests), which are flattened into the
//! parent when encoded.
//!
//! [`encode`] turns a description into [`QueryParams`], validating required
//! parameters on the way. Escaping is left to the query serializer, see
//! [`crate::util::serialize_query`].
use serde::Serialize;

/// Name under which a parameter is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamName {
	/// Query key.
	///
	/// An empty key is still validated but never emitted. Embedded
	/// descriptions use it.
	Key(&'static str),

	/// Never emitted, whatever the value or required flag.
	Skip,
}

/// Value of a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	Str(String),
	Int(i64),
	Float(f64),
	Nested(RequestDescription),
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<RequestDescription> for ParamValue {
	fn from(value: RequestDescription) -> Self {
		Self::Nested(value)
	}
}

/// Single request parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
	pub name: ParamName,
	pub value: ParamValue,

	/// A required parameter fails encoding when its formatted value is empty.
	///
	/// Numeric values always format to a non-empty string, so `0` and `0.0`
	/// are valid required values.
	pub required: bool,
}

impl Param {
	pub fn new(name: ParamName, value: impl Into<ParamValue>, required: bool) -> Self {
		Self {
			name,
			value: value.into(),
			required,
		}
	}
}

/// Declarative, ordered list of request parameters.
///
/// Built once with the consuming builder methods below and never mutated
/// afterwards; encoding only borrows it.
///
/// ```
/// use uber_api::query::{RequestDescription, encode};
///
/// let description = RequestDescription::new()
/// 	.required("latitude", 37.775)
/// 	.required("longitude", -122.418);
///
/// let params = encode(Some(&description)).unwrap();
/// assert_eq!(params.get("latitude"), Some("37.775"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDescription {
	params: Vec<Param>,
}

impl RequestDescription {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn param(mut self, param: Param) -> Self {
		self.params.push(param);
		self
	}

	/// Appends a parameter that must not be empty.
	pub fn required(self, name: &'static str, value: impl Into<ParamValue>) -> Self {
		self.param(Param::new(ParamName::Key(name), value, true))
	}

	/// Appends a parameter that is dropped when empty.
	pub fn optional(self, name: &'static str, value: impl Into<ParamValue>) -> Self {
		self.param(Param::new(ParamName::Key(name), value, false))
	}

	/// Appends a value that is part of the description but never sent.
	pub fn skipped(self, value: impl Into<ParamValue>) -> Self {
		self.param(Param::new(ParamName::Skip, value, false))
	}

	/// Embeds another description, flattened into this one when encoded.
	pub fn embed(self, description: RequestDescription) -> Self {
		self.param(Param::new(ParamName::Key(""), description, false))
	}

	pub fn params(&self) -> &[Param] {
		&self.params
	}

	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}
}

/// Encoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
	#[error("{0} is a required field")]
	MissingRequiredField(String),

	/// The value cannot be formatted as a query parameter.
	///
	/// Only non-finite floats end up here: they have no decimal
	/// representation the API accepts. This is a bug in the caller.
	#[error("{0} cannot be encoded as a query parameter")]
	UnsupportedFieldKind(String),
}

/// Encoded parameters, in declaration order.
///
/// Keys are unique: when an embedded description repeats a key, the first
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Inserts the pair unless `key` is already present.
	fn insert(&mut self, key: &str, value: String) {
		if !self.contains_key(key) {
			self.0.push((key.to_owned(), value))
		}
	}

	fn merge(&mut self, other: QueryParams) {
		for (key, value) in other.0 {
			self.insert(&key, value)
		}
	}
}

impl IntoIterator for QueryParams {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<(String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Encodes a request description.
///
/// An absent description encodes to no parameters. Stops at the first
/// invalid parameter, in declaration order.
pub fn encode(description: Option<&RequestDescription>) -> Result<QueryParams, EncodingError> {
	match description {
		Some(description) => encode_description(description),
		None => Ok(QueryParams::default()),
	}
}

fn encode_description(description: &RequestDescription) -> Result<QueryParams, EncodingError> {
	let mut result = QueryParams::default();

	for param in &description.params {
		let key = match param.name {
			ParamName::Key(key) => key,
			ParamName::Skip => continue,
		};

		let value = match &param.value {
			ParamValue::Str(value) => value.clone(),
			ParamValue::Int(value) => value.to_string(),
			ParamValue::Float(value) if value.is_finite() => value.to_string(),
			ParamValue::Float(_) => {
				return Err(EncodingError::UnsupportedFieldKind(key.to_owned()));
			}
			ParamValue::Nested(nested) => {
				result.merge(encode_description(nested)?);
				continue;
			}
		};

		if param.required && value.is_empty() {
			return Err(EncodingError::MissingRequiredField(key.to_owned()));
		}

		if !value.is_empty() && !key.is_empty() {
			result.insert(key, value)
		}
	}

	Ok(result)
}
