//! Request parameters and HTTP methods accepted by [`call`](super::PinterestClient::call).

// crates.io
use oauth2::http::Method;
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// HTTP methods supported by the Pinterest v2 API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiMethod {
	/// Parameters travel in the query string.
	#[default]
	Get,
	/// Parameters travel in a form-encoded body.
	Post,
	/// No body; parameters are ignored.
	Delete,
}
impl ApiMethod {
	/// Returns the matching [`Method`].
	pub fn as_http(self) -> Method {
		match self {
			ApiMethod::Get => Method::GET,
			ApiMethod::Post => Method::POST,
			ApiMethod::Delete => Method::DELETE,
		}
	}

	/// Upper-case verb, as sent on the wire.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiMethod::Get => "GET",
			ApiMethod::Post => "POST",
			ApiMethod::Delete => "DELETE",
		}
	}
}
impl Display for ApiMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Ordered request parameters.
///
/// Pairs are serialized in insertion order with standard form encoding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);
impl Params {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a pair, consuming and returning `self`.
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.push(key, value);

		self
	}

	/// Appends a pair.
	pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
		self.0.push((key.into(), value.to_string()));
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no pairs were added.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Serializes the pairs as an `application/x-www-form-urlencoded` string.
	pub fn to_form(&self) -> String {
		form_urlencoded::Serializer::new(String::new()).extend_pairs(self.iter()).finish()
	}
}
impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: Display,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut params = Self::new();

		params.extend(iter);

		params
	}
}
impl<K, V> Extend<(K, V)> for Params
where
	K: Into<String>,
	V: Display,
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.push(key, value);
		}
	}
}
impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
	K: Into<String>,
	V: Display,
{
	fn from(value: [(K, V); N]) -> Self {
		value.into_iter().collect()
	}
}
