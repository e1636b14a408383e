//! Access-token secret wrapper and the token endpoint response model.

// crates.io
use serde_json::Map;
// self
use crate::{_prelude::*, error::ApiError};

/// Redacted access-token wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new token string. No format validation is applied.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
impl From<&str> for AccessToken {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for AccessToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<OAuthTokenResponse> for AccessToken {
	fn from(value: OAuthTokenResponse) -> Self {
		value.access_token
	}
}
impl From<&OAuthTokenResponse> for AccessToken {
	fn from(value: &OAuthTokenResponse) -> Self {
		value.access_token.clone()
	}
}

/// Decoded body of a successful authorization-code exchange.
///
/// Only `access_token` is interpreted; every other field Pinterest returns (user profile,
/// expiry hints, ...) is kept verbatim in [`extra`](Self::extra).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OAuthTokenResponse {
	/// Issued access token.
	pub access_token: AccessToken,
	/// Remaining response fields.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl OAuthTokenResponse {
	/// Returns a provider-specific field by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.extra.get(name)
	}

	/// Rebuilds the full JSON object as returned by the token endpoint.
	pub fn to_value(&self) -> Value {
		let mut object = self.extra.clone();

		object.insert("access_token".into(), Value::String(self.access_token.expose().to_owned()));

		Value::Object(object)
	}
}
impl TryFrom<Value> for OAuthTokenResponse {
	type Error = ApiError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		serde_path_to_error::deserialize(value).map_err(|source| ApiError::TokenResponse { source })
	}
}
