//! Client configuration supplied once at construction.
//!
//! A [`ClientConfig`] can be built in code, converted from a bare API key, or deserialized from
//! any serde-backed configuration source. Keys are camelCase (`apiKey`, `apiSecret`,
//! `callbackUrl`); `apiCallback` is accepted as an alias for the callback URL.

// crates.io
use oauth2::ClientSecret;
// self
use crate::{_prelude::*, error::ConfigError};

/// Credentials and callback settings for a Pinterest application.
///
/// A config holding only an API key can call public endpoints. OAuth authorization and code
/// exchanges additionally need [`api_secret`](Self::api_secret) and
/// [`callback_url`](Self::callback_url).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
	/// Application key, sent as `client_id`.
	pub api_key: String,
	/// Application secret used by the code exchange.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub api_secret: Option<ClientSecret>,
	/// Redirect URI registered with Pinterest.
	#[serde(default, alias = "apiCallback", skip_serializing_if = "Option::is_none")]
	pub callback_url: Option<String>,
}
impl ClientConfig {
	/// Creates a public-only config for the provided API key.
	pub fn new(api_key: impl Into<String>) -> Self {
		Self { api_key: api_key.into(), api_secret: None, callback_url: None }
	}

	/// Sets the application secret.
	pub fn with_api_secret(mut self, secret: impl Into<String>) -> Self {
		self.api_secret = Some(ClientSecret::new(secret.into()));

		self
	}

	/// Sets the OAuth callback URL.
	pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
		self.callback_url = Some(url.into());

		self
	}

	/// Returns true when both OAuth-only fields are present.
	pub fn supports_oauth(&self) -> bool {
		self.api_secret.is_some() && self.callback_url.is_some()
	}

	/// Checks the invariants the client relies on.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.api_key.trim().is_empty() {
			return Err(ConfigError::MissingApiKey);
		}
		if let Some(callback) = self.callback_url.as_deref() {
			Url::parse(callback).map_err(|source| ConfigError::InvalidRedirect { source })?;
		}

		Ok(())
	}

	pub(crate) fn require_api_secret(&self) -> Result<&ClientSecret, ConfigError> {
		self.api_secret
			.as_ref()
			.ok_or(ConfigError::MissingOAuthCredentials { field: "api_secret" })
	}

	pub(crate) fn require_callback_url(&self) -> Result<&str, ConfigError> {
		self.callback_url
			.as_deref()
			.ok_or(ConfigError::MissingOAuthCredentials { field: "callback_url" })
	}
}
impl From<&str> for ClientConfig {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for ClientConfig {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
