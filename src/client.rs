//! The Pinterest API client.
//!
//! [`PinterestClient`] owns the application credentials, the optional user access token, the
//! endpoint set, and a shared HTTP transport. Operations are split across submodules:
//! authorization helpers, the generic [`call`](PinterestClient::call) primitive, and the
//! resource table built on top of it.

pub mod request;
pub mod resource;

mod authorize;
mod call;

pub use request::*;
pub use resource::*;

// crates.io
use oauth2::ClientSecret;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	config::ClientConfig,
	endpoint::ApiEndpoints,
	error::ConfigError,
	http::ApiHttpClient,
	transport::TransportErrorMapper,
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, transport::ReqwestTransportErrorMapper};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport stack.
pub type ReqwestPinterestClient = PinterestClient<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Pinterest API client bound to one application.
///
/// Configuration is fixed at construction. The access token is the only mutable state and is
/// replaced through [`set_access_token`](Self::set_access_token), which takes `&mut self`: a
/// client shared between tasks must be wrapped by the caller (for example in a lock) so token
/// updates never race in-flight calls.
pub struct PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	http_client: Arc<C>,
	transport_mapper: Arc<M>,
	config: ClientConfig,
	endpoints: ApiEndpoints,
	access_token: Option<AccessToken>,
}
impl<C, M> PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a client that reuses the caller-provided transport + mapper pair.
	///
	/// `config` may be a full [`ClientConfig`] or a bare API key, which limits the client to
	/// public calls.
	pub fn with_http_client(
		config: impl Into<ClientConfig>,
		endpoints: ApiEndpoints,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Result<Self> {
		let config = config.into();

		config.validate()?;

		Ok(Self {
			http_client: http_client.into(),
			transport_mapper: mapper.into(),
			config,
			endpoints,
			access_token: None,
		})
	}

	/// Stores the access token used by authenticated calls.
	///
	/// Accepts a raw token (`&str`, `String`, [`AccessToken`]) or a token endpoint response; both
	/// forms normalize to the same stored value. The token is not validated.
	pub fn set_access_token(&mut self, token: impl Into<AccessToken>) {
		self.access_token = Some(token.into());
	}

	/// Currently stored access token, if any.
	pub fn access_token(&self) -> Option<&AccessToken> {
		self.access_token.as_ref()
	}

	/// Application key sent as `client_id`.
	pub fn api_key(&self) -> &str {
		&self.config.api_key
	}

	/// Application secret, when configured.
	pub fn api_secret(&self) -> Option<&ClientSecret> {
		self.config.api_secret.as_ref()
	}

	/// OAuth callback URL, when configured.
	pub fn callback_url(&self) -> Option<&str> {
		self.config.callback_url.as_deref()
	}

	/// Full configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Endpoint set the client talks to.
	pub fn endpoints(&self) -> &ApiEndpoints {
		&self.endpoints
	}
}
#[cfg(feature = "reqwest")]
impl PinterestClient<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a client for the production Pinterest endpoints.
	///
	/// The client provisions its own reqwest transport. Pass a bare API key for public calls
	/// only, or a [`ClientConfig`] with secret and callback URL to enable the OAuth helpers.
	pub fn new(config: impl Into<ClientConfig>) -> Result<Self> {
		let endpoints = ApiEndpoints::pinterest().map_err(ConfigError::from)?;

		Self::with_http_client(
			config,
			endpoints,
			ReqwestHttpClient::new()?,
			ReqwestTransportErrorMapper,
		)
	}
}
impl<C, M> Clone for PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			transport_mapper: self.transport_mapper.clone(),
			config: self.config.clone(),
			endpoints: self.endpoints.clone(),
			access_token: self.access_token.clone(),
		}
	}
}
impl<C, M> Debug for PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PinterestClient")
			.field("endpoints", &self.endpoints)
			.field("api_key", &self.config.api_key)
			.field("api_secret_set", &self.config.api_secret.is_some())
			.field("callback_url", &self.config.callback_url)
			.field("access_token_set", &self.access_token.is_some())
			.finish()
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;
	use crate::auth::OAuthTokenResponse;

	#[test]
	fn empty_api_key_is_a_configuration_error() {
		let err = ReqwestPinterestClient::new("").expect_err("Empty keys must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::MissingApiKey)));
	}

	#[test]
	fn bare_key_client_exposes_public_config_only() {
		let client = ReqwestPinterestClient::new("KEY123").expect("Bare key client should build.");

		assert_eq!(client.api_key(), "KEY123");
		assert!(client.api_secret().is_none());
		assert!(client.callback_url().is_none());
		assert!(client.access_token().is_none());
	}

	#[test]
	fn token_forms_normalize_to_the_same_value() {
		let mut from_string = ReqwestPinterestClient::new("KEY").expect("Client should build.");
		let mut from_response = from_string.clone();
		let response =
			OAuthTokenResponse::try_from(json!({"access_token": "TOK2", "other_field": "x"}))
				.expect("Token payload should decode.");

		from_string.set_access_token("TOK2");
		from_response.set_access_token(response);

		assert_eq!(from_string.access_token(), from_response.access_token());
		assert_eq!(from_response.access_token().map(AccessToken::expose), Some("TOK2"));
	}

	#[test]
	fn debug_output_hides_credentials() {
		let mut client = ReqwestPinterestClient::new(
			ClientConfig::new("KEY")
				.with_api_secret("very-secret")
				.with_callback_url("https://app.example.com/cb"),
		)
		.expect("OAuth client should build.");

		client.set_access_token("very-private-token");

		let rendered = format!("{client:?}");

		assert!(!rendered.contains("very-secret"));
		assert!(!rendered.contains("very-private-token"));
		assert!(rendered.contains("access_token_set: true"));
	}
}
