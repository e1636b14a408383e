//! OAuth 2.0 helpers: authorization URLs and authorization-code exchanges.
//!
//! Both helpers require a client configured with an API secret and a callback URL. A client
//! built from a bare API key fails with [`ConfigError::MissingOAuthCredentials`] before any URL
//! is produced or any request leaves the process.

// crates.io
use oauth2::{
	HttpRequest,
	http::{
		Method, Request,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, OAuthTokenResponse, ScopeList},
	client::{
		PinterestClient,
		call::{FORM_CONTENT_TYPE, JSON_CONTENT_TYPE},
	},
	error::ConfigError,
	http::ApiHttpClient,
	obs::{self, CallKind, CallTarget},
	transport::TransportErrorMapper,
};

impl<C, M> PinterestClient<C, M>
where
	C: ?Sized + ApiHttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Builds the login URL end-users are redirected to.
	///
	/// Every entry of `scopes` must name one of [`Scope::ALL`](crate::auth::Scope::ALL);
	/// otherwise [`Error::InvalidScope`] is returned. Scopes appear in the order supplied,
	/// joined by `+`.
	pub fn build_authorization_url<I, S>(&self, scopes: I) -> Result<Url>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let target = CallTarget::authorization_url(&self.endpoints.authorization);
		let span = obs::start(&target);
		let result = span.in_scope(|| {
			ScopeList::new(scopes)
				.map_err(Error::from)
				.and_then(|scopes| self.authorization_url(&scopes))
		});

		obs::finish(&span, &target, &result);

		result
	}

	/// Builds the login URL requesting only the `basic` scope.
	pub fn build_default_authorization_url(&self) -> Result<Url> {
		self.build_authorization_url(ScopeList::default().iter())
	}

	/// Exchanges an authorization code for the full token endpoint response.
	pub async fn exchange_code_for_token(&self, code: &str) -> Result<OAuthTokenResponse> {
		let target = CallTarget::token_exchange(&self.endpoints.token);
		let span = obs::start(&target);
		let result = span
			.instrument(async move {
				let request = self.build_token_request(code)?;
				let value = self.send(CallKind::TokenExchange, request).await?;

				Ok(OAuthTokenResponse::try_from(value)?)
			})
			.await;

		obs::finish(&span, &target, &result);

		result
	}

	/// Exchanges an authorization code and returns only the issued access token.
	///
	/// The token is not stored; pass it to [`set_access_token`](Self::set_access_token).
	pub async fn exchange_code_for_access_token(&self, code: &str) -> Result<AccessToken> {
		self.exchange_code_for_token(code).await.map(AccessToken::from)
	}

	fn authorization_url(&self, scopes: &ScopeList) -> Result<Url> {
		let callback = self.config.require_callback_url()?;
		let mut url = self.endpoints.authorization.clone();
		let mut pairs = url.query_pairs_mut();

		pairs.append_pair("client_id", &self.config.api_key);
		pairs.append_pair("redirect_uri", callback);
		// Form encoding renders the space delimiter as a literal `+`.
		pairs.append_pair("scope", &scopes.join(' '));
		pairs.append_pair("response_type", "code");

		drop(pairs);

		Ok(url)
	}

	pub(crate) fn build_token_request(&self, code: &str) -> Result<HttpRequest> {
		let secret = self.config.require_api_secret()?;
		let callback = self.config.require_callback_url()?;
		let body = form_urlencoded::Serializer::new(String::new())
			.append_pair("grant_type", "authorization_code")
			.append_pair("client_id", &self.config.api_key)
			.append_pair("client_secret", secret.secret())
			.append_pair("redirect_uri", callback)
			.append_pair("code", code)
			.finish();
		let request = Request::builder()
			.method(Method::POST)
			.uri(self.endpoints.token.as_str())
			.header(ACCEPT, JSON_CONTENT_TYPE)
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.body(body.into_bytes())
			.map_err(ConfigError::from)?;

		Ok(request)
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::{
		auth::{Scope, ScopeError},
		client::ReqwestPinterestClient,
		config::ClientConfig,
	};

	const CALLBACK: &str = "https://app.example.com/oauth/callback";

	fn oauth_client() -> ReqwestPinterestClient {
		ReqwestPinterestClient::new(
			ClientConfig::new("KEY").with_api_secret("SECRET").with_callback_url(CALLBACK),
		)
		.expect("OAuth client should build.")
	}

	#[test]
	fn authorization_url_preserves_parameter_order() {
		let url = oauth_client()
			.build_authorization_url(["basic", "likes"])
			.expect("Known scopes should produce a URL.");

		assert_eq!(
			url.as_str(),
			"https://api.pinterest.com/oauth?client_id=KEY&redirect_uri=https%3A%2F%2Fapp.example.com%2Foauth%2Fcallback&scope=basic+likes&response_type=code"
		);
	}

	#[test]
	fn authorization_url_keeps_supplied_scope_order() {
		let url = oauth_client()
			.build_authorization_url([Scope::Relationships, Scope::Basic, Scope::Comments])
			.expect("Typed scopes should produce a URL.");
		let scope = url
			.query()
			.and_then(|query| query.split('&').find(|pair| pair.starts_with("scope=")))
			.expect("Authorization URL should carry a scope parameter.");

		assert_eq!(scope, "scope=relationships+basic+comments");
	}

	#[test]
	fn default_authorization_url_requests_basic() {
		let url = oauth_client()
			.build_default_authorization_url()
			.expect("Default scopes should produce a URL.");

		assert!(url.as_str().contains("&scope=basic&"));
	}

	#[test]
	fn empty_scope_list_yields_an_empty_scope_parameter() {
		let url = oauth_client()
			.build_authorization_url(Vec::<&str>::new())
			.expect("An empty scope list should still produce a URL.");

		assert_eq!(
			url.query(),
			Some(
				"client_id=KEY&redirect_uri=https%3A%2F%2Fapp.example.com%2Foauth%2Fcallback&scope=&response_type=code"
			)
		);
	}

	#[test]
	fn unknown_scope_is_rejected() {
		let err = oauth_client()
			.build_authorization_url(["basic", "superpower"])
			.expect_err("Unknown scopes must be rejected.");

		assert!(matches!(
			err,
			Error::InvalidScope(ScopeError::Unsupported { ref scope }) if scope == "superpower"
		));
	}

	#[test]
	fn bare_key_client_cannot_build_authorization_urls() {
		let client = ReqwestPinterestClient::new("KEY").expect("Bare key client should build.");
		let err = client
			.build_default_authorization_url()
			.expect_err("Public-only clients must not build login URLs.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::MissingOAuthCredentials { field: "callback_url" })
		));
	}

	#[test]
	fn token_request_carries_every_exchange_field() {
		let request =
			oauth_client().build_token_request("CODE").expect("Token request should build.");
		let body = String::from_utf8(request.body().clone()).expect("Form body should be UTF-8.");

		assert_eq!(request.method(), &Method::POST);
		assert_eq!(request.uri().to_string(), "https://api.pinterest.com/oauth/access_token");
		assert_eq!(
			body,
			"grant_type=authorization_code&client_id=KEY&client_secret=SECRET&redirect_uri=https%3A%2F%2Fapp.example.com%2Foauth%2Fcallback&code=CODE"
		);
	}

	#[tokio::test]
	async fn bare_key_client_cannot_exchange_codes() {
		let client = ReqwestPinterestClient::new("KEY").expect("Bare key client should build.");
		let err = client
			.exchange_code_for_token("CODE")
			.await
			.expect_err("Public-only clients must not exchange codes.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::MissingOAuthCredentials { field: "api_secret" })
		));
	}
}
