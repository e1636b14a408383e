// self
use crate::{
	_prelude::*,
	endpoint::{API_OAUTH_TOKEN_URL, API_OAUTH_URL, API_URL, ApiEndpoints},
};

/// Errors raised while constructing or validating endpoint sets.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum EndpointError {
	/// A default endpoint constant failed to parse.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidUrl {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Builder for [`ApiEndpoints`] values.
///
/// Unset endpoints fall back to the Pinterest production URLs.
#[derive(Debug, Default)]
pub struct ApiEndpointsBuilder {
	/// Override for the resource base URL.
	pub api: Option<Url>,
	/// Override for the authorization endpoint.
	pub authorization: Option<Url>,
	/// Override for the token endpoint.
	pub token: Option<Url>,
}
impl ApiEndpointsBuilder {
	/// Creates a builder with no overrides.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the resource base URL.
	pub fn api(mut self, url: Url) -> Self {
		self.api = Some(url);

		self
	}

	/// Sets the authorization endpoint.
	pub fn authorization(mut self, url: Url) -> Self {
		self.authorization = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token(mut self, url: Url) -> Self {
		self.token = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting endpoint set.
	pub fn build(self) -> Result<ApiEndpoints, EndpointError> {
		let endpoints = ApiEndpoints {
			api: or_default("api", self.api, API_URL)?,
			authorization: or_default("authorization", self.authorization, API_OAUTH_URL)?,
			token: or_default("token", self.token, API_OAUTH_TOKEN_URL)?,
		};

		validate_endpoint("api", &endpoints.api)?;
		validate_endpoint("authorization", &endpoints.authorization)?;
		validate_endpoint("token", &endpoints.token)?;

		Ok(endpoints)
	}
}

fn or_default(
	endpoint: &'static str,
	url: Option<Url>,
	default: &str,
) -> Result<Url, EndpointError> {
	match url {
		Some(url) => Ok(url),
		None => Url::parse(default).map_err(|source| EndpointError::InvalidUrl { endpoint, source }),
	}
}

fn validate_endpoint(endpoint: &'static str, url: &Url) -> Result<(), EndpointError> {
	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(url) => Ok(()),
		_ => Err(EndpointError::InsecureEndpoint { endpoint, url: url.to_string() }),
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
		Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
		None => false,
	}
}
