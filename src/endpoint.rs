//! Remote endpoints the client talks to.
//!
//! Production code uses [`ApiEndpoints::pinterest`]; tests and proxies assemble their own set
//! through [`ApiEndpoints::builder`], which applies the same validation.

/// Builder API for assembling endpoint sets.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Base URL for resource calls.
pub const API_URL: &str = "https://api.pinterest.com/v2/";
/// OAuth authorization URL end-users are redirected to.
pub const API_OAUTH_URL: &str = "https://api.pinterest.com/oauth";
/// OAuth token URL used by the authorization-code exchange.
pub const API_OAUTH_TOKEN_URL: &str = "https://api.pinterest.com/oauth/access_token";

/// Endpoint set consumed by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoints {
	/// Base URL that resource paths are joined onto.
	pub api: Url,
	/// Authorization endpoint used to build login URLs.
	pub authorization: Url,
	/// Token endpoint used for code exchanges.
	pub token: Url,
}
impl ApiEndpoints {
	/// Creates a new builder seeded with the Pinterest defaults.
	pub fn builder() -> ApiEndpointsBuilder {
		ApiEndpointsBuilder::new()
	}

	/// Returns the production Pinterest endpoints.
	pub fn pinterest() -> Result<Self, EndpointError> {
		Self::builder().build()
	}

	/// Joins a resource path such as `/boards/` onto the API base.
	///
	/// Leading and trailing slashes are normalized so the result never contains `//`.
	pub fn resource_url(&self, path: &str) -> Url {
		let mut url = self.api.clone();
		let base = self.api.path().trim_end_matches('/');
		let resource = path.trim_start_matches('/');

		url.set_path(&format!("{base}/{resource}"));
		url.set_query(None);

		url
	}
}
