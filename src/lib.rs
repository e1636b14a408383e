//! Async Pinterest v2 API client: OAuth 2.0 authorization URLs, code exchanges, and the public
//! and authenticated resource endpoints, over a pluggable HTTP transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod obs;
pub mod transport;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		client::ReqwestPinterestClient,
		config::ClientConfig,
		endpoint::ApiEndpoints,
		http::ReqwestHttpClient,
		transport::ReqwestTransportErrorMapper,
	};

	/// Builds the default reqwest transport used across integration tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		ReqwestHttpClient::new().expect("Failed to build Reqwest client for tests.")
	}

	/// Builds an endpoint set whose API, authorize, and token URLs all live under `base`.
	///
	/// `base` is typically `httpmock::MockServer::base_url()`.
	pub fn test_endpoints(base: &str) -> ApiEndpoints {
		let base = base.trim_end_matches('/');

		ApiEndpoints::builder()
			.api(Url::parse(&format!("{base}/v2/")).expect("Mock API base URL should parse."))
			.authorization(
				Url::parse(&format!("{base}/oauth")).expect("Mock authorize URL should parse."),
			)
			.token(
				Url::parse(&format!("{base}/oauth/access_token"))
					.expect("Mock token URL should parse."),
			)
			.build()
			.expect("Mock endpoints should validate.")
	}

	/// Constructs a reqwest-backed client pointed at a mock server rooted at `base`.
	pub fn build_reqwest_test_client(
		config: impl Into<ClientConfig>,
		base: &str,
	) -> ReqwestPinterestClient {
		ReqwestPinterestClient::with_http_client(
			config,
			test_endpoints(base),
			test_reqwest_http_client(),
			ReqwestTransportErrorMapper,
		)
		.expect("Test client should build successfully.")
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
