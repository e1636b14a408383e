//! Client-level error types shared across configuration, authorization, and transport.

// self
use crate::{_prelude::*, auth::ScopeError, endpoint::EndpointError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Requested authorization scope is outside the supported set.
	#[error(transparent)]
	InvalidScope(#[from] ScopeError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The request completed but the response could not be used.
	#[error(transparent)]
	Api(#[from] ApiError),

	/// An authenticated resource was requested before an access token was set.
	#[error("Resource `{resource}` requires an access token, but none has been set.")]
	Unauthenticated {
		/// Resource path that required authentication.
		resource: String,
	},
}

impl Error {
	/// Stable, low-cardinality label for the failure class.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::InvalidScope(_) => "invalid_scope",
			Self::Transport(_) => "transport",
			Self::Api(ApiError::Decode { .. }) => "decode",
			Self::Api(ApiError::Rejected { .. }) => "rejected",
			Self::Api(ApiError::TokenResponse { .. }) => "token_response",
			Self::Unauthenticated { .. } => "unauthenticated",
		}
	}

	/// HTTP status of the response that caused the failure, when the remote answered.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api(e) => e.status(),
			_ => None,
		}
	}
}

/// Configuration and validation failures raised before any network I/O.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Endpoint set failed validation.
	#[error(transparent)]
	InvalidEndpoint(#[from] EndpointError),
	/// Callback URL cannot be parsed.
	#[error("Callback URL is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},

	/// No API key was supplied.
	#[error("An API key is required to construct the client.")]
	MissingApiKey,
	/// An OAuth operation was attempted on a client configured for public calls only.
	#[error("OAuth operations require `{field}`, but the client was configured without it.")]
	MissingOAuthCredentials {
		/// Name of the missing configuration field.
		field: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Pinterest API: {source}.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Pinterest API: {0}.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a typed error.
	#[error("HTTP client error occurred while calling the Pinterest API: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures raised after the remote answered.
#[derive(Debug, ThisError)]
pub enum ApiError {
	/// The response body was not valid JSON.
	#[error("Pinterest API returned a body that is not valid JSON (HTTP {status}).")]
	Decode {
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
		/// HTTP status code of the response.
		status: u16,
	},
	/// The remote answered with a non-success status.
	#[error("Pinterest API rejected the request with HTTP {status}.")]
	Rejected {
		/// HTTP status code of the response.
		status: u16,
		/// Decoded error payload, or the raw body as a JSON string when it is not JSON.
		body: Value,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
	/// Token endpoint answered with JSON that lacks a usable `access_token`.
	#[error("Token endpoint response is missing a usable access_token.")]
	TokenResponse {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ApiError {
	/// HTTP status code attached to the failure, when one exists.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Decode { status, .. } | Self::Rejected { status, .. } => Some(*status),
			Self::TokenResponse { .. } => None,
		}
	}
}
