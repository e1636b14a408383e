//! Mapping transport failures and raw responses into client results.

pub use oauth2;

// crates.io
use oauth2::{
	HttpClientError, HttpResponse,
	http::{HeaderMap, header::RETRY_AFTER},
};
use time::format_description::well_known::Rfc2822;
// self
#[cfg(feature = "reqwest")] use crate::error::ConfigError;
use crate::{
	_prelude::*,
	error::{ApiError, TransportError},
	obs::CallKind,
};

const BODY_PREVIEW_LIMIT: usize = 256;

/// Maps HTTP transport failures into client [`Error`] values.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a client error.
	fn map_transport_error(&self, kind: CallKind, error: HttpClientError<E>) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, kind: CallKind, err: HttpClientError<ReqwestError>) -> Error {
		let _ = kind;

		match err {
			HttpClientError::Reqwest(inner) if inner.is_builder() => ConfigError::from(*inner).into(),
			HttpClientError::Reqwest(inner) => TransportError::from(*inner).into(),
			HttpClientError::Http(inner) => ConfigError::from(inner).into(),
			HttpClientError::Io(inner) => TransportError::Io(inner).into(),
			HttpClientError::Other(message) => TransportError::Other { message }.into(),
			other => TransportError::Other { message: format!("{other:?}") }.into(),
		}
	}
}

/// Decodes a completed response into JSON.
///
/// Non-success statuses become [`ApiError::Rejected`] carrying whatever the body decoded to.
/// A successful empty body decodes to [`Value::Null`].
pub(crate) fn decode_response(response: HttpResponse) -> Result<Value, ApiError> {
	let status = response.status();
	let body = response.body();

	if !status.is_success() {
		return Err(ApiError::Rejected {
			status: status.as_u16(),
			body: decode_lenient(body),
			retry_after: parse_retry_after(response.headers()),
		});
	}
	if body.iter().all(u8::is_ascii_whitespace) {
		return Ok(Value::Null);
	}

	serde_json::from_slice(body).map_err(|source| ApiError::Decode { source, status: status.as_u16() })
}

fn decode_lenient(body: &[u8]) -> Value {
	if let Ok(value) = serde_json::from_slice(body) {
		return value;
	}

	let text = String::from_utf8_lossy(body);

	Value::String(text.chars().take(BODY_PREVIEW_LIMIT).collect())
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(secs.into()));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
