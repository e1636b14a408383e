//! Optional observability for client calls.
//!
//! Every operation is described by a [`CallTarget`]: the call kind, the HTTP verb, the path it
//! hits, and whether it is authenticated with a user token.
//!
//! # Feature Flags
//!
//! - `tracing`: each call runs inside an `info_span!("pinterest_api.call")` carrying `kind`,
//!   `method`, `path`, and `requires_auth`. When the call finishes the span also gets `outcome`,
//!   plus `error` (see [`Error::label`]) and the upstream `status` for failures.
//! - `metrics`: `pinterest_api_call_total{kind, method, path, outcome}` counts attempts,
//!   successes, and failures; `pinterest_api_call_errors_total{kind, path, error, status}`
//!   breaks failures down by class and HTTP status.
//!
//! Neither layer records parameters, tokens, secrets, or response bodies.

mod metrics;
mod tracing;

pub use self::{metrics::*, tracing::*};

// self
use crate::{_prelude::*, client::ApiMethod};

/// Operation kinds observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Building an OAuth authorization URL.
	AuthorizationUrl,
	/// Exchanging an authorization code for a token.
	TokenExchange,
	/// Calling a REST resource.
	Resource,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::AuthorizationUrl => "authorization_url",
			CallKind::TokenExchange => "token_exchange",
			CallKind::Resource => "resource",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Terminal outcome of a finished call.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Success,
			Err(_) => Self::Failure,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// What a single client operation talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallTarget<'a> {
	/// Operation kind.
	pub kind: CallKind,
	/// HTTP verb the operation uses.
	pub method: ApiMethod,
	/// Resource path, or the endpoint path for OAuth operations.
	pub path: &'a str,
	/// Whether the call is authorized with the user's access token.
	pub requires_auth: bool,
}
impl<'a> CallTarget<'a> {
	/// Describes a resource call.
	pub fn resource(method: ApiMethod, path: &'a str, requires_auth: bool) -> Self {
		Self { kind: CallKind::Resource, method, path, requires_auth }
	}

	/// Describes building a login URL against `endpoint`; no request is sent.
	pub fn authorization_url(endpoint: &'a Url) -> Self {
		Self {
			kind: CallKind::AuthorizationUrl,
			method: ApiMethod::Get,
			path: endpoint.path(),
			requires_auth: false,
		}
	}

	/// Describes an authorization-code exchange posted to `endpoint`.
	pub fn token_exchange(endpoint: &'a Url) -> Self {
		Self {
			kind: CallKind::TokenExchange,
			method: ApiMethod::Post,
			path: endpoint.path(),
			requires_auth: false,
		}
	}
}

/// Opens the span for `target` and counts the attempt.
pub(crate) fn start(target: &CallTarget) -> CallSpan {
	record_call_outcome(target, CallOutcome::Attempt);

	CallSpan::new(target)
}

/// Records the terminal outcome of `result` on both the span and the counters.
pub(crate) fn finish<T>(span: &CallSpan, target: &CallTarget, result: &Result<T>) {
	span.record_result(result);
	record_call_outcome(target, CallOutcome::of(result));

	if let Err(e) = result {
		record_call_error(target, e);
	}
}
