// self
use crate::{
	_prelude::*,
	obs::{CallOutcome, CallTarget},
};

/// Increments `pinterest_api_call_total` for `target` (when `metrics` is enabled).
pub fn record_call_outcome(target: &CallTarget, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pinterest_api_call_total",
			"kind" => target.kind.as_str(),
			"method" => target.method.as_str(),
			"path" => target.path.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (target, outcome);
	}
}

/// Increments `pinterest_api_call_errors_total` for a failed call (when `metrics` is enabled).
///
/// `status` is the upstream HTTP status, or `none` when the remote never answered.
pub fn record_call_error(target: &CallTarget, error: &Error) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pinterest_api_call_errors_total",
			"kind" => target.kind.as_str(),
			"path" => target.path.to_owned(),
			"error" => error.label(),
			"status" => status_label(error)
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (target, error);
	}
}

#[cfg(any(test, feature = "metrics"))]
fn status_label(error: &Error) -> String {
	error.status().map_or_else(|| "none".to_owned(), |status| status.to_string())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{client::ApiMethod, error::ApiError};

	#[test]
	fn status_label_uses_upstream_status() {
		let rejected: Error =
			ApiError::Rejected { status: 503, body: Value::Null, retry_after: None }.into();
		let missing = Error::Unauthenticated { resource: "/popular/".into() };

		assert_eq!(status_label(&rejected), "503");
		assert_eq!(status_label(&missing), "none");
	}

	#[test]
	fn recording_is_safe_without_a_recorder() {
		let target = CallTarget::resource(ApiMethod::Get, "/boards/", false);
		let rejected: Error =
			ApiError::Rejected { status: 404, body: Value::Null, retry_after: None }.into();

		record_call_outcome(&target, CallOutcome::Failure);
		record_call_error(&target, &rejected);
	}
}
