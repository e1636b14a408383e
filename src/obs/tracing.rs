// self
use crate::{_prelude::*, obs::CallTarget};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// The `pinterest_api.call` span wrapped around one client operation.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens a span describing `target`. Result fields start empty.
	pub fn new(target: &CallTarget) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"pinterest_api.call",
				kind = target.kind.as_str(),
				method = target.method.as_str(),
				path = target.path,
				requires_auth = target.requires_auth,
				outcome = tracing::field::Empty,
				error = tracing::field::Empty,
				status = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = target;

			Self {}
		}
	}

	/// Fills the result fields: `outcome`, and for failures `error` plus the upstream `status`.
	pub fn record_result<T>(&self, result: &Result<T>) {
		#[cfg(feature = "tracing")]
		{
			match result {
				Ok(_) => {
					self.span.record("outcome", "success");
				},
				Err(e) => {
					self.span.record("outcome", "failure");
					self.span.record("error", e.label());

					if let Some(status) = e.status() {
						self.span.record("status", u64::from(status));
					}
				},
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = result;
		}
	}

	/// Runs a synchronous section inside the span.
	pub fn in_scope<F, R>(&self, f: F) -> R
	where
		F: FnOnce() -> R,
	{
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
