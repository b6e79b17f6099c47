// self
use crate::{
	_prelude::*,
	obs::{self, Stage},
};

/// Span wrapping one pipeline stage.
///
/// Without the `tracing` feature the span is empty and every method simply runs the stage.
#[derive(Clone, Debug)]
pub struct StageSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl StageSpan {
	/// Opens the `daily_redirect.stage` span for `stage`.
	///
	/// `outcome` and `status` start empty and are filled by [`StageSpan::record_result`].
	pub fn new(stage: Stage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"daily_redirect.stage",
				stage = stage.as_str(),
				upstream = stage.upstream().map(|upstream| upstream.as_str()),
				outcome = tracing::field::Empty,
				status = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Drives `fut` to completion inside the span.
	pub async fn run<Fut>(&self, fut: Fut) -> Fut::Output
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone()).await
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut.await
		}
	}

	/// Runs `f` with the span entered.
	pub fn in_scope<T, F>(&self, f: F) -> T
	where
		F: FnOnce() -> T,
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

	/// Fills the `outcome`/`status` fields and emits the matching event.
	///
	/// A selection miss is an expected outcome and is reported at `info`; other failures are
	/// `warn`. Error messages never carry secrets.
	pub fn record_result<T>(&self, result: &Result<T>) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", obs::outcome_label(result));

			match result {
				Ok(_) => tracing::debug!(parent: &self.span, "Stage completed."),
				Err(Error::NotFound) =>
					tracing::info!(parent: &self.span, "No daily post in the listing."),
				Err(err) => {
					if let Some(status) = err.upstream_status() {
						self.span.record("status", status);
					}

					tracing::warn!(parent: &self.span, error = %err, "Pipeline stage failed.");
				},
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = obs::outcome_label(result);
		}
	}
}

/// Emits the final status code (and redirect target, if any) of an invocation.
pub fn log_response(status: u16, location: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		tracing::info!(status, location, "Invocation answered.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, location);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn run_and_in_scope_return_stage_output() {
		let span = StageSpan::new(Stage::FetchListing);

		assert_eq!(span.run(async { 42 }).await, 42);
		assert_eq!(span.in_scope(|| "listing"), "listing");

		span.record_result::<()>(&Err(Error::NotFound));
	}
}
