//! Optional observability helpers for the resolution pipeline.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every stage inside a span named `daily_redirect.stage`. The span
//!   carries `stage` and `upstream` up front and gains `outcome` (plus `status` for upstream
//!   status failures) once the stage finishes.
//! - Enable `metrics` to count stage outcomes (`daily_redirect_stage_total`), upstream
//!   answers (`daily_redirect_upstream_responses_total`), and proxy responses
//!   (`daily_redirect_responses_total`).
//!
//! Without the features every helper compiles down to running the stage itself.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, http::Upstream};

/// Label recorded for a stage that finished without error.
pub const SUCCESS_OUTCOME: &str = "success";

/// Pipeline stages observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
	/// Client-credentials token exchange.
	Authenticate,
	/// Listing retrieval with the bearer token.
	FetchListing,
	/// First-match scan over the listing.
	SelectLatest,
}
impl Stage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Stage::Authenticate => "authenticate",
			Stage::FetchListing => "fetch_listing",
			Stage::SelectLatest => "select_latest",
		}
	}

	/// Upstream contacted by the stage; selection runs locally.
	pub const fn upstream(self) -> Option<Upstream> {
		match self {
			Stage::Authenticate => Some(Upstream::Token),
			Stage::FetchListing => Some(Upstream::Listing),
			Stage::SelectLatest => None,
		}
	}
}
impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome label for `result`: [`SUCCESS_OUTCOME`] or the failure's [`Error::kind`].
pub fn outcome_label<T>(result: &Result<T>) -> &'static str {
	match result {
		Ok(_) => SUCCESS_OUTCOME,
		Err(err) => err.kind(),
	}
}

/// Runs `fut` as `stage` and records how it ended.
pub async fn observe<T, Fut>(stage: Stage, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = StageSpan::new(stage);
	let result = span.run(fut).await;

	finish(stage, &span, &result);

	result
}

/// Synchronous counterpart of [`observe`] for stages that never touch the network.
pub fn observe_sync<T, F>(stage: Stage, f: F) -> Result<T>
where
	F: FnOnce() -> Result<T>,
{
	let span = StageSpan::new(stage);
	let result = span.in_scope(f);

	finish(stage, &span, &result);

	result
}

/// Logs and counts the final answer of one invocation.
pub fn record_response(status: u16, location: Option<&str>) {
	log_response(status, location);
	count_response(status);
}

fn finish<T>(stage: Stage, span: &StageSpan, result: &Result<T>) {
	span.record_result(result);
	record_stage_outcome(stage, outcome_label(result));
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn stages_map_to_their_upstream() {
		assert_eq!(Stage::Authenticate.upstream(), Some(Upstream::Token));
		assert_eq!(Stage::FetchListing.upstream(), Some(Upstream::Listing));
		assert_eq!(Stage::SelectLatest.upstream(), None);
	}

	#[test]
	fn outcome_labels_follow_error_kind() {
		let forbidden: Result<()> =
			Err(Error::UpstreamStatus { upstream: Upstream::Listing, status: 403 });

		assert_eq!(outcome_label(&Ok::<_, Error>(())), "success");
		assert_eq!(outcome_label(&forbidden), "upstream_status");
		assert_eq!(outcome_label::<()>(&Err(Error::NotFound)), "not_found");
	}

	#[tokio::test]
	async fn observe_returns_stage_result_unchanged() {
		let token = observe(Stage::Authenticate, async { Ok::<_, Error>("abc123") }).await;

		assert_eq!(token.expect("Successful stage should pass through."), "abc123");

		let miss = observe_sync::<(), _>(Stage::SelectLatest, || Err(Error::NotFound));

		assert!(matches!(miss, Err(Error::NotFound)));
	}
}
