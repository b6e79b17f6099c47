// self
use crate::{http::Upstream, obs::Stage};

/// Counts a finished stage by its outcome label (`success` or an error kind).
pub fn record_stage_outcome(stage: Stage, outcome: &'static str) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"daily_redirect_stage_total",
			"stage" => stage.as_str(),
			"outcome" => outcome
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, outcome);
	}
}

/// Counts every status an upstream answered with, successful or not.
pub fn record_upstream_status(upstream: Upstream, status: u16) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"daily_redirect_upstream_responses_total",
			"upstream" => upstream.as_str(),
			"status" => status.to_string()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (upstream, status);
	}
}

/// Counts proxy responses by status code.
pub fn count_response(status: u16) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("daily_redirect_responses_total", "status" => status.to_string())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = status;
	}
}
