//! Pipeline-level error types shared across configuration, flows, and the handler.

// self
use crate::{_prelude::*, http::Upstream};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Only the handler turns these into status codes and bodies; flows return them as-is.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem detected at startup.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, body read).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Upstream answered with a status other than 200.
	#[error("The {upstream} failed with response {status}.")]
	UpstreamStatus {
		/// Upstream that produced the status.
		upstream: Upstream,
		/// HTTP status code returned by the upstream.
		status: u16,
	},
	/// Upstream body did not match the expected JSON shape.
	#[error("The {upstream} returned malformed JSON: {source}.")]
	Decode {
		/// Upstream whose body failed to decode.
		upstream: Upstream,
		/// Structured parsing failure, including the path of the offending field.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token endpoint answered 200 without a usable `access_token`.
	#[error("Token endpoint returned an empty access token.")]
	EmptyToken,
	/// Listing holds no self-post whose title mentions the daily keyword.
	#[error("No daily post found in the listing.")]
	NotFound,
}
impl Error {
	/// Returns the upstream HTTP status carried by [`Error::UpstreamStatus`].
	pub fn upstream_status(&self) -> Option<u16> {
		match self {
			Self::UpstreamStatus { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns the upstream a failure is attributed to, if any.
	pub fn upstream(&self) -> Option<Upstream> {
		match self {
			Self::Transport(err) => Some(err.upstream()),
			Self::UpstreamStatus { upstream, .. } | Self::Decode { upstream, .. } =>
				Some(*upstream),
			Self::EmptyToken => Some(Upstream::Token),
			Self::Config(_) | Self::NotFound => None,
		}
	}

	/// Returns a stable label for the failure class.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Config(_) => "config",
			Self::Transport(_) => "transport",
			Self::UpstreamStatus { .. } => "upstream_status",
			Self::Decode { .. } => "decode",
			Self::EmptyToken => "empty_token",
			Self::NotFound => "not_found",
		}
	}
}

/// Configuration and validation failures raised before any request is served.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},

	/// Required environment variable is absent or empty.
	#[error("Environment variable `{name}` is not set.")]
	MissingVar {
		/// Variable name.
		name: &'static str,
	},
	/// Environment variable does not hold a parseable URL.
	#[error("Environment variable `{name}` does not hold a valid URL.")]
	InvalidUrl {
		/// Variable name.
		name: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Timeout override is not a positive integer.
	#[error("Environment variable `{name}` must be a positive number of seconds, got `{value}`.")]
	InvalidTimeout {
		/// Variable name.
		name: &'static str,
		/// Raw value that failed to parse.
		value: String,
	},
	/// Subreddit name cannot be placed in a listing path.
	#[error("Subreddit name `{name}` is invalid.")]
	InvalidSubreddit {
		/// Raw subreddit name.
		name: String,
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

/// Transport-level failures (request assembly, network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Request could not be assembled (invalid URI or header value).
	#[error("Request to the {upstream} could not be assembled.")]
	Request {
		/// Upstream the request was addressed to.
		upstream: Upstream,
		/// Underlying request builder failure.
		#[source]
		source: http::Error,
	},
	/// Underlying HTTP client failed to send or read the exchange.
	#[error("Network error occurred while calling the {upstream}.")]
	Network {
		/// Upstream the request was addressed to.
		upstream: Upstream,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(upstream: Upstream, src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { upstream, source: Box::new(src) }
	}

	/// Upstream the failed request was addressed to.
	pub fn upstream(&self) -> Upstream {
		match self {
			Self::Request { upstream, .. } | Self::Network { upstream, .. } => *upstream,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn upstream_status_only_reported_for_status_errors() {
		let status = Error::UpstreamStatus { upstream: Upstream::Listing, status: 503 };

		assert_eq!(status.upstream_status(), Some(503));
		assert_eq!(status.to_string(), "The listing endpoint failed with response 503.");
		assert_eq!(Error::EmptyToken.upstream_status(), None);
		assert_eq!(Error::NotFound.upstream_status(), None);
	}

	#[test]
	fn failures_carry_kind_and_upstream_labels() {
		let status = Error::UpstreamStatus { upstream: Upstream::Listing, status: 403 };

		assert_eq!(status.kind(), "upstream_status");
		assert_eq!(status.upstream(), Some(Upstream::Listing));
		assert_eq!(Error::EmptyToken.kind(), "empty_token");
		assert_eq!(Error::EmptyToken.upstream(), Some(Upstream::Token));
		assert_eq!(Error::NotFound.kind(), "not_found");
		assert_eq!(Error::NotFound.upstream(), None);
	}

	#[test]
	fn transport_errors_keep_their_upstream() {
		let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
		let err = TransportError::network(Upstream::Token, io);

		assert_eq!(err.upstream(), Upstream::Token);
		assert_eq!(err.to_string(), "Network error occurred while calling the token endpoint.");
		assert!(err.source().is_some());
	}
}
