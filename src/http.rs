//! Transport primitives for the token and listing exchanges.
//!
//! Requests and responses are plain [`http::Request`]/[`http::Response`] values carrying byte
//! bodies, so flows never depend on a concrete HTTP stack. [`HttpTransport`] is the only seam;
//! the reqwest-backed [`ReqwestHttpClient`] is the production implementation and tests plug in
//! their own.

// crates.io
use http::{HeaderValue, Method, Request, Response, header::IntoHeaderName};
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Outbound request handed to an [`HttpTransport`].
pub type HttpRequest = Request<Vec<u8>>;
/// Raw response captured by an [`HttpTransport`].
pub type HttpResponse = Response<Vec<u8>>;

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing one request per call.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can sit behind an
/// [`Arc`] for the whole process, and the returned future must be `Send` so callers can hop
/// executors. A transport performs exactly one exchange per call: no retries, no caching, no
/// redirect following.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the raw response, whatever its status.
	///
	/// Only failures to send or read the exchange are errors; non-success statuses are
	/// returned as regular [`HttpResponse`] values.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Upstream services contacted by the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Upstream {
	/// OAuth token endpoint.
	Token,
	/// Subreddit listing endpoint.
	Listing,
}
impl Upstream {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Upstream::Token => "token",
			Upstream::Listing => "listing",
		}
	}
}
impl Display for Upstream {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{} endpoint", self.as_str())
	}
}

/// Assembles a request against `url`.
///
/// Header names are case-insensitive: a later entry replaces any earlier value for the same
/// name instead of sending both.
pub fn build_request<K, V, I>(
	method: Method,
	url: &Url,
	headers: I,
	body: Vec<u8>,
) -> Result<HttpRequest, http::Error>
where
	K: IntoHeaderName,
	V: AsRef<str>,
	I: IntoIterator<Item = (K, V)>,
{
	let mut request = Request::builder().method(method).uri(url.as_str()).body(body)?;

	for (name, value) in headers {
		request.headers_mut().insert(name, HeaderValue::from_str(value.as_ref())?);
	}

	Ok(request)
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Clients built through [`ReqwestHttpClient::new`] never follow redirects, so a redirecting
/// upstream surfaces as a status error instead of silently resolving elsewhere. No request
/// timeout is set unless one is passed explicitly.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled and an optional total request timeout.
	pub fn new(timeout: Option<std::time::Duration>) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none());

		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		Ok(Self(builder.build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let response = self.0.execute(request.try_into()?).await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut converted = HttpResponse::new(response.bytes().await?.to_vec());

			*converted.status_mut() = status;
			*converted.headers_mut() = headers;

			Ok(converted)
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use http::header::{AUTHORIZATION, HeaderName, USER_AGENT};
	// self
	use super::*;

	fn url() -> Url {
		Url::parse("https://example.com/r/rust/new").expect("Failed to parse test URL.")
	}

	#[test]
	fn upstream_labels_are_stable() {
		assert_eq!(Upstream::Token.as_str(), "token");
		assert_eq!(Upstream::Listing.to_string(), "listing endpoint");
	}

	#[test]
	fn repeated_headers_replace_regardless_of_casing() {
		let mixed_case =
			HeaderName::from_bytes(b"Authorization").expect("Mixed-case name should parse.");
		let headers = [
			(HeaderName::from_static("authorization"), "bearer a"),
			(mixed_case, "bearer b"),
			(USER_AGENT, "rust:daily-redirect:1.0.0 (by /u/operator)"),
		];
		let request = build_request(Method::GET, &url(), headers, Vec::new())
			.expect("Request with valid headers should build.");

		assert_eq!(request.method(), Method::GET);
		assert_eq!(request.uri(), "https://example.com/r/rust/new");
		assert_eq!(request.headers().len(), 2);
		assert_eq!(request.headers().get_all(AUTHORIZATION).iter().count(), 1);
		assert_eq!(request.headers()[AUTHORIZATION], "bearer b");
	}

	#[test]
	fn invalid_header_values_fail_to_build() {
		let headers = [(USER_AGENT, "line\nbreak")];

		assert!(build_request(Method::POST, &url(), headers, b"body".to_vec()).is_err());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn reqwest_client_builds_with_and_without_timeout() {
		assert!(ReqwestHttpClient::new(None).is_ok());
		assert!(ReqwestHttpClient::new(Some(std::time::Duration::from_secs(5))).is_ok());
	}
}
