//! Maps pipeline outcomes onto API-gateway style proxy responses.
//!
//! An invocation walks `Authenticating → Listing → Selecting` and ends in exactly one of two
//! terminal states:
//!
//! - `Redirect`: status 307, `Location` set to the selected post's URL, body echoing that URL.
//! - `Failed`: status 500 and no `Location` header. A selection miss answers with the stable
//!   body [`NOT_FOUND_BODY`]; any other failure answers with the error message as body. The
//!   upstream status that caused a failure only shows up in that message.
//!
//! The inbound event is opaque: any event triggers exactly one pipeline run.

// self
use crate::{
	_prelude::*,
	flows::Resolver,
	http::HttpTransport,
	listing::Post,
	obs,
};
#[cfg(feature = "reqwest")] use crate::{config::Config, http::ReqwestHttpClient};

/// Status code of a successful redirect (temporary redirect).
pub const REDIRECT_STATUS: u16 = 307;
/// Status code of every failed invocation.
pub const SERVER_ERROR_STATUS: u16 = 500;
/// Body returned when the listing holds no daily thread.
pub const NOT_FOUND_BODY: &str = "no daily post found";
/// Header carrying the redirect target.
pub const LOCATION_HEADER: &str = "Location";

/// Opaque inbound trigger; its contents are never inspected.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InboundEvent(pub serde_json::Value);

/// Outbound proxy response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
	/// HTTP status code.
	pub status_code: u16,
	/// Response body.
	pub body: String,
	/// Response headers.
	pub headers: BTreeMap<String, String>,
}
impl ProxyResponse {
	/// Builds a temporary redirect to `location`; the body repeats the target.
	pub fn redirect(location: impl Into<String>) -> Self {
		let location = location.into();
		let headers = BTreeMap::from([(LOCATION_HEADER.to_owned(), location.clone())]);

		Self { status_code: REDIRECT_STATUS, body: location, headers }
	}

	/// Builds a failure response without a `Location` header.
	pub fn failure(status_code: u16, body: impl Into<String>) -> Self {
		Self { status_code, body: body.into(), headers: BTreeMap::new() }
	}

	/// Maps a pipeline outcome onto its terminal response.
	pub fn from_resolution(result: &Result<Post>) -> Self {
		match result {
			Ok(post) => Self::redirect(post.url.as_str()),
			Err(Error::NotFound) => Self::failure(SERVER_ERROR_STATUS, NOT_FOUND_BODY),
			Err(err) => Self::failure(SERVER_ERROR_STATUS, err.to_string()),
		}
	}

	/// Redirect target, when the response is a redirect.
	pub fn location(&self) -> Option<&str> {
		self.headers.get(LOCATION_HEADER).map(String::as_str)
	}
}

/// Turns inbound events into proxy responses by running one pipeline per event.
#[derive(Clone, Debug)]
pub struct Handler<C>
where
	C: ?Sized + HttpTransport,
{
	resolver: Resolver<C>,
}
impl<C> Handler<C>
where
	C: ?Sized + HttpTransport,
{
	/// Wraps an existing resolver.
	pub fn with_resolver(resolver: Resolver<C>) -> Self {
		Self { resolver }
	}

	/// Runs the pipeline once and maps the outcome. Never fails: errors become responses.
	pub async fn handle(&self, event: &InboundEvent) -> ProxyResponse {
		let _ = event;
		let result = self.resolver.resolve().await;
		let response = ProxyResponse::from_resolution(&result);

		obs::record_response(response.status_code, response.location());

		response
	}
}
#[cfg(feature = "reqwest")]
impl Handler<ReqwestHttpClient> {
	/// Creates a handler backed by the default reqwest transport.
	pub fn new(config: Config) -> Result<Self> {
		Ok(Self::with_resolver(Resolver::new(config)?))
	}
}
