//! Pipeline flows: token acquisition, listing retrieval, and latest-daily-post resolution.

pub mod authenticate;
pub mod fetch_listing;
pub mod resolve;

mod common;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::{Config, Endpoints, UserAgent},
	http::HttpTransport,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Runs the resolution pipeline against one token endpoint and one listing endpoint.
///
/// The resolver owns the HTTP transport plus the read-only configuration pulled out of
/// [`Config`], so individual flows only deal with request shapes and response
/// classification. It keeps no state between calls: every [`Resolver::resolve`] fetches a
/// fresh token and a fresh listing.
#[derive(Clone)]
pub struct Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Client credentials presented to the token endpoint.
	pub credentials: Credentials,
	/// User-agent sent with every request.
	pub user_agent: UserAgent,
	/// Upstream endpoints.
	pub endpoints: Endpoints,
}
impl<C> Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	/// Creates a resolver that reuses the caller-provided transport.
	///
	/// `config.request_timeout` is ignored here; it only applies to transports the crate
	/// builds itself.
	pub fn with_http_client(config: Config, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			credentials: config.credentials,
			user_agent: config.user_agent,
			endpoints: config.endpoints,
		}
	}
}
#[cfg(feature = "reqwest")]
impl Resolver<ReqwestHttpClient> {
	/// Creates a resolver backed by a reqwest client built from `config`.
	///
	/// The client never follows redirects and honors `config.request_timeout`.
	pub fn new(config: Config) -> Result<Self> {
		let http_client = ReqwestHttpClient::new(config.request_timeout)?;

		Ok(Self::with_http_client(config, http_client))
	}
}
impl<C> Debug for Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Resolver")
			.field("credentials", &self.credentials)
			.field("user_agent", &self.user_agent)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}
