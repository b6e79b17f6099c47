//! Process configuration loaded once at startup and passed into the pipeline by value.
//!
//! [`Config::from_env`] reads the process environment; [`Config::from_lookup`] accepts any
//! lookup function so callers and tests can inject values without touching global state.
//! Missing required values are startup failures, never per-request errors.

pub mod user_agent;

pub use user_agent::*;

// std
use std::time::Duration;
// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

/// OAuth client identifier.
pub const ENV_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
/// OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
/// Subreddit whose listing is scanned; optional when [`ENV_LISTING_URL`] is set.
pub const ENV_SUBREDDIT: &str = "REDDIT_SUBREDDIT";
/// Token endpoint override.
pub const ENV_TOKEN_URL: &str = "REDDIT_TOKEN_URL";
/// Listing endpoint override.
pub const ENV_LISTING_URL: &str = "REDDIT_LISTING_URL";
/// User-agent platform tag.
pub const ENV_UA_PLATFORM: &str = "USER_AGENT_PLATFORM";
/// User-agent application identifier.
pub const ENV_UA_APP_ID: &str = "USER_AGENT_APP_ID";
/// User-agent version or commit tag.
pub const ENV_UA_VERSION: &str = "USER_AGENT_VERSION";
/// User-agent operator account.
pub const ENV_UA_OPERATOR: &str = "USER_AGENT_OPERATOR";
/// Optional total request timeout in whole seconds.
pub const ENV_REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT_SECS";

/// Default OAuth token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
/// Host serving authenticated listing requests.
pub const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";

/// Upstream endpoints contacted by the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
	/// Token endpoint used for the client-credentials exchange.
	pub token: Url,
	/// Listing endpoint returning the newest posts first.
	pub listing: Url,
}
impl Endpoints {
	/// Creates an endpoint pair from explicit URLs.
	pub fn new(token: Url, listing: Url) -> Self {
		Self { token, listing }
	}
}

/// Explicit configuration value consumed by [`Resolver`](crate::flows::Resolver).
#[derive(Clone, Debug)]
pub struct Config {
	/// Client credentials for the token exchange.
	pub credentials: Credentials,
	/// User-agent sent with every upstream request.
	pub user_agent: UserAgent,
	/// Upstream endpoints.
	pub endpoints: Endpoints,
	/// Total per-request timeout; `None` leaves requests unbounded.
	pub request_timeout: Option<Duration>,
}
impl Config {
	/// Creates a configuration without a request timeout.
	pub fn new(credentials: Credentials, user_agent: UserAgent, endpoints: Endpoints) -> Self {
		Self { credentials, user_agent, endpoints, request_timeout: None }
	}

	/// Sets a total per-request timeout.
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);

		self
	}

	/// Loads the configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Loads the configuration through `lookup`; blank values count as missing.
	///
	/// Credentials are kept byte for byte as supplied; every other value is trimmed.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let raw = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
		let var = |name: &str| raw(name).map(|value| value.trim().to_owned());
		let required_raw =
			|name: &'static str| raw(name).ok_or(ConfigError::MissingVar { name });
		let required = |name: &'static str| var(name).ok_or(ConfigError::MissingVar { name });
		let credentials =
			Credentials::new(required_raw(ENV_CLIENT_ID)?, required_raw(ENV_CLIENT_SECRET)?);
		let user_agent = UserAgent::compose(
			required(ENV_UA_PLATFORM)?,
			required(ENV_UA_APP_ID)?,
			required(ENV_UA_VERSION)?,
			required(ENV_UA_OPERATOR)?,
		);
		let token = match var(ENV_TOKEN_URL) {
			Some(raw) => parse_url(ENV_TOKEN_URL, &raw)?,
			None => parse_url(ENV_TOKEN_URL, DEFAULT_TOKEN_URL)?,
		};
		let listing = match var(ENV_LISTING_URL) {
			Some(raw) => parse_url(ENV_LISTING_URL, &raw)?,
			None => listing_url(&required(ENV_SUBREDDIT)?)?,
		};
		let request_timeout =
			var(ENV_REQUEST_TIMEOUT).map(|raw| parse_timeout(ENV_REQUEST_TIMEOUT, raw)).transpose()?;

		Ok(Self {
			credentials,
			user_agent,
			endpoints: Endpoints::new(token, listing),
			request_timeout,
		})
	}
}

/// Builds the newest-first listing URL for `subreddit`.
pub fn listing_url(subreddit: &str) -> Result<Url, ConfigError> {
	let name = subreddit.trim_start_matches("r/");

	if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
		return Err(ConfigError::InvalidSubreddit { name: subreddit.to_owned() });
	}

	parse_url(ENV_SUBREDDIT, &format!("{DEFAULT_API_BASE}/r/{name}/new"))
}

fn parse_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { name, source })
}

fn parse_timeout(name: &'static str, raw: String) -> Result<Duration, ConfigError> {
	match raw.parse::<u64>() {
		Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
		_ => Err(ConfigError::InvalidTimeout { name, value: raw }),
	}
}
