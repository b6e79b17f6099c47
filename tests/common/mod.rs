//! Helpers shared by the integration tests.

#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use httpmock::MockServer;
// self
use daily_redirect::{
	auth::Credentials,
	config::{Config, Endpoints, UserAgent},
	flows::Resolver,
	http::{HttpTransport, ReqwestHttpClient},
	url::Url,
};

pub const CLIENT_ID: &str = "username";
pub const CLIENT_SECRET: &str = "secretpassword";
/// `Basic base64("username:secretpassword")`.
pub const BASIC_AUTHORIZATION: &str = "Basic dXNlcm5hbWU6c2VjcmV0cGFzc3dvcmQ=";
pub const USER_AGENT: &str = "rust:daily-redirect:1.0.0 (by /u/operator)";
pub const TOKEN_PATH: &str = "/api/v1/access_token";
pub const LISTING_PATH: &str = "/r/wallstreetbets/new";
pub const POSTS_FIXTURE: &str = include_str!("../fixtures/posts-response.json");
/// URL of the first daily self-post in [`POSTS_FIXTURE`].
pub const FIXTURE_DAILY_URL: &str = "https://www.reddit.com/r/wallstreetbets/comments/1g7k7xx/daily_discussion_thread_for_october_19_2026/";

pub fn config_with_endpoints(token: Url, listing: Url) -> Config {
	Config::new(
		Credentials::new(CLIENT_ID, CLIENT_SECRET),
		UserAgent::compose("rust", "daily-redirect", "1.0.0", "operator"),
		Endpoints::new(token, listing),
	)
}

pub fn config_for(token_server: &MockServer, listing_server: &MockServer) -> Config {
	config_with_endpoints(
		Url::parse(&token_server.url(TOKEN_PATH)).expect("Mock token endpoint should parse."),
		Url::parse(&listing_server.url(LISTING_PATH)).expect("Mock listing endpoint should parse."),
	)
}

pub fn resolver_for(
	token_server: &MockServer,
	listing_server: &MockServer,
) -> Resolver<ReqwestHttpClient> {
	Resolver::new(config_for(token_server, listing_server))
		.expect("Resolver should build with the default reqwest transport.")
}

pub fn resolver_with<C>(transport: Arc<C>) -> Resolver<C>
where
	C: HttpTransport,
{
	let config = config_with_endpoints(
		Url::parse("https://auth.example.com/api/v1/access_token")
			.expect("Fake token endpoint should parse."),
		Url::parse("https://api.example.com/r/wallstreetbets/new")
			.expect("Fake listing endpoint should parse."),
	);

	Resolver::with_http_client(config, transport)
}

/// Renders a listing body for `(title, url, is_self)` triples in order.
pub fn listing_body(posts: &[(&str, &str, bool)]) -> String {
	let children = posts
		.iter()
		.map(|(title, url, is_self)| {
			serde_json::json!({
				"kind": "t3",
				"data": { "title": title, "url": url, "is_self": is_self },
			})
		})
		.collect::<Vec<_>>();

	serde_json::json!({ "kind": "Listing", "data": { "after": null, "children": children } })
		.to_string()
}
