mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use daily_redirect::{auth::BearerToken, error::Error, http::Upstream, listing::Post};

fn token() -> BearerToken {
	BearerToken::new("abc123").expect("Test token should be non-empty.")
}

#[tokio::test]
async fn fetch_listing_sends_bearer_token_and_keeps_order() {
	let server = MockServer::start_async().await;
	let resolver = resolver_for(&server, &server);
	let body = listing_body(&[
		("Some other thread", "https://a.example.com", false),
		("Daily thread", "https://b.example.com", true),
		("External daily thing", "https://c.example.com", false),
	]);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(LISTING_PATH)
				.header("authorization", "bearer abc123")
				.header("user-agent", USER_AGENT);
			then.status(200).header("content-type", "application/json").body(&body);
		})
		.await;
	let listing = resolver.fetch_listing(&token()).await.expect("Listing fetch should succeed.");

	assert_eq!(
		listing.posts(),
		[
			Post::new("Some other thread", "https://a.example.com", false),
			Post::new("Daily thread", "https://b.example.com", true),
			Post::new("External daily thing", "https://c.example.com", false),
		]
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn fetch_listing_decodes_upstream_fixture() {
	let server = MockServer::start_async().await;
	let resolver = resolver_for(&server, &server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path(LISTING_PATH);
			then.status(200).header("content-type", "application/json").body(POSTS_FIXTURE);
		})
		.await;
	let listing = resolver.fetch_listing(&token()).await.expect("Fixture listing should decode.");

	assert_eq!(listing.len(), 5);
	assert_eq!(listing.posts()[0].title, "What Are Your Moves Tomorrow, October 20, 2026");
	assert_eq!(
		listing.select_latest().expect("Fixture holds a daily thread.").url,
		FIXTURE_DAILY_URL
	);
}

#[tokio::test]
async fn fetch_listing_accepts_empty_listing() {
	let server = MockServer::start_async().await;
	let resolver = resolver_for(&server, &server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path(LISTING_PATH);
			then.status(200).body(listing_body(&[]));
		})
		.await;
	let listing = resolver.fetch_listing(&token()).await.expect("Empty listing is not an error.");

	assert!(listing.is_empty());
	assert!(matches!(listing.select_latest(), Err(Error::NotFound)));
}

#[tokio::test]
async fn fetch_listing_maps_non_200_status() {
	let server = MockServer::start_async().await;
	let resolver = resolver_for(&server, &server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path(LISTING_PATH);
			then.status(500).body(POSTS_FIXTURE);
		})
		.await;
	let err = resolver.fetch_listing(&token()).await.expect_err("HTTP 500 should surface.");

	assert!(matches!(err, Error::UpstreamStatus { upstream: Upstream::Listing, status: 500 }));
}

#[tokio::test]
async fn fetch_listing_maps_unexpected_shape_to_decode_error() {
	for body in ["<html>rate limited</html>", "{\"data\": {}}", "{\"data\": {\"children\": [{}]}}"] {
		let server = MockServer::start_async().await;
		let resolver = resolver_for(&server, &server);
		let _mock = server
			.mock_async(|when, then| {
				when.method(GET).path(LISTING_PATH);
				then.status(200).body(body);
			})
			.await;
		let err = resolver.fetch_listing(&token()).await.expect_err("Bad shapes should fail.");

		assert!(
			matches!(err, Error::Decode { upstream: Upstream::Listing, .. }),
			"Body `{body}` produced {err:?}."
		);
	}
}
