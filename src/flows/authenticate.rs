//! Client-credentials token exchange.
//!
//! [`Resolver::get_token`] issues exactly one form-encoded POST authenticated with HTTP
//! Basic, and classifies the answer into transport, status, decode, and empty-token
//! failures. Tokens are never cached: every call hits the token endpoint.

// crates.io
use http::{
	Method,
	header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
};
// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	flows::{Resolver, common},
	http::{HttpTransport, Upstream},
	obs::{self, Stage},
};

/// Grant requested from the token endpoint.
pub const GRANT_TYPE: &str = "client_credentials";
/// Content type of the token request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Token endpoint payload; every other field is ignored.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
	#[serde(default)]
	access_token: Option<String>,
}

impl<C> Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	/// Exchanges the client credentials for a fresh bearer token.
	pub async fn get_token(&self) -> Result<BearerToken> {
		obs::observe(Stage::Authenticate, async move {
			let form = url::form_urlencoded::Serializer::new(String::new())
				.append_pair("grant_type", GRANT_TYPE)
				.finish();
			let basic = self.credentials.basic_authorization();
			let request = common::request(
				Upstream::Token,
				Method::POST,
				&self.endpoints.token,
				[
					(AUTHORIZATION, basic.as_str()),
					(CONTENT_TYPE, FORM_CONTENT_TYPE),
					(USER_AGENT, self.user_agent.as_str()),
				],
				form.into_bytes(),
			)?;
			let response = self.send(Upstream::Token, request).await?;

			common::ensure_ok(Upstream::Token, &response)?;

			let payload: AccessTokenResponse = common::decode(Upstream::Token, response.body())?;

			BearerToken::new(payload.access_token.unwrap_or_default())
		})
		.await
	}
}
