//! Listing retrieval with a bearer token.

// crates.io
use http::{
	Method,
	header::{AUTHORIZATION, USER_AGENT},
};
// self
use crate::{
	_prelude::*,
	auth::BearerToken,
	flows::{Resolver, common},
	http::{HttpTransport, Upstream},
	listing::{Listing, wire::ListingEnvelope},
	obs::{self, Stage},
};

impl<C> Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	/// Fetches the first page of the listing in upstream order.
	///
	/// An empty listing is a valid result; only selection treats it as a miss.
	pub async fn fetch_listing(&self, token: &BearerToken) -> Result<Listing> {
		obs::observe(Stage::FetchListing, async move {
			let bearer = token.authorization();
			let request = common::request(
				Upstream::Listing,
				Method::GET,
				&self.endpoints.listing,
				[(AUTHORIZATION, bearer.as_str()), (USER_AGENT, self.user_agent.as_str())],
				Vec::new(),
			)?;
			let response = self.send(Upstream::Listing, request).await?;

			common::ensure_ok(Upstream::Listing, &response)?;

			let envelope: ListingEnvelope = common::decode(Upstream::Listing, response.body())?;

			Ok(Listing::from(envelope))
		})
		.await
	}
}
