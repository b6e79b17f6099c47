//! End-to-end resolution: token, listing, then first-match selection.

// self
use crate::{
	_prelude::*,
	flows::Resolver,
	http::HttpTransport,
	listing::{Listing, Post},
	obs::{self, Stage},
};

impl<C> Resolver<C>
where
	C: ?Sized + HttpTransport,
{
	/// Resolves the latest daily thread.
	///
	/// Stages run strictly in sequence and the first failure short-circuits the rest: a failed
	/// token exchange never reaches the listing endpoint.
	pub async fn resolve(&self) -> Result<Post> {
		let token = self.get_token().await?;
		let listing = self.fetch_listing(&token).await?;

		select_latest(&listing)
	}
}

/// Runs [`Listing::select_latest`] as the observed `select_latest` stage.
pub fn select_latest(listing: &Listing) -> Result<Post> {
	obs::observe_sync(Stage::SelectLatest, || listing.select_latest().cloned())
}
