//! Decode-only shape of the upstream listing envelope.
//!
//! The upstream nests every post as `{"data": {"children": [{"data": {...}}]}}`. Unknown
//! fields (`kind`, `after`, scores, ...) are ignored.

// self
use crate::{
	_prelude::*,
	listing::{Listing, Post},
};

/// Top-level listing envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingEnvelope {
	/// Listing payload.
	pub data: ListingData,
}

/// Listing payload holding the ordered children.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingData {
	/// Wrapped posts in upstream order.
	pub children: Vec<ListingChild>,
}

/// Wrapper around a single post.
#[derive(Clone, Debug, Deserialize)]
pub struct ListingChild {
	/// Post fields.
	pub data: PostData,
}

/// Post fields the pipeline relies on.
#[derive(Clone, Debug, Deserialize)]
pub struct PostData {
	/// Post title.
	pub title: String,
	/// Target URL.
	pub url: String,
	/// Missing means the entry is not a self-post.
	#[serde(default)]
	pub is_self: bool,
}

impl From<PostData> for Post {
	fn from(data: PostData) -> Self {
		Post { title: data.title, url: data.url, is_self: data.is_self }
	}
}
impl From<ListingEnvelope> for Listing {
	fn from(envelope: ListingEnvelope) -> Self {
		Listing::new(envelope.data.children.into_iter().map(|child| child.data.into()).collect())
	}
}
