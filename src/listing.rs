//! Domain listing model and the latest-daily-post selection.
//!
//! [`Listing`] keeps posts in the order the upstream returned them (newest first). The wire
//! envelope the upstream wraps them in lives in [`wire`] and never leaks past decoding.

pub mod wire;

// self
use crate::_prelude::*;

/// Keyword a title must contain, case-insensitively, to count as a daily thread.
pub const DAILY_KEYWORD: &str = "daily";

/// One listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
	/// Post title.
	pub title: String,
	/// Target URL; for self-posts this is the discussion page itself.
	pub url: String,
	/// Whether the post is a text (self) post rather than an external link.
	pub is_self: bool,
}
impl Post {
	/// Creates a post.
	pub fn new(title: impl Into<String>, url: impl Into<String>, is_self: bool) -> Self {
		Self { title: title.into(), url: url.into(), is_self }
	}

	/// Checks whether the title contains [`DAILY_KEYWORD`] anywhere, ignoring case.
	pub fn mentions_daily(&self) -> bool {
		self.title.to_lowercase().contains(DAILY_KEYWORD)
	}

	/// Checks both selection predicates: a self-post whose title mentions the keyword.
	pub fn is_daily_thread(&self) -> bool {
		self.is_self && self.mentions_daily()
	}
}

/// Ordered sequence of posts, newest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing(Vec<Post>);
impl Listing {
	/// Wraps posts, keeping their order.
	pub fn new(posts: Vec<Post>) -> Self {
		Self(posts)
	}

	/// Returns the posts in upstream order.
	pub fn posts(&self) -> &[Post] {
		&self.0
	}

	/// Number of posts in the listing.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the listing holds no posts.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the first daily thread in listing order.
	///
	/// The scan stops at the first post that is a self-post and mentions the keyword; later
	/// candidates are never compared. An empty listing or one without candidates yields
	/// [`Error::NotFound`].
	pub fn select_latest(&self) -> Result<&Post> {
		self.0.iter().find(|post| post.is_daily_thread()).ok_or(Error::NotFound)
	}
}
impl From<Vec<Post>> for Listing {
	fn from(posts: Vec<Post>) -> Self {
		Self::new(posts)
	}
}
