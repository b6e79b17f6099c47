//! Bearer token issued by the token endpoint for a single invocation.

// self
use crate::_prelude::*;

/// Non-empty bearer token. Lives for one invocation and is never persisted.
///
/// Formatting redacts the value; use [`BearerToken::expose`] only when building the
/// `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);
impl BearerToken {
	/// Wraps a token value, rejecting empty strings with [`Error::EmptyToken`].
	pub fn new(value: impl Into<String>) -> Result<Self> {
		let value = value.into();

		if value.is_empty() {
			return Err(Error::EmptyToken);
		}

		Ok(Self(value))
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Renders the `Authorization` header value expected by the listing endpoint.
	pub fn authorization(&self) -> String {
		format!("bearer {}", self.0)
	}
}
impl Debug for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("BearerToken").field(&"<redacted>").finish()
	}
}
impl Display for BearerToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
