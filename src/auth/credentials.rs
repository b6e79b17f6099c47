//! OAuth client credentials loaded once per process.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
// self
use crate::_prelude::*;

/// Client identifier/secret pair used for HTTP Basic authentication against the token endpoint.
///
/// Credentials are read-only for the lifetime of the process. The secret never shows up in
/// `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
	client_id: String,
	client_secret: ClientSecret,
}
impl Credentials {
	/// Creates a new credential pair.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: ClientSecret(client_secret.into()) }
	}

	/// OAuth client identifier.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// OAuth client secret wrapper.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}

	/// Renders the `Authorization` header value for HTTP Basic authentication.
	pub fn basic_authorization(&self) -> String {
		let pair = format!("{}:{}", self.client_id, self.client_secret.expose());

		format!("Basic {}", STANDARD.encode(pair))
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.finish()
	}
}

/// Redacted client secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
