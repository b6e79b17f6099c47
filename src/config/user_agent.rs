//! User-agent composition required by the upstream API's usage policy.

// self
use crate::_prelude::*;

/// Identifying user-agent string sent with every upstream request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserAgent(String);
impl UserAgent {
	/// Renders `<platform>:<app_id>:<version> (by /u/<operator>)`.
	pub fn compose(
		platform: impl AsRef<str>,
		app_id: impl AsRef<str>,
		version: impl AsRef<str>,
		operator: impl AsRef<str>,
	) -> Self {
		Self(format!(
			"{}:{}:{} (by /u/{})",
			platform.as_ref(),
			app_id.as_ref(),
			version.as_ref(),
			operator.as_ref()
		))
	}

	/// Returns the user-agent string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for UserAgent {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Display for UserAgent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn compose_matches_usage_policy_format() {
		let agent = UserAgent::compose("platform", "app-id", "1.0.0", "kevin");

		assert_eq!(agent.as_str(), "platform:app-id:1.0.0 (by /u/kevin)");
		assert_eq!(agent.to_string(), agent.as_str());
	}
}
