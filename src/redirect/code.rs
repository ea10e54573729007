// self
use crate::_prelude::*;

/// Authorization code extracted from a successful redirect.
///
/// The code is a short-lived, single-use credential exchanged downstream for
/// tokens. `Debug` and `Display` redact it; the raw value is reachable only
/// through [`expose`](Self::expose).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AuthorizationCode(String);
impl AuthorizationCode {
	/// Wraps a code received on the redirect channel.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner code. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AuthorizationCode {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AuthorizationCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthorizationCode").field(&"<redacted>").finish()
	}
}
impl Display for AuthorizationCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
