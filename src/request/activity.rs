// self
use crate::_prelude::*;

/// Opaque, non-owning reference to the host UI context that will own the
/// browser surface.
///
/// The core never controls the referent's lifetime. Hosts mint a token for the
/// window or activity that should parent the sign-in surface and map it back
/// when the driver asks them to launch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityHandle(u64);
impl ActivityHandle {
	/// Wraps a host-assigned token.
	pub const fn from_raw(token: u64) -> Self {
		Self(token)
	}

	/// Returns the host-assigned token.
	pub const fn as_raw(self) -> u64 {
		self.0
	}
}
impl Debug for ActivityHandle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "ActivityHandle({})", self.0)
	}
}
impl Display for ActivityHandle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}", self.0)
	}
}
