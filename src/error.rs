//! Error types shared across the interactive core.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
///
/// Redirect classification never produces these: it is total and reports every
/// anomaly as an [`AuthorizationResult`](crate::redirect::AuthorizationResult)
/// variant. Errors arise only from the state contract enforced by
/// [`AuthorizationAttempt::finish`](crate::attempt::AuthorizationAttempt::finish).
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum Error {
	/// Redirect carried an authorization code but no `state` parameter.
	#[error("Authorization redirect is missing the state parameter.")]
	MissingState,
	/// Redirect `state` does not match the nonce issued for the attempt.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}
