//! Optional observability helpers for redirect classification.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_interactive.classify` with the
//!   `stage` (call site) field.
//! - Enable `metrics` to increment the `oauth2_interactive_redirect_total` counter for every
//!   classification, labeled by `outcome`.
//!
//! Neither layer ever records redirect content; only the closed outcome labels
//! reach telemetry.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, redirect::AuthorizationResult};

/// Outcome labels recorded per classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RedirectOutcome {
	/// Redirect produced an authorization code.
	Success,
	/// Redirect carried an OAuth error.
	ProtocolError,
	/// Host reported user cancellation.
	UserCancel,
	/// Redirect matched no expected shape.
	InvalidResponse,
}
impl RedirectOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RedirectOutcome::Success => "success",
			RedirectOutcome::ProtocolError => "protocol_error",
			RedirectOutcome::UserCancel => "user_cancel",
			RedirectOutcome::InvalidResponse => "invalid_response",
		}
	}
}
impl Display for RedirectOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<&AuthorizationResult> for RedirectOutcome {
	fn from(result: &AuthorizationResult) -> Self {
		match result {
			AuthorizationResult::Success { .. } => RedirectOutcome::Success,
			AuthorizationResult::ProtocolError { .. } => RedirectOutcome::ProtocolError,
			AuthorizationResult::UserCancel => RedirectOutcome::UserCancel,
			AuthorizationResult::InvalidResponse => RedirectOutcome::InvalidResponse,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcome_labels_cover_every_variant() {
		let labeled = [
			(AuthorizationResult::user_cancelled(), "user_cancel"),
			(AuthorizationResult::parse("scheme://host?code=ABC"), "success"),
			(AuthorizationResult::parse("scheme://host?error=E"), "protocol_error"),
			(AuthorizationResult::parse("scheme://host"), "invalid_response"),
		];

		for (result, label) in labeled {
			assert_eq!(RedirectOutcome::from(&result).as_str(), label);
		}
	}
}
