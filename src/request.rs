//! Interactive request parameters and their builder.
//!
//! [`AuthorizationRequest`] is a frozen snapshot of what one authorization
//! attempt should ask for. The builder accepts anything and validates nothing;
//! scope syntax, duplicate extras, and reserved-parameter collisions are the
//! request driver's problem at serialization time.

/// Opaque host UI handle.
pub mod activity;
/// Builder API for assembling interactive requests.
pub mod builder;
/// Prompt policy enumeration.
pub mod prompt;

pub use activity::*;
pub use builder::*;
pub use prompt::*;

// self
use crate::_prelude::*;

/// Immutable description of one interactive authorization attempt.
///
/// Built once via [`AuthorizationRequestBuilder`] and handed to the flow
/// driver; never mutated mid-flow. A retry constructs a new value. Every
/// sequence is frozen on build, so mutating a collection the caller handed to
/// the builder afterwards is not observable here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	scopes: Arc<[String]>,
	activity: Option<ActivityHandle>,
	login_hint: Option<String>,
	prompt: Prompt,
	extra_scopes_to_consent: Arc<[String]>,
	extra_query_parameters: Arc<[(String, String)]>,
}
impl AuthorizationRequest {
	/// Creates a new builder with every field unset.
	pub fn builder() -> AuthorizationRequestBuilder {
		AuthorizationRequestBuilder::new()
	}

	/// Scopes requested for the resulting tokens, in the order supplied.
	pub fn scopes(&self) -> &[String] {
		&self.scopes
	}

	/// Host UI context that will own the browser surface.
	pub fn activity(&self) -> Option<ActivityHandle> {
		self.activity
	}

	/// Login hint pre-filling the provider's account picker.
	pub fn login_hint(&self) -> Option<&str> {
		self.login_hint.as_deref()
	}

	/// Prompt policy for the attempt.
	pub fn prompt(&self) -> Prompt {
		self.prompt
	}

	/// Additional scopes to pre-consent alongside the primary set.
	///
	/// Ordered and not deduplicated; distinct from [`scopes`](Self::scopes).
	pub fn extra_scopes_to_consent(&self) -> &[String] {
		&self.extra_scopes_to_consent
	}

	/// Provider-specific query parameters appended verbatim to the authorize URL.
	pub fn extra_query_parameters(&self) -> &[(String, String)] {
		&self.extra_query_parameters
	}
}
