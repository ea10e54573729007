//! Fixed OAuth 2.0 wire vocabulary shared by the request and redirect sides.
//!
//! Parameter names are protocol constants, not configuration. The redirect
//! classifier recognizes exactly [`param::CODE`], [`param::ERROR`], and
//! [`param::ERROR_SUBCODE`]; the request side appends the remaining names when
//! assembling the authorize URL.

/// Fixed `response_type` value for the authorization-code grant.
pub const RESPONSE_TYPE_CODE: &str = "code";

/// Query parameter names exchanged with the authorization endpoint.
pub mod param {
	/// Authorization code returned on a successful redirect.
	pub const CODE: &str = "code";
	/// OAuth error code returned on a failed redirect.
	pub const ERROR: &str = "error";
	/// Provider-specific sub-error accompanying [`ERROR`].
	pub const ERROR_SUBCODE: &str = "error_subcode";
	/// CSRF-protection nonce round-tripped through the provider.
	pub const STATE: &str = "state";
	/// Requested response type; always [`RESPONSE_TYPE_CODE`](super::RESPONSE_TYPE_CODE) here.
	pub const RESPONSE_TYPE: &str = "response_type";
	/// Client identifier issued by the provider.
	pub const CLIENT_ID: &str = "client_id";
	/// Redirect URI the provider must send the user back to.
	pub const REDIRECT_URI: &str = "redirect_uri";
	/// Space-delimited scope list.
	pub const SCOPE: &str = "scope";
	/// Pre-fills the provider's account picker.
	pub const LOGIN_HINT: &str = "login_hint";
	/// Prompt policy directive.
	pub const PROMPT: &str = "prompt";
}

/// Fixed diagnostic codes and messages for outcomes the provider never labels itself.
///
/// Messages deliberately carry no redirect content so they are safe to log.
pub mod diagnostic {
	/// Error code reported when the user aborts the flow.
	pub const USER_CANCELLED: &str = "user_cancelled";
	/// Message accompanying [`USER_CANCELLED`].
	pub const USER_CANCELLED_MESSAGE: &str = "User cancelled the authorization flow.";
	/// Error code reported for redirects that match no expected shape.
	pub const AUTHORIZATION_FAILED: &str = "authorization_failed";
	/// Message accompanying [`AUTHORIZATION_FAILED`].
	pub const AUTHORIZATION_FAILED_MESSAGE: &str =
		"The authorization server returned an invalid response.";
}
