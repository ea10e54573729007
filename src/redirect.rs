//! Strict classification of the authorization redirect channel.
//!
//! Every byte arriving on this channel is untrusted input from the network or
//! an embedded browser. [`AuthorizationResult::parse`] is total: any string,
//! however malformed, maps to exactly one variant of a closed outcome type.
//! Classification is one-shot and stateless; the driver owns whatever state
//! machine spans "request sent" to "redirect classified", and this module only
//! implements the terminal step. Safe to call concurrently from any thread.

/// Redacted authorization-code wrapper.
pub mod code;

pub use code::*;

// crates.io
use percent_encoding::percent_decode_str;
// self
use crate::{
	_prelude::*,
	oauth::{diagnostic, param},
	obs::{self, ClassifySpan, RedirectOutcome},
};

/// Terminal classification of one authorization attempt.
///
/// Exactly one variant is active and only [`Success`](Self::Success) carries a
/// code field, so reading a credential out of a failed attempt is
/// unrepresentable. Constructed once per attempt, consumed once by the driver,
/// then discarded; never cached or persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthorizationResult {
	/// Provider returned an authorization code.
	Success {
		/// Authorization code extracted from the redirect; non-empty.
		code: AuthorizationCode,
	},
	/// Provider returned an OAuth `error` parameter.
	ProtocolError {
		/// Provider-supplied error code, verbatim.
		error: String,
		/// Provider-specific sub-error, when supplied.
		sub_error: Option<String>,
	},
	/// Host signaled that the user aborted the flow before any redirect.
	UserCancel,
	/// Redirect carried neither a code nor an error, or had no query at all.
	InvalidResponse,
}
impl AuthorizationResult {
	/// Classifies a raw redirect URI into a terminal outcome.
	///
	/// Total over all string inputs. An unparseable URI, a missing query, and
	/// an empty query all classify as [`InvalidResponse`](Self::InvalidResponse).
	/// When both `code` and `error` are present the error wins: a provider or
	/// attacker smuggling a spurious error next to a valid code must not get
	/// the code treated as authoritative.
	pub fn parse(raw_redirect: &str) -> Self {
		let _guard = ClassifySpan::new("parse").entered();
		let result = classify(raw_redirect);

		obs::record_redirect_outcome(RedirectOutcome::from(&result));

		result
	}

	/// Builds the outcome for the host's explicit "user cancelled" signal.
	///
	/// Cancellation is an input value, not an interrupted computation; no
	/// redirect is involved and no prior state is consulted.
	pub fn user_cancelled() -> Self {
		obs::record_redirect_outcome(RedirectOutcome::UserCancel);

		AuthorizationResult::UserCancel
	}

	/// Returns the authorization code for successful attempts.
	pub fn code(&self) -> Option<&AuthorizationCode> {
		match self {
			AuthorizationResult::Success { code } => Some(code),
			_ => None,
		}
	}

	/// Returns true for [`Success`](Self::Success).
	pub fn is_success(&self) -> bool {
		matches!(self, AuthorizationResult::Success { .. })
	}

	/// Stable error code for non-success outcomes.
	///
	/// Provider-supplied for [`ProtocolError`](Self::ProtocolError); the fixed
	/// [`diagnostic`] codes for cancellation and invalid responses.
	pub fn error_code(&self) -> Option<&str> {
		match self {
			AuthorizationResult::Success { .. } => None,
			AuthorizationResult::ProtocolError { error, .. } => Some(error),
			AuthorizationResult::UserCancel => Some(diagnostic::USER_CANCELLED),
			AuthorizationResult::InvalidResponse => Some(diagnostic::AUTHORIZATION_FAILED),
		}
	}

	/// Provider-specific sub-error accompanying a protocol error.
	pub fn sub_error(&self) -> Option<&str> {
		match self {
			AuthorizationResult::ProtocolError { sub_error, .. } => sub_error.as_deref(),
			_ => None,
		}
	}

	/// Fixed diagnostic message for locally-labeled outcomes.
	///
	/// Never contains redirect content, so drivers can log it without leaking
	/// codes or tokens.
	pub fn diagnostic_message(&self) -> Option<&'static str> {
		match self {
			AuthorizationResult::UserCancel => Some(diagnostic::USER_CANCELLED_MESSAGE),
			AuthorizationResult::InvalidResponse =>
				Some(diagnostic::AUTHORIZATION_FAILED_MESSAGE),
			_ => None,
		}
	}
}

fn classify(raw_redirect: &str) -> AuthorizationResult {
	let Some(query) = extract_query(raw_redirect) else {
		return AuthorizationResult::InvalidResponse;
	};
	let params = decode_query(&query);

	if let Some(error) = first(&params, param::ERROR) {
		return AuthorizationResult::ProtocolError {
			error: error.to_owned(),
			sub_error: first(&params, param::ERROR_SUBCODE).map(str::to_owned),
		};
	}
	if let Some(code) = first(&params, param::CODE) {
		// An empty code violates the non-empty success invariant and falls
		// through to the catch-all.
		if !code.is_empty() {
			return AuthorizationResult::Success { code: AuthorizationCode::new(code) };
		}
	}

	AuthorizationResult::InvalidResponse
}

/// Extracts the non-empty query component, treating unparseable URIs the same
/// as URIs without a query.
fn extract_query(raw_redirect: &str) -> Option<String> {
	let url = Url::parse(raw_redirect).ok()?;

	match url.query() {
		Some(query) if !query.is_empty() => Some(query.to_owned()),
		_ => None,
	}
}

/// Decodes a query string into an ordered parameter list.
///
/// Splits on `&`, then on the first `=` within each pair; a pair without `=`
/// is a bare key with an empty value. Duplicate keys keep the first
/// occurrence, which stays deterministic against response-splitting attempts.
/// A pair whose key or value fails to decode is dropped on its own; pairs with
/// empty keys are dropped too.
fn decode_query(query: &str) -> Vec<(String, String)> {
	let mut params: Vec<(String, String)> = Vec::new();

	for pair in query.split('&') {
		if pair.is_empty() {
			continue;
		}

		let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
		let Some(key) = decode_component(raw_key) else {
			continue;
		};

		if key.is_empty() || params.iter().any(|(existing, _)| *existing == key) {
			continue;
		}

		let Some(value) = decode_component(raw_value) else {
			continue;
		};

		params.push((key, value));
	}

	params
}

/// Percent-decodes one `application/x-www-form-urlencoded` component.
///
/// `+` means space; bytes that do not form valid UTF-8 after unescaping
/// invalidate the component.
fn decode_component(raw: &str) -> Option<String> {
	let spaced = raw.replace('+', " ");

	percent_decode_str(&spaced).decode_utf8().ok().map(|decoded| decoded.into_owned())
}

fn first<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
	params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// First-wins lookup of a single decoded parameter on a raw redirect.
///
/// Shares the classifier's defensive decoding so the state check in
/// [`AuthorizationAttempt::finish`](crate::attempt::AuthorizationAttempt::finish)
/// sees exactly what classification saw.
pub(crate) fn first_parameter(raw_redirect: &str, key: &str) -> Option<String> {
	let query = extract_query(raw_redirect)?;

	decode_query(&query).into_iter().find(|(k, _)| k == key).map(|(_, value)| value)
}
