//! Interactive attempt lifecycle: state nonce, authorize URL, state-checked finish.
//!
//! One [`AuthorizationAttempt`] spans exactly one launch of the browser
//! surface. The attempt is serializable so hosts can persist it across the
//! request/response boundary; native hosts routinely lose the process while
//! the browser is in the foreground.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
// self
use crate::{
	_prelude::*,
	oauth::{RESPONSE_TYPE_CODE, param},
	redirect::{self, AuthorizationResult},
	request::AuthorizationRequest,
};

const STATE_NONCE_BYTES: usize = 32;

/// One in-flight interactive authorization attempt.
///
/// [`start`](Self::start) generates the CSRF state nonce and assembles the
/// authorize URL from the request parameters; [`finish`](Self::finish)
/// classifies the redirect and enforces the state contract. Exactly one
/// attempt should be in flight per logical sign-in; the browser surface is a
/// singleton host resource and enforcing that stays with the driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationAttempt {
	state: String,
	issued_at: OffsetDateTime,
	redirect_uri: Url,
	authorize_url: Url,
}
impl AuthorizationAttempt {
	/// Starts an attempt against the provider's authorization endpoint.
	///
	/// The request parameters are consumed read-only; a retry starts a fresh
	/// attempt with a fresh nonce.
	pub fn start(
		authorization_endpoint: &Url,
		client_id: &str,
		redirect_uri: Url,
		request: &AuthorizationRequest,
	) -> Self {
		let state = generate_state();
		let authorize_url =
			build_authorize_url(authorization_endpoint, client_id, &redirect_uri, &state, request);

		Self { state, issued_at: OffsetDateTime::now_utc(), redirect_uri, authorize_url }
	}

	/// State nonce issued for the attempt.
	pub fn state(&self) -> &str {
		&self.state
	}

	/// Instant the attempt was started.
	pub fn issued_at(&self) -> OffsetDateTime {
		self.issued_at
	}

	/// Redirect URI the provider must send the user back to.
	pub fn redirect_uri(&self) -> &Url {
		&self.redirect_uri
	}

	/// Fully-formed authorize URL for the browser surface.
	pub fn authorize_url(&self) -> &Url {
		&self.authorize_url
	}

	/// Classifies the redirect and enforces the state contract.
	///
	/// A [`Success`](AuthorizationResult::Success) whose redirect omits
	/// `state`, or echoes a nonce other than the one issued here, is rejected
	/// instead of surfacing the possibly injected code. Non-success outcomes
	/// pass through unvalidated; they carry no credential. Cancellation never
	/// goes through `finish`; use
	/// [`AuthorizationResult::user_cancelled`] for that signal.
	pub fn finish(&self, raw_redirect: &str) -> Result<AuthorizationResult> {
		let outcome = AuthorizationResult::parse(raw_redirect);

		if outcome.is_success() {
			match redirect::first_parameter(raw_redirect, param::STATE) {
				Some(echoed) if echoed == self.state => {},
				Some(_) => return Err(Error::StateMismatch),
				None => return Err(Error::MissingState),
			}
		}

		Ok(outcome)
	}
}

fn generate_state() -> String {
	let mut bytes = [0_u8; STATE_NONCE_BYTES];

	rand::rng().fill(&mut bytes[..]);

	URL_SAFE_NO_PAD.encode(bytes)
}

fn build_authorize_url(
	endpoint: &Url,
	client_id: &str,
	redirect_uri: &Url,
	state: &str,
	request: &AuthorizationRequest,
) -> Url {
	let mut url = endpoint.clone();
	let mut pairs = url.query_pairs_mut();

	pairs.append_pair(param::RESPONSE_TYPE, RESPONSE_TYPE_CODE);
	pairs.append_pair(param::CLIENT_ID, client_id);
	pairs.append_pair(param::REDIRECT_URI, redirect_uri.as_str());

	if let Some(scope_value) = merged_scope(request) {
		pairs.append_pair(param::SCOPE, &scope_value);
	}
	if let Some(hint) = request.login_hint() {
		pairs.append_pair(param::LOGIN_HINT, hint);
	}
	if let Some(prompt) = request.prompt().wire_value() {
		pairs.append_pair(param::PROMPT, prompt);
	}

	pairs.append_pair(param::STATE, state);

	// Extra parameters go last, verbatim and in order; collisions with the
	// reserved names above are the driver's responsibility to police.
	for (key, value) in request.extra_query_parameters() {
		pairs.append_pair(key, value);
	}

	drop(pairs);

	url
}

/// Primary scopes followed by extra consent scopes, space joined, first
/// occurrence wins.
fn merged_scope(request: &AuthorizationRequest) -> Option<String> {
	let mut seen: Vec<&str> = Vec::new();

	for scope in request.scopes().iter().chain(request.extra_scopes_to_consent()) {
		if !seen.contains(&scope.as_str()) {
			seen.push(scope);
		}
	}

	if seen.is_empty() { None } else { Some(seen.join(" ")) }
}
