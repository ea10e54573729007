// self
use crate::{
	_prelude::*,
	request::{ActivityHandle, AuthorizationRequest, Prompt},
};

/// Accumulates interactive request fields and freezes them on [`build`](Self::build).
///
/// Every setter replaces the previous value for its field; the last call wins.
/// The builder performs no semantic validation and `build` cannot fail;
/// invalid combinations surface later at request-construction or network time.
#[derive(Clone, Debug, Default)]
pub struct AuthorizationRequestBuilder {
	scopes: Vec<String>,
	activity: Option<ActivityHandle>,
	login_hint: Option<String>,
	prompt: Prompt,
	extra_scopes_to_consent: Vec<String>,
	extra_query_parameters: Vec<(String, String)>,
}
impl AuthorizationRequestBuilder {
	/// Creates a builder with every field unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the scopes requested for the resulting tokens.
	pub fn scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Sets the host UI context that will own the browser surface.
	pub fn activity(mut self, activity: ActivityHandle) -> Self {
		self.activity = Some(activity);

		self
	}

	/// Sets the login hint pre-filling the provider's account picker.
	pub fn login_hint(mut self, hint: impl Into<String>) -> Self {
		self.login_hint = Some(hint.into());

		self
	}

	/// Sets the prompt policy for the attempt.
	pub fn prompt(mut self, prompt: Prompt) -> Self {
		self.prompt = prompt;

		self
	}

	/// Sets additional scopes to request consent for alongside the primary set.
	pub fn extra_scopes_to_consent<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.extra_scopes_to_consent = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Sets provider-specific query parameters appended verbatim to the
	/// authorize URL.
	///
	/// Keys are not checked against reserved parameter names here.
	pub fn extra_query_parameters<I, K, V>(mut self, parameters: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.extra_query_parameters =
			parameters.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

		self
	}

	/// Consumes the builder and freezes the accumulated fields into an
	/// immutable [`AuthorizationRequest`].
	pub fn build(self) -> AuthorizationRequest {
		AuthorizationRequest {
			scopes: self.scopes.into(),
			activity: self.activity,
			login_hint: self.login_hint,
			prompt: self.prompt,
			extra_scopes_to_consent: self.extra_scopes_to_consent.into(),
			extra_query_parameters: self.extra_query_parameters.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn getters_return_last_value_set() {
		let request = AuthorizationRequest::builder()
			.scopes(["openid"])
			.scopes(["openid", "profile"])
			.activity(ActivityHandle::from_raw(1))
			.activity(ActivityHandle::from_raw(2))
			.login_hint("first@example.com")
			.login_hint("last@example.com")
			.prompt(Prompt::Login)
			.prompt(Prompt::Consent)
			.build();

		assert_eq!(request.scopes(), ["openid".to_owned(), "profile".to_owned()]);
		assert_eq!(request.activity(), Some(ActivityHandle::from_raw(2)));
		assert_eq!(request.login_hint(), Some("last@example.com"));
		assert_eq!(request.prompt(), Prompt::Consent);
	}

	#[test]
	fn unset_fields_default_sensibly() {
		let request = AuthorizationRequest::builder().build();

		assert!(request.scopes().is_empty());
		assert_eq!(request.activity(), None);
		assert_eq!(request.login_hint(), None);
		assert_eq!(request.prompt(), Prompt::Default);
		assert!(request.extra_scopes_to_consent().is_empty());
		assert!(request.extra_query_parameters().is_empty());
	}

	#[test]
	fn built_request_is_frozen_against_source_mutation() {
		let mut extra_scopes = vec!["offline_access".to_owned()];
		let mut extra_params = vec![("slice".to_owned(), "alpha".to_owned())];
		let request = AuthorizationRequest::builder()
			.extra_scopes_to_consent(extra_scopes.clone())
			.extra_query_parameters(extra_params.clone())
			.build();

		extra_scopes.push("mail.read".to_owned());
		extra_params.clear();

		assert_eq!(request.extra_scopes_to_consent(), ["offline_access".to_owned()]);
		assert_eq!(
			request.extra_query_parameters(),
			[("slice".to_owned(), "alpha".to_owned())]
		);
	}

	#[test]
	fn extra_sequences_preserve_order_and_duplicates() {
		let request = AuthorizationRequest::builder()
			.extra_scopes_to_consent(["b", "a", "b"])
			.extra_query_parameters([("k", "1"), ("k", "2")])
			.build();

		assert_eq!(
			request.extra_scopes_to_consent(),
			["b".to_owned(), "a".to_owned(), "b".to_owned()]
		);
		assert_eq!(
			request.extra_query_parameters(),
			[("k".to_owned(), "1".to_owned()), ("k".to_owned(), "2".to_owned())]
		);
	}
}
