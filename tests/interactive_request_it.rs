// self
use oauth2_interactive::{
	request::{ActivityHandle, AuthorizationRequest, Prompt},
	url::Url,
};

fn full_request() -> AuthorizationRequest {
	AuthorizationRequest::builder()
		.scopes(["openid", "profile"])
		.activity(ActivityHandle::from_raw(7))
		.login_hint("user@example.com")
		.prompt(Prompt::SelectAccount)
		.extra_scopes_to_consent(["offline_access"])
		.extra_query_parameters([("dc", "ESTS-PUB"), ("slice", "alpha")])
		.build()
}

#[test]
fn builder_round_trip_exposes_every_field() {
	let request = full_request();

	assert_eq!(request.scopes(), ["openid".to_owned(), "profile".to_owned()]);
	assert_eq!(request.activity(), Some(ActivityHandle::from_raw(7)));
	assert_eq!(request.login_hint(), Some("user@example.com"));
	assert_eq!(request.prompt(), Prompt::SelectAccount);
	assert_eq!(request.extra_scopes_to_consent(), ["offline_access".to_owned()]);
	assert_eq!(request.extra_query_parameters(), [
		("dc".to_owned(), "ESTS-PUB".to_owned()),
		("slice".to_owned(), "alpha".to_owned()),
	]);
}

#[test]
fn built_requests_compare_structurally() {
	// Retries build a new value; equality is how drivers may assert the retry
	// asks for the same thing.
	assert_eq!(full_request(), full_request());

	let cloned = full_request();

	assert_eq!(cloned.clone(), cloned);
}

#[test]
fn builder_accepts_unvalidated_input() {
	// No semantic validation in this layer: empty hints, odd scopes, and
	// reserved parameter names all pass through for the driver to judge.
	let request = AuthorizationRequest::builder()
		.login_hint("")
		.extra_scopes_to_consent(["not a scope", ""])
		.extra_query_parameters([("redirect_uri", "https://evil.example.com/cb")])
		.build();

	assert_eq!(request.login_hint(), Some(""));
	assert_eq!(
		request.extra_scopes_to_consent(),
		["not a scope".to_owned(), String::new()]
	);
	assert_eq!(request.extra_query_parameters(), [(
		"redirect_uri".to_owned(),
		"https://evil.example.com/cb".to_owned()
	)]);
}

#[test]
fn requests_are_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}

	assert_send_sync::<AuthorizationRequest>();
	assert_send_sync::<Url>();
}
