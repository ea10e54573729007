//! Walks through one interactive attempt: build the request, start the attempt,
//! hand the authorize URL to a (simulated) browser surface, and finish with the
//! redirect it returns.

// crates.io
use color_eyre::Result;
use url::Url;
// self
use oauth2_interactive::{
	attempt::AuthorizationAttempt,
	request::{ActivityHandle, AuthorizationRequest, Prompt},
};

fn main() -> Result<()> {
	color_eyre::install()?;

	let request = AuthorizationRequest::builder()
		.scopes(["openid", "profile"])
		.activity(ActivityHandle::from_raw(1))
		.login_hint("user@example.com")
		.prompt(Prompt::SelectAccount)
		.extra_scopes_to_consent(["offline_access"])
		.extra_query_parameters([("slice", "alpha")])
		.build();
	let endpoint = Url::parse("https://login.example.com/oauth2/authorize")?;
	let redirect_uri = Url::parse("demo-app://auth")?;
	let attempt = AuthorizationAttempt::start(&endpoint, "demo-client", redirect_uri, &request);

	println!("Send your user to {}.", attempt.authorize_url());

	// Simulate the provider redirecting back with a code and the echoed state.
	let mut redirect = attempt.redirect_uri().clone();

	redirect.query_pairs_mut().append_pair("code", "demo-code").append_pair("state", attempt.state());

	match attempt.finish(redirect.as_str())? {
		outcome if outcome.is_success() => {
			println!("Authorization code received; hand it to your token-exchange layer.");
			println!("Debug output stays redacted: {outcome:?}.");
		},
		outcome => println!("Flow ended without a code: {:?}.", outcome.error_code()),
	}

	Ok(())
}
