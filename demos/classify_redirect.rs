//! Classifies a handful of raw redirect strings, including hostile ones, to show
//! that every input maps to a closed outcome.

// crates.io
use color_eyre::Result;
// self
use oauth2_interactive::redirect::AuthorizationResult;

fn main() -> Result<()> {
	color_eyre::install()?;

	let redirects = [
		"demo-app://auth?code=0.AbCdEf",
		"demo-app://auth?error=access_denied&error_subcode=user_denied",
		"demo-app://auth?code=ABC&error=E",
		"demo-app://auth?",
		"demo-app://auth?sessiondata",
		"complete garbage",
	];

	for raw in redirects {
		let outcome = AuthorizationResult::parse(raw);

		// The Debug form redacts any code, so printing outcomes is safe.
		println!("{raw} -> {outcome:?}");
	}

	println!("Host-side cancellation: {:?}.", AuthorizationResult::user_cancelled());

	Ok(())
}
