// std
use std::thread;
// self
use oauth2_interactive::{
	oauth::diagnostic,
	redirect::{AuthorizationCode, AuthorizationResult},
};

#[test]
fn classification_matrix_covers_every_terminal_shape() {
	let cases: [(&str, AuthorizationResult); 7] = [
		("scheme://host?code=ABC123", AuthorizationResult::Success {
			code: AuthorizationCode::new("ABC123"),
		}),
		("scheme://host?error=access_denied&error_subcode=user_denied", {
			AuthorizationResult::ProtocolError {
				error: "access_denied".into(),
				sub_error: Some("user_denied".into()),
			}
		}),
		("scheme://host?error=access%5Fdenied", AuthorizationResult::ProtocolError {
			error: "access_denied".into(),
			sub_error: None,
		}),
		("scheme://host?error=access_denied", AuthorizationResult::ProtocolError {
			error: "access_denied".into(),
			sub_error: None,
		}),
		("scheme://host", AuthorizationResult::InvalidResponse),
		("scheme://host?", AuthorizationResult::InvalidResponse),
		// Both keys present: the documented winner is the error, exactly once.
		("scheme://host?code=ABC&error=E", AuthorizationResult::ProtocolError {
			error: "E".into(),
			sub_error: None,
		}),
	];

	for (raw, expected) in cases {
		assert_eq!(AuthorizationResult::parse(raw), expected, "Unexpected outcome for `{raw}`.");
	}
}

#[test]
fn queries_of_bare_tokens_classify_as_invalid() {
	for token in ["a", "ABC123", "some-opaque-blob", "%20"] {
		let raw = format!("scheme://host?{token}");

		assert_eq!(AuthorizationResult::parse(&raw), AuthorizationResult::InvalidResponse);
	}
}

#[test]
fn user_cancelled_reports_the_fixed_code() {
	let cancelled = AuthorizationResult::user_cancelled();

	assert_eq!(cancelled, AuthorizationResult::UserCancel);
	assert_eq!(cancelled.error_code(), Some(diagnostic::USER_CANCELLED));
	assert!(
		cancelled.diagnostic_message().is_some(),
		"Cancellation should carry its fixed message."
	);
}

#[test]
fn classification_is_pure_across_threads() {
	// No shared cache or counter: independent attempts classify concurrently
	// with no coordination.
	let handles: Vec<_> = (0..8)
		.map(|i| {
			thread::spawn(move || {
				let raw = format!("scheme://host?code=CODE{i}");

				AuthorizationResult::parse(&raw)
			})
		})
		.collect();

	for (i, handle) in handles.into_iter().enumerate() {
		let result = handle.join().expect("Classification thread should not panic.");
		let expected = AuthorizationCode::new(format!("CODE{i}"));

		assert_eq!(result.code(), Some(&expected));
	}
}

#[test]
fn non_success_results_never_surface_a_code() {
	for raw in ["scheme://host?error=E", "scheme://host", "garbage"] {
		let result = AuthorizationResult::parse(raw);

		assert!(!result.is_success());
		assert_eq!(result.code(), None);
	}

	assert_eq!(AuthorizationResult::user_cancelled().code(), None);
}
