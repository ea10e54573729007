// self
use crate::_prelude::*;

/// Error returned when parsing an unrecognized prompt policy string.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown prompt policy: {value}.")]
pub struct UnknownPromptError {
	/// The unrecognized input string.
	pub value: String,
}

/// Prompt policy controlling the single `prompt` parameter on the outbound
/// authorization request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
	#[default]
	/// Provider default behavior; the request carries no `prompt` parameter.
	Default,
	/// Forces the user to re-enter credentials.
	Login,
	/// Forces the account picker even when a single account is signed in.
	SelectAccount,
	/// Forces the consent screen.
	Consent,
	/// Forbids interaction; the provider fails the request when user input
	/// would be required.
	None,
}
impl Prompt {
	/// Returns the wire value, or `None` when the provider default applies and
	/// the parameter is omitted entirely.
	pub const fn wire_value(self) -> Option<&'static str> {
		match self {
			Prompt::Default => None,
			Prompt::Login => Some("login"),
			Prompt::SelectAccount => Some("select_account"),
			Prompt::Consent => Some("consent"),
			Prompt::None => Some("none"),
		}
	}
}
impl Display for Prompt {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.wire_value().unwrap_or("default"))
	}
}
impl FromStr for Prompt {
	type Err = UnknownPromptError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"default" => Ok(Prompt::Default),
			"login" => Ok(Prompt::Login),
			"select_account" => Ok(Prompt::SelectAccount),
			"consent" => Ok(Prompt::Consent),
			"none" => Ok(Prompt::None),
			_ => Err(UnknownPromptError { value: s.to_owned() }),
		}
	}
}
