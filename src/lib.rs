//! Client-side authorization-code core for native public clients: immutable request
//! parameters and strict, total classification of the redirect channel.
//!
//! The crate covers the protocol-correct heart of an interactive sign-in flow and
//! nothing around it. Hosts build an [`request::AuthorizationRequest`], start an
//! [`attempt::AuthorizationAttempt`] to obtain the authorize URL, hand that URL to
//! whatever browser surface they own, and feed the raw redirect string back into
//! [`redirect::AuthorizationResult::parse`] (or [`attempt::AuthorizationAttempt::finish`]
//! for state-checked completion). Token exchange, caching, transport, and UI stay with
//! the host.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod attempt;
pub mod error;
pub mod oauth;
pub mod obs;
pub mod redirect;
pub mod request;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use {color_eyre as _, serde_json as _};
