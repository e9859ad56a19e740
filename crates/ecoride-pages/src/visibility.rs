//! Role-based visibility.
//!
//! Markup marks elements with an audience attribute (`data-show` by default).
//! After every render the loader walks those elements and toggles the hidden
//! class according to the session. Elements stay in the document.

use crate::host::Host;
use crate::warn_log;
use ecoride_auth::{Role, Session};
use ecoride_conf::ShellSettings;
use std::fmt;
use std::str::FromStr;

/// Who an element is shown to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
	Disconnected,
	Connected,
	Admin,
	Employee,
	Client,
}

impl Audience {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Disconnected => "disconnected",
			Self::Connected => "connected",
			Self::Admin => "admin",
			Self::Employee => "employee",
			Self::Client => "client",
		}
	}

	/// Role an audience is tied to, if any
	pub fn role(&self) -> Option<Role> {
		match self {
			Self::Admin => Some(Role::Admin),
			Self::Employee => Some(Role::Employee),
			Self::Client => Some(Role::Client),
			Self::Disconnected | Self::Connected => None,
		}
	}

	/// Whether `session` belongs to this audience
	pub fn includes(&self, session: &Session) -> bool {
		match self {
			Self::Disconnected => !session.is_connected(),
			Self::Connected => session.is_connected(),
			role_bound => session.is_connected() && session.role() == role_bound.role(),
		}
	}
}

impl fmt::Display for Audience {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error for audience names outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown audience: {0}")]
pub struct UnknownAudience(pub String);

impl FromStr for Audience {
	type Err = UnknownAudience;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"disconnected" => Ok(Self::Disconnected),
			"connected" => Ok(Self::Connected),
			"admin" => Ok(Self::Admin),
			"employee" => Ok(Self::Employee),
			"client" => Ok(Self::Client),
			other => Err(UnknownAudience(other.to_string())),
		}
	}
}

/// Toggles the hidden class on every tagged element. Returns how many are hidden.
///
/// Elements with an unknown audience are left untouched.
pub fn apply_visibility<H: Host + ?Sized>(host: &H, session: &Session, settings: &ShellSettings) -> usize {
	let mut hidden = 0;
	for (element, value) in host.elements_with_attribute(&settings.visibility_attribute) {
		match value.parse::<Audience>() {
			Ok(audience) => {
				let hide = !audience.includes(session);
				host.set_class(&element, &settings.hidden_class, hide);
				if hide {
					hidden += 1;
				}
			}
			Err(err) => warn_log!("{}", err),
		}
	}
	hidden
}
