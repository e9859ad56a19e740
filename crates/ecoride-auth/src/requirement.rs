//! Route access requirements
//!
//! A route lists the role strings allowed to open it. Three shapes come out of
//! that list:
//!
//! | Role set | Requirement | Who may enter |
//! |----------|-------------|---------------|
//! | empty | [`Public`](AccessRequirement::Public) | everyone |
//! | contains `"disconnected"` | [`Disconnected`](AccessRequirement::Disconnected) | sessions without a token |
//! | anything else | [`Roles`](AccessRequirement::Roles) | sessions whose role is listed |

use crate::role::Role;
use crate::session::Session;
use std::collections::BTreeSet;

/// Sentinel role string reserved for pages only anonymous visitors may open
pub const DISCONNECTED: &str = "disconnected";

/// Who may open a route
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccessRequirement {
	/// Anyone
	#[default]
	Public,
	/// Only sessions without a token
	Disconnected,
	/// Only sessions holding one of these roles
	Roles(BTreeSet<Role>),
}

/// Outcome of evaluating a requirement against a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
	Allow,
	Deny,
}

impl AccessRequirement {
	/// Builds a requirement from a route's role strings
	///
	/// Role strings that do not parse are dropped. A non-empty list where
	/// nothing parses yields an empty [`Roles`](Self::Roles) set, which no
	/// session satisfies.
	pub fn from_roles<I, S>(roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let raw: Vec<S> = roles.into_iter().collect();
		if raw.is_empty() {
			return Self::Public;
		}
		if raw.iter().any(|r| r.as_ref() == DISCONNECTED) {
			return Self::Disconnected;
		}
		Self::Roles(
			raw.iter()
				.filter_map(|r| r.as_ref().parse::<Role>().ok())
				.collect(),
		)
	}

	/// Requirement admitting exactly the given roles
	pub fn roles<I: IntoIterator<Item = Role>>(roles: I) -> Self {
		Self::Roles(roles.into_iter().collect())
	}

	/// Whether anyone may open the route
	pub fn is_public(&self) -> bool {
		matches!(self, Self::Public)
	}

	/// Decides whether `session` may open the route
	pub fn evaluate(&self, session: &Session) -> AccessDecision {
		let allowed = match self {
			Self::Public => true,
			Self::Disconnected => !session.is_connected(),
			Self::Roles(roles) => session.role().is_some_and(|role| roles.contains(&role)),
		};
		if allowed {
			AccessDecision::Allow
		} else {
			AccessDecision::Deny
		}
	}
}
