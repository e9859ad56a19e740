//! User roles
//!
//! Roles travel as Symfony-style strings (`ROLE_USER`, `ROLE_EMPLOYEE`,
//! `ROLE_ADMIN`) in API responses, in the role cookie and in route
//! definitions. Parsing is strict: only the canonical strings are accepted, so
//! every comparison in the client goes through the same spelling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission class of an authenticated user
///
/// Variants are ordered by privilege, so `max()` over a user's roles yields the
/// one that governs navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
	/// Passenger or driver account
	Client,
	/// Staff moderating reviews and rides
	Employee,
	/// Platform administrator
	Admin,
}

impl Role {
	/// Every role, lowest privilege first
	pub const ALL: [Role; 3] = [Role::Client, Role::Employee, Role::Admin];

	/// Canonical string used by the API and stored in the role cookie
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Client => "ROLE_USER",
			Self::Employee => "ROLE_EMPLOYEE",
			Self::Admin => "ROLE_ADMIN",
		}
	}

	/// Most privileged known role in a list of role strings
	///
	/// Unknown strings are skipped. Returns `None` when nothing parses.
	pub fn highest<I, S>(roles: I) -> Option<Role>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		roles
			.into_iter()
			.filter_map(|r| r.as_ref().parse::<Role>().ok())
			.max()
	}
}

impl fmt::Display for Role {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Role {
	type Err = AuthError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Role::ALL
			.into_iter()
			.find(|role| role.as_str() == s)
			.ok_or_else(|| AuthError::UnknownRole(s.to_string()))
	}
}

impl TryFrom<String> for Role {
	type Error = AuthError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Role> for String {
	fn from(role: Role) -> Self {
		role.as_str().to_string()
	}
}

/// Auth error
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
	#[error("Unknown role: {0}")]
	UnknownRole(String),
}
