//! Cookie-backed sessions
//!
//! A session is nothing more than two cookies: an opaque API token and a role
//! string. [`SessionStore`] reads a fresh [`Session`] snapshot on every
//! navigation and is the only place that writes those cookies.

use crate::cookie::{CookieJar, erase_cookie, format_cookie, parse_cookie_value};
use crate::role::Role;
use chrono::{DateTime, Duration, Utc};
use ecoride_conf::SessionSettings;

/// Snapshot of the session cookies
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
	token: Option<String>,
	role: Option<String>,
}

impl Session {
	/// Creates a session snapshot from raw cookie values
	pub fn new(token: Option<String>, role: Option<String>) -> Self {
		Self { token, role }
	}

	/// A visitor without any session cookie
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Whether a non-empty token is present
	pub fn is_connected(&self) -> bool {
		self.token.as_deref().is_some_and(|t| !t.is_empty())
	}

	/// The API token
	pub fn token(&self) -> Option<&str> {
		self.token.as_deref().filter(|t| !t.is_empty())
	}

	/// The raw role string as stored in the cookie
	pub fn raw_role(&self) -> Option<&str> {
		self.role.as_deref()
	}

	/// The parsed role, `None` when absent or unknown
	pub fn role(&self) -> Option<Role> {
		self.role.as_deref().and_then(|r| r.parse().ok())
	}
}

/// Reads and writes the session cookies
#[derive(Debug, Clone)]
pub struct SessionStore {
	token_cookie: String,
	role_cookie: String,
	ttl: Duration,
}

impl SessionStore {
	/// Creates a store using the configured cookie names and lifetime
	pub fn new(settings: &SessionSettings) -> Self {
		Self {
			token_cookie: settings.token_cookie.clone(),
			role_cookie: settings.role_cookie.clone(),
			ttl: Duration::days(i64::from(settings.ttl_days)),
		}
	}

	/// Current session as seen through `jar`
	pub fn load<J: CookieJar + ?Sized>(&self, jar: &J) -> Session {
		let cookies = jar.cookie_string();
		Session::new(
			parse_cookie_value(&cookies, &self.token_cookie),
			parse_cookie_value(&cookies, &self.role_cookie),
		)
	}

	/// Stores a freshly issued token and role, expiring `ttl` after `now`
	pub fn sign_in<J: CookieJar + ?Sized>(
		&self,
		jar: &J,
		token: &str,
		role: Role,
		now: DateTime<Utc>,
	) {
		let expires = now + self.ttl;
		jar.set_cookie(&format_cookie(&self.token_cookie, token, expires));
		jar.set_cookie(&format_cookie(&self.role_cookie, role.as_str(), expires));
	}

	/// Drops both session cookies
	pub fn sign_out<J: CookieJar + ?Sized>(&self, jar: &J) {
		jar.set_cookie(&erase_cookie(&self.token_cookie));
		jar.set_cookie(&erase_cookie(&self.role_cookie));
	}
}
