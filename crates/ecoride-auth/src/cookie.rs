//! Cookie helpers
//!
//! The browser exposes cookies as one `"name1=value1; name2=value2"` string
//! and accepts writes one `Set-Cookie`-style string at a time. [`CookieJar`]
//! mirrors that interface so the session store works the same over
//! `document.cookie` and over an in-memory jar.

use chrono::{DateTime, Utc};

/// Format of the `Expires` attribute (`Date.prototype.toUTCString`)
const EXPIRES_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Read/write access to the document's cookies
pub trait CookieJar {
	/// All visible cookies, formatted as `"name1=value1; name2=value2"`
	fn cookie_string(&self) -> String;

	/// Writes one cookie string, e.g. `"role=ROLE_USER; Path=/"`
	fn set_cookie(&self, cookie: &str);

	/// Value of a single cookie
	fn cookie(&self, name: &str) -> Option<String> {
		parse_cookie_value(&self.cookie_string(), name)
	}
}

/// Parses a cookie value from a cookie string.
///
/// The cookie string format is: "name1=value1; name2=value2; ..."
pub fn parse_cookie_value(cookie_str: &str, name: &str) -> Option<String> {
	cookie_str.split(';').find_map(|part| {
		let (key, value) = part.trim().split_once('=')?;
		(key.trim() == name).then(|| value.trim().to_string())
	})
}

/// Cookie string storing `value` under `name` until `expires`
pub fn format_cookie(name: &str, value: &str, expires: DateTime<Utc>) -> String {
	format!(
		"{}={}; Expires={}; Path=/; SameSite=Lax",
		name,
		value,
		expires.format(EXPIRES_FORMAT)
	)
}

/// Cookie string that makes the browser drop `name`
pub fn erase_cookie(name: &str) -> String {
	format!(
		"{}=; Max-Age=0; Expires={}; Path=/; SameSite=Lax",
		name,
		DateTime::<Utc>::UNIX_EPOCH.format(EXPIRES_FORMAT)
	)
}
