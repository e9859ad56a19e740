//! Site settings
//!
//! [`SiteSettings`] groups everything the client needs to know about its
//! surroundings: the shell markup it renders into, the cookies holding the
//! session, and where the REST API lives.

use serde::{Deserialize, Serialize};
use url::Url;

/// TOML shipped with the crate.
const EMBEDDED_SETTINGS: &str = include_str!("../config/ecoride.toml");

/// Top-level client settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Site name appended to document titles
	pub site_name: String,

	/// Base URL of the REST API. Must end with `/` so endpoints join below it.
	pub api_base_url: String,

	/// Path of the home route
	pub home_path: String,

	/// Where the access guard sends denied sessions
	pub redirect_path: String,

	/// Page shell markup
	pub shell: ShellSettings,

	/// Session cookies and API token header
	pub session: SessionSettings,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			site_name: "EcoRide".to_string(),
			api_base_url: "http://127.0.0.1:8000/api/".to_string(),
			home_path: "/".to_string(),
			redirect_path: "/".to_string(),
			shell: ShellSettings::default(),
			session: SessionSettings::default(),
		}
	}
}

/// Ids, attributes and classes of the persistent page shell
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
	/// Id of the container that receives page fragments
	pub content_id: String,

	/// Id of the main heading
	pub heading_id: String,

	/// Class added to elements hidden for the current audience
	pub hidden_class: String,

	/// Class marking the active menu entry
	pub active_class: String,

	/// Attribute naming an element's audience
	pub visibility_attribute: String,

	/// Attribute naming the menu token of a navigation entry
	pub menu_attribute: String,

	/// Menu token used for the home path
	pub home_menu_token: String,
}

impl Default for ShellSettings {
	fn default() -> Self {
		Self {
			content_id: "main-page".to_string(),
			heading_id: "page-title".to_string(),
			hidden_class: "d-none".to_string(),
			active_class: "active".to_string(),
			visibility_attribute: "data-show".to_string(),
			menu_attribute: "data-menu".to_string(),
			home_menu_token: "home".to_string(),
		}
	}
}

/// Session cookie settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
	/// Cookie carrying the API token
	pub token_cookie: String,

	/// Cookie carrying the role string
	pub role_cookie: String,

	/// Lifetime of both cookies, in days
	pub ttl_days: u32,

	/// Request header carrying the API token
	pub api_token_header: String,
}

impl Default for SessionSettings {
	fn default() -> Self {
		Self {
			token_cookie: "accesstoken".to_string(),
			role_cookie: "role".to_string(),
			ttl_days: 7,
			api_token_header: "X-AUTH-TOKEN".to_string(),
		}
	}
}

impl SiteSettings {
	/// Create settings with defaults
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse and validate settings from a TOML document
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Settings compiled into the crate from `config/ecoride.toml`
	pub fn embedded() -> Result<Self, SettingsError> {
		Self::from_toml_str(EMBEDDED_SETTINGS)
	}

	/// Parsed API base URL
	pub fn api_base(&self) -> Result<Url, SettingsError> {
		Ok(Url::parse(&self.api_base_url)?)
	}

	/// Validate settings
	pub fn validate(&self) -> Result<(), SettingsError> {
		require_non_empty("site_name", &self.site_name)?;
		require_path("home_path", &self.home_path)?;
		require_path("redirect_path", &self.redirect_path)?;

		let base = self.api_base()?;
		if !base.path().ends_with('/') {
			return Err(SettingsError::Invalid {
				key: "api_base_url".to_string(),
				message: "must end with '/'".to_string(),
			});
		}

		let shell = &self.shell;
		for (key, value) in [
			("shell.content_id", &shell.content_id),
			("shell.heading_id", &shell.heading_id),
			("shell.hidden_class", &shell.hidden_class),
			("shell.active_class", &shell.active_class),
			("shell.visibility_attribute", &shell.visibility_attribute),
			("shell.menu_attribute", &shell.menu_attribute),
			("shell.home_menu_token", &shell.home_menu_token),
			("session.token_cookie", &self.session.token_cookie),
			("session.role_cookie", &self.session.role_cookie),
			("session.api_token_header", &self.session.api_token_header),
		] {
			require_non_empty(key, value)?;
		}

		if self.session.ttl_days == 0 {
			return Err(SettingsError::Invalid {
				key: "session.ttl_days".to_string(),
				message: "must be at least one day".to_string(),
			});
		}

		Ok(())
	}
}

fn require_non_empty(key: &str, value: &str) -> Result<(), SettingsError> {
	if value.trim().is_empty() {
		return Err(SettingsError::Invalid {
			key: key.to_string(),
			message: "must not be empty".to_string(),
		});
	}
	Ok(())
}

fn require_path(key: &str, value: &str) -> Result<(), SettingsError> {
	if !value.starts_with('/') {
		return Err(SettingsError::Invalid {
			key: key.to_string(),
			message: format!("'{}' must start with '/'", value),
		});
	}
	Ok(())
}

/// Settings error
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid URL: {0}")]
	Url(#[from] url::ParseError),

	#[error("Invalid value for '{key}': {message}")]
	Invalid { key: String, message: String },
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_embedded_matches_defaults() {
		let settings = SiteSettings::embedded().unwrap();
		assert_eq!(settings, SiteSettings::default());
	}

	#[rstest]
	fn test_partial_toml_keeps_defaults() {
		let settings = SiteSettings::from_toml_str(
			r#"
site_name = "EcoRide Preprod"

[session]
ttl_days = 1
"#,
		)
		.unwrap();

		assert_eq!(settings.site_name, "EcoRide Preprod");
		assert_eq!(settings.session.ttl_days, 1);
		assert_eq!(settings.session.token_cookie, "accesstoken");
		assert_eq!(settings.shell.content_id, "main-page");
	}

	#[rstest]
	#[case::empty_site_name(r#"site_name = """#, "site_name")]
	#[case::relative_home(r#"home_path = "home""#, "home_path")]
	#[case::zero_ttl("[session]\nttl_days = 0", "session.ttl_days")]
	#[case::blank_container("[shell]\ncontent_id = \"  \"", "shell.content_id")]
	#[case::base_without_slash(r#"api_base_url = "http://localhost/api""#, "api_base_url")]
	fn test_invalid_values_rejected(#[case] toml: &str, #[case] expected_key: &str) {
		let err = SiteSettings::from_toml_str(toml).unwrap_err();
		match err {
			SettingsError::Invalid { key, .. } => assert_eq!(key, expected_key),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[rstest]
	fn test_bad_url_rejected() {
		let err = SiteSettings::from_toml_str(r#"api_base_url = "not a url""#).unwrap_err();
		assert!(matches!(err, SettingsError::Url(_)));
	}

	#[rstest]
	fn test_malformed_toml_rejected() {
		let err = SiteSettings::from_toml_str("site_name = ").unwrap_err();
		assert!(matches!(err, SettingsError::Toml(_)));
	}
}
