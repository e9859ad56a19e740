//! # EcoRide Configuration
//!
//! Site settings for the EcoRide browser client.
//!
//! Settings are plain serde structs read from TOML. Every field has a default,
//! so a settings file only needs to name what it changes. A copy of the
//! defaults ships inside the crate and is available through
//! [`SiteSettings::embedded`].
//!
//! ## Example
//!
//! ```rust
//! use ecoride_conf::SiteSettings;
//!
//! let settings = SiteSettings::from_toml_str(r#"site_name = "EcoRide Staging""#).unwrap();
//! assert_eq!(settings.site_name, "EcoRide Staging");
//! assert_eq!(settings.session.ttl_days, 7);
//! ```

pub mod settings;

pub use settings::{SessionSettings, SettingsError, ShellSettings, SiteSettings};
