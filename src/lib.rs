//! # EcoRide
//!
//! Browser client for the EcoRide carpooling platform.
//!
//! The site is one persistent page shell. Navigation swaps an HTML fragment
//! into it, reinjects the page's controller script and refreshes the title,
//! heading, active menu entry and role-based visibility. Routes may be limited
//! to visitors without a session or to specific roles; denied sessions are
//! redirected home.
//!
//! ## Crates
//!
//! - [`conf`]: site settings loaded from TOML
//! - [`auth`]: roles, access requirements and cookie-backed sessions
//! - [`pages`]: router, page loader, navigation and the REST client
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - forward panics to the browser console
//! - `debug-hooks` - enable `debug_log!` output in debug builds
//!
//! ## Example
//!
//! ```rust,ignore
//! use ecoride::{EcoRide, conf::SiteSettings, pages::MemoryHost};
//!
//! let host = MemoryHost::new("/")
//!     .with_element("main-page")
//!     .with_element("page-title");
//! let app = EcoRide::new(host, SiteSettings::embedded()?)?;
//! app.start().await?;
//! ```

pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod client;
pub mod routes;

pub use app::{AppError, EcoRide};
pub use routes::route_table;

/// Site settings
pub mod conf {
	pub use ecoride_conf::*;
}

/// Roles, access requirements and sessions
pub mod auth {
	pub use ecoride_auth::*;
}

/// Client-side router, page loader and REST client
pub mod pages {
	pub use ecoride_pages::*;
}
