//! # EcoRide pages
//!
//! Client-side routing for the EcoRide single-page application.
//!
//! The crate resolves the current location against a [`RouteTable`], enforces
//! each route's [`AccessRequirement`](ecoride_auth::AccessRequirement), fetches
//! the page fragment and swaps it into the persistent shell. Everything that
//! touches the browser goes through the [`Host`] trait, so the same router runs
//! in WASM ([`WebHost`](host::WebHost)) and natively against [`MemoryHost`].
//!
//! ## Modules
//!
//! - [`router`]: routes, route table, access guard
//! - [`loader`]: the page loader and its generation counter
//! - [`navigation`]: link and history interception
//! - [`shell`], [`visibility`], [`menu`]: what the loader updates after a render
//! - [`api`]: REST API client
//! - [`logging`]: console logging macros
//!
//! ## Example
//!
//! ```ignore
//! use ecoride_pages::{MemoryHost, Navigator, PageLoader, Route, RouteTable};
//! use ecoride_conf::SiteSettings;
//!
//! let table = RouteTable::builder("EcoRide")
//!     .route(Route::new("/", "Accueil", "/pages/home.html"))
//!     .build()?;
//! let host = MemoryHost::new("/")
//!     .with_element("main-page")
//!     .with_element("page-title");
//! let navigator = Navigator::new(PageLoader::new(host, table, SiteSettings::default())?);
//! navigator.start().await?;
//! ```

pub mod api;
pub mod error;
pub mod host;
pub mod loader;
pub mod logging;
pub mod menu;
pub mod navigation;
pub mod router;
pub mod shell;
pub mod visibility;

pub use api::{Account, ApiClient, ApiError, Credentials, SignInResponse};
pub use error::PagesError;
pub use host::{FetchGate, Host, MemoryElement, MemoryHost};
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
pub use loader::{LoadOutcome, PageLoader};
pub use navigation::{Navigator, is_internal_href};
pub use router::{AccessGuard, NOT_FOUND_PATH, Route, RouteTable, RouteTableBuilder, RouterError};
pub use shell::Shell;
pub use visibility::{Audience, UnknownAudience, apply_visibility};
