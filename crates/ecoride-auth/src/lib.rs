//! # EcoRide Auth
//!
//! Client-side view of authentication for the EcoRide web client.
//!
//! The REST backend owns accounts and issues tokens. This crate only deals with
//! what the browser keeps: a token cookie, a role cookie, and the rules deciding
//! which pages a session may open.
//!
//! ## Modules
//!
//! - [`role`]: the [`Role`] enum and its canonical `ROLE_*` strings
//! - [`requirement`]: [`AccessRequirement`] derived from a route's role set
//! - [`cookie`]: cookie string parsing and `Set-Cookie` formatting
//! - [`session`]: [`Session`] snapshots and the cookie-backed [`SessionStore`]
//!
//! ## Example
//!
//! ```rust
//! use ecoride_auth::{AccessDecision, AccessRequirement, Session};
//!
//! let requirement = AccessRequirement::from_roles(["ROLE_ADMIN"]);
//! let admin = Session::new(Some("token".to_string()), Some("ROLE_ADMIN".to_string()));
//!
//! assert_eq!(requirement.evaluate(&admin), AccessDecision::Allow);
//! assert_eq!(requirement.evaluate(&Session::anonymous()), AccessDecision::Deny);
//! ```

pub mod cookie;
pub mod requirement;
pub mod role;
pub mod session;

pub use cookie::{CookieJar, erase_cookie, format_cookie, parse_cookie_value};
pub use requirement::{AccessDecision, AccessRequirement, DISCONNECTED};
pub use role::{AuthError, Role};
pub use session::{Session, SessionStore};
