//! Client-side routing.
//!
//! - [`route`]: the [`Route`] descriptor
//! - [`table`]: the ordered [`RouteTable`] and its resolver
//! - [`guard`]: the [`AccessGuard`] enforcing route requirements

pub mod guard;
pub mod route;
pub mod table;

pub use guard::AccessGuard;
pub use route::{NOT_FOUND_PATH, Route};
pub use table::{RouteTable, RouteTableBuilder, RouterError};
