//! Route table and resolution.

use super::route::{NOT_FOUND_PATH, Route};
use std::collections::HashSet;

/// Error type for router construction.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// Two routes share a path.
	#[error("Duplicate route path: {0}")]
	DuplicateRoute(String),
	/// A navigable route uses the fallback path.
	#[error("Reserved route path: {0}")]
	ReservedPath(String),
}

/// Ordered, immutable list of routes plus the site name used in titles.
#[derive(Debug, Clone)]
pub struct RouteTable {
	site_name: String,
	routes: Vec<Route>,
	not_found: Route,
}

impl RouteTable {
	/// Starts a table for `site_name`
	pub fn builder(site_name: impl Into<String>) -> RouteTableBuilder {
		RouteTableBuilder {
			site_name: site_name.into(),
			routes: Vec::new(),
			not_found: None,
		}
	}

	pub fn site_name(&self) -> &str {
		&self.site_name
	}

	/// Route for `path`, or the fallback route.
	///
	/// Matching is exact string equality on the raw pathname. Trailing slashes,
	/// query strings and fragments are not normalized.
	pub fn resolve(&self, path: &str) -> &Route {
		self.routes
			.iter()
			.find(|route| route.path() == path)
			.unwrap_or(&self.not_found)
	}

	/// Formats the document title for `route`
	pub fn document_title(&self, route: &Route) -> String {
		format!("{} - {}", route.title(), self.site_name)
	}

	/// Navigable routes in declaration order
	pub fn iter(&self) -> impl Iterator<Item = &Route> {
		self.routes.iter()
	}

	pub fn not_found_route(&self) -> &Route {
		&self.not_found
	}

	/// Number of navigable routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

/// Builder for [`RouteTable`]
#[derive(Debug)]
pub struct RouteTableBuilder {
	site_name: String,
	routes: Vec<Route>,
	not_found: Option<Route>,
}

impl RouteTableBuilder {
	/// Appends a route
	pub fn route(mut self, route: Route) -> Self {
		self.routes.push(route);
		self
	}

	/// Replaces the default fallback route
	pub fn not_found(mut self, route: Route) -> Self {
		self.not_found = Some(route);
		self
	}

	/// Checks path uniqueness and freezes the table
	pub fn build(self) -> Result<RouteTable, RouterError> {
		let mut seen = HashSet::new();
		for route in &self.routes {
			if route.path() == NOT_FOUND_PATH {
				return Err(RouterError::ReservedPath(route.path().to_string()));
			}
			if !seen.insert(route.path()) {
				return Err(RouterError::DuplicateRoute(route.path().to_string()));
			}
		}

		Ok(RouteTable {
			site_name: self.site_name,
			routes: self.routes,
			not_found: self.not_found.unwrap_or_else(Route::not_found),
		})
	}
}
