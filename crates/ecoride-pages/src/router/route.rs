//! Route descriptors.

use ecoride_auth::AccessRequirement;

/// Path of the fallback route. Never matched by navigation.
pub const NOT_FOUND_PATH: &str = "404";

/// One navigable page: where its markup lives, who may open it and which
/// controller script drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
	path: String,
	title: String,
	fragment: String,
	requirement: AccessRequirement,
	script: Option<String>,
}

impl Route {
	/// Creates a public route without a controller script
	pub fn new(
		path: impl Into<String>,
		title: impl Into<String>,
		fragment: impl Into<String>,
	) -> Self {
		Self {
			path: path.into(),
			title: title.into(),
			fragment: fragment.into(),
			requirement: AccessRequirement::Public,
			script: None,
		}
	}

	/// The fallback route served for unknown paths
	pub fn not_found() -> Self {
		Self::new(NOT_FOUND_PATH, "Page introuvable", "/pages/404.html")
	}

	/// Restricts the route to the given role strings
	///
	/// See [`AccessRequirement::from_roles`] for how the strings are read.
	pub fn requires<I, S>(mut self, roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.requirement = AccessRequirement::from_roles(roles);
		self
	}

	/// Sets an already built requirement.
	pub fn with_requirement(mut self, requirement: AccessRequirement) -> Self {
		self.requirement = requirement;
		self
	}

	/// Attaches the controller script loaded after the fragment
	pub fn with_script(mut self, script: impl Into<String>) -> Self {
		self.script = Some(script.into());
		self
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	/// URL of the HTML fragment
	pub fn fragment(&self) -> &str {
		&self.fragment
	}

	pub fn requirement(&self) -> &AccessRequirement {
		&self.requirement
	}

	/// URL of the controller script, if any
	pub fn script(&self) -> Option<&str> {
		self.script.as_deref()
	}

	/// Whether this is the fallback route
	pub fn is_not_found(&self) -> bool {
		self.path == NOT_FOUND_PATH
	}
}
