//! Page shell view-model.
//!
//! The persistent page around the fragments has two elements the loader writes
//! to: the content container and the main heading. [`Shell`] checks both once
//! at startup so a broken layout is reported immediately instead of on the
//! first navigation.

use crate::error::PagesError;
use crate::host::Host;
use ecoride_conf::ShellSettings;

/// Bound shell elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
	content_id: String,
	heading_id: String,
}

impl Shell {
	/// Binds the shell, failing on the first missing element
	pub fn bind<H: Host + ?Sized>(host: &H, settings: &ShellSettings) -> Result<Self, PagesError> {
		for id in [&settings.content_id, &settings.heading_id] {
			if !host.has_element(id) {
				return Err(PagesError::MissingElement(id.clone()));
			}
		}
		Ok(Self {
			content_id: settings.content_id.clone(),
			heading_id: settings.heading_id.clone(),
		})
	}

	pub fn content_id(&self) -> &str {
		&self.content_id
	}

	pub fn heading_id(&self) -> &str {
		&self.heading_id
	}

	/// Swaps the fragment shown in the content container
	pub fn replace_content<H: Host + ?Sized>(&self, host: &H, html: &str) -> Result<(), PagesError> {
		host.set_inner_html(&self.content_id, html)
	}

	/// Sets the main heading text
	pub fn set_heading<H: Host + ?Sized>(&self, host: &H, text: &str) -> Result<(), PagesError> {
		host.set_text(&self.heading_id, text)
	}
}
