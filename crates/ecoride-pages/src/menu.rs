//! Active menu entry.

use crate::host::Host;
use ecoride_conf::ShellSettings;

/// Menu token for `path`: the path without its leading slash, or
/// `home_token` for `/`.
pub fn menu_token<'a>(path: &'a str, home_token: &'a str) -> &'a str {
	if path == "/" {
		home_token
	} else {
		path.strip_prefix('/').unwrap_or(path)
	}
}

/// Marks the entry whose menu attribute equals `token` and clears the others
pub fn mark_active<H: Host + ?Sized>(host: &H, token: &str, settings: &ShellSettings) {
	for (element, value) in host.elements_with_attribute(&settings.menu_attribute) {
		host.set_class(&element, &settings.active_class, value == token);
	}
}
