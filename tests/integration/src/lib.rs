//! Integration test utilities for EcoRide
//!
//! Shared fixtures for cross-crate scenarios: an in-memory browser serving a
//! fragment for every EcoRide route, and settings pointing the API client at a
//! mock server.

use ecoride::{EcoRide, route_table};
use ecoride_auth::CookieJar;
use ecoride_conf::SiteSettings;
use ecoride_pages::MemoryHost;

/// Markup served for the fragment of the route at `path`
pub fn fragment_body(path: &str) -> String {
	format!("<section data-page=\"{}\"></section>", path)
}

/// In-memory browser at `url` with the page shell and every fragment served
pub fn shell_host(url: &str) -> MemoryHost {
	let host = MemoryHost::new(url)
		.with_element("main-page")
		.with_element("page-title");

	let table = route_table(&SiteSettings::default()).expect("EcoRide route table must build");
	for route in table.iter().chain(std::iter::once(table.not_found_route())) {
		host.serve(route.fragment(), fragment_body(route.path()));
	}
	host
}

/// Writes session cookies the way a previous sign-in would have
pub fn with_session(host: &MemoryHost, token: &str, role: &str) {
	host.set_cookie(&format!("accesstoken={}; Path=/", token));
	host.set_cookie(&format!("role={}; Path=/", role));
}

/// Settings whose API base is `{server_uri}/api/`
pub fn api_settings(server_uri: &str) -> SiteSettings {
	let mut settings = SiteSettings::default();
	settings.api_base_url = format!("{}/api/", server_uri);
	settings
}

/// Application over [`shell_host`] with default settings
pub fn app_at(url: &str) -> EcoRide<MemoryHost> {
	EcoRide::new(shell_host(url), SiteSettings::default()).expect("EcoRide app must build")
}
