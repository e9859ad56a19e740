//! Browser tests for `WebHost`
//!
//! Run with `wasm-pack test --headless --chrome crates/ecoride-pages`.

#![cfg(target_arch = "wasm32")]

use ecoride_auth::{CookieJar, Session};
use ecoride_conf::ShellSettings;
use ecoride_pages::{Host, PagesError, Shell, WebHost, apply_visibility};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> WebHost {
	let host = WebHost::new().unwrap();
	host.document().body().unwrap().set_inner_html(html);
	host
}

#[wasm_bindgen_test]
fn test_shell_binds_to_document() {
	let host = mount(r#"<h1 id="page-title"></h1><main id="main-page"></main>"#);
	let shell = Shell::bind(&host, &ShellSettings::default()).unwrap();

	shell.replace_content(&host, "<p id=\"inner\">fragment</p>").unwrap();
	shell.set_heading(&host, "Contact").unwrap();
	host.set_title("Contact - EcoRide");

	let document = host.document();
	assert!(document.get_element_by_id("inner").is_some());
	assert_eq!(
		document.get_element_by_id("page-title").unwrap().text_content(),
		Some("Contact".to_string())
	);
	assert_eq!(document.title(), "Contact - EcoRide");
}

#[wasm_bindgen_test]
fn test_module_script_reinjection() {
	let host = mount("");
	host.append_module_script("/js/test-controller.js").unwrap();
	host.append_module_script("/js/test-controller.js").unwrap();

	assert_eq!(host.remove_scripts("/js/test-controller.js").unwrap(), 2);
	host.append_module_script("/js/test-controller.js").unwrap();

	let scripts = host
		.document()
		.query_selector_all("script[src=\"/js/test-controller.js\"]")
		.unwrap();
	assert_eq!(scripts.length(), 1);
}

#[wasm_bindgen_test]
fn test_visibility_uses_class_list() {
	let host = mount(
		r#"<a id="signin" data-show="disconnected"></a><a id="signout" data-show="connected" class="d-none"></a>"#,
	);

	apply_visibility(&host, &Session::anonymous(), &ShellSettings::default());

	let document = host.document();
	let signin = document.get_element_by_id("signin").unwrap();
	let signout = document.get_element_by_id("signout").unwrap();
	assert!(!signin.class_list().contains("d-none"));
	assert!(signout.class_list().contains("d-none"));
}

#[wasm_bindgen_test]
fn test_cookie_round_trip() {
	let host = mount("");
	host.set_cookie("ecoride-test=1; Path=/; SameSite=Lax");
	assert_eq!(host.cookie("ecoride-test"), Some("1".to_string()));

	host.set_cookie(&ecoride_auth::erase_cookie("ecoride-test"));
	assert_eq!(host.cookie("ecoride-test"), None);
}

#[wasm_bindgen_test]
fn test_push_history_updates_pathname() {
	let host = mount("");
	let original = host.pathname();

	host.push_history("/ecoride-history-check").unwrap();
	assert_eq!(host.pathname(), "/ecoride-history-check");

	host.window()
		.history()
		.unwrap()
		.replace_state_with_url(&JsValue::NULL, "", Some(&original))
		.unwrap();
}

#[wasm_bindgen_test]
async fn test_fetch_maps_missing_fragment_to_status() {
	let host = mount("");

	let result = host.fetch_text("/pages/ecoride-missing-fragment.html").await;

	assert!(matches!(result, Err(PagesError::Status { status: 404, .. })));
}
