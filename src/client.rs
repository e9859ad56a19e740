//! WASM entry point for the EcoRide client

use crate::app::EcoRide;
use ecoride_conf::SiteSettings;
use ecoride_pages::{Credentials, WebHost, error_log, navigation};
use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

// Global application instance
// Set by start() and read by the functions exported to page controllers
thread_local! {
	static APP: RefCell<Option<Rc<EcoRide<WebHost>>>> = const { RefCell::new(None) };
}

fn app() -> Result<Rc<EcoRide<WebHost>>, JsValue> {
	APP.with(|app| app.borrow().clone())
		.ok_or_else(|| JsValue::from_str("EcoRide client is not started"))
}

fn js_error(err: impl Display) -> JsValue {
	JsValue::from_str(&err.to_string())
}

/// WASM entry point
///
/// Binds the shell, installs the navigation listeners and renders the
/// initial page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	// Set up panic hook for better error messages in console
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let settings = SiteSettings::embedded().map_err(js_error)?;
	let host = WebHost::new().map_err(js_error)?;
	let app = Rc::new(EcoRide::new(host, settings).map_err(js_error)?);

	navigation::install(app.navigator_handle())?;
	APP.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&app)));

	spawn_local(async move {
		if let Err(err) = app.start().await {
			error_log!("Initial page load failed: {}", err);
		}
	});
	Ok(())
}

/// Signs in from the login form and returns the granted role
#[wasm_bindgen(js_name = signIn)]
pub async fn sign_in(username: String, password: String) -> Result<String, JsValue> {
	let app = app()?;
	let role = app
		.sign_in(&Credentials::new(username, password))
		.await
		.map_err(js_error)?;
	Ok(role.to_string())
}

/// Signs out and returns to the home page
#[wasm_bindgen(js_name = signOut)]
pub fn sign_out() -> Result<(), JsValue> {
	app()?.sign_out().map_err(js_error)
}

/// Whether a session token is present
#[wasm_bindgen(js_name = isConnected)]
pub fn is_connected() -> bool {
	app().map(|app| app.session().is_connected()).unwrap_or(false)
}

/// Role cookie as stored, if any
#[wasm_bindgen(js_name = getRole)]
pub fn get_role() -> Option<String> {
	app().ok()?.session().raw_role().map(str::to_string)
}

/// Session token, for controllers calling the API themselves
#[wasm_bindgen(js_name = getToken)]
pub fn get_token() -> Option<String> {
	app().ok()?.session().token().map(str::to_string)
}
