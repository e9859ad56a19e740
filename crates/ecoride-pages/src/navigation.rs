//! Navigation interceptor.
//!
//! [`Navigator`] is the platform-neutral half: following a link pushes a
//! history entry and loads the page, a popstate only loads. On wasm32,
//! [`install`] wires it to the browser with one delegated `click` listener on
//! `document` and one `popstate` listener on `window`.

use crate::error::PagesError;
use crate::host::Host;
use crate::loader::{LoadOutcome, PageLoader};

/// Drives the page loader from navigation events
#[derive(Debug)]
pub struct Navigator<H: Host> {
	loader: PageLoader<H>,
}

impl<H: Host> Navigator<H> {
	pub fn new(loader: PageLoader<H>) -> Self {
		Self { loader }
	}

	pub fn loader(&self) -> &PageLoader<H> {
		&self.loader
	}

	pub fn host(&self) -> &H {
		self.loader.host()
	}

	/// Renders the page for the initial location
	pub async fn start(&self) -> Result<LoadOutcome, PagesError> {
		self.loader.load_content_page().await
	}

	/// Handles an intercepted link to `href`
	pub async fn follow_link(&self, href: &str) -> Result<LoadOutcome, PagesError> {
		self.host().push_history(href)?;
		self.loader.load_content_page().await
	}

	/// Handles a history traversal. History was already moved by the browser.
	pub async fn on_pop_state(&self) -> Result<LoadOutcome, PagesError> {
		self.loader.load_content_page().await
	}

	/// Replace-style redirect to the home path
	pub fn redirect_home(&self) -> Result<(), PagesError> {
		self.host().redirect(&self.loader.settings().home_path)
	}
}

/// Whether a link `href` stays inside the application.
/// Browsers read `/\host` like `//host`, so both are treated as external.
/// Browsers read `/\\host` like `//host`, so both are treated as external.
pub fn is_internal_href(href: &str) -> bool {
	href.starts_with('/') && !href.starts_with("//") && !href.starts_with("/\\")
}

#[cfg(target_arch = "wasm32")]
pub use web::install;

#[cfg(target_arch = "wasm32")]
mod web {
	use super::{Navigator, is_internal_href};
	use crate::host::WebHost;
	use crate::{debug_log, error_log};
	use std::rc::Rc;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use wasm_bindgen_futures::spawn_local;
	use web_sys::{Element, Event, HtmlAnchorElement, MouseEvent};

	/// Anchor the click landed on, if the router should handle it
	fn intercepted_href(event: &MouseEvent) -> Option<String> {
		if event.button() != 0
			|| event.ctrl_key()
			|| event.meta_key()
			|| event.shift_key()
			|| event.alt_key()
		{
			return None;
		}

		let mut current = event.target()?.dyn_into::<Element>().ok();
		while let Some(element) = current {
			if let Some(anchor) = element.dyn_ref::<HtmlAnchorElement>() {
				if !anchor.target().is_empty()
					|| anchor.has_attribute("download")
					|| anchor.has_attribute("data-external")
				{
					return None;
				}
				return anchor
					.get_attribute("href")
					.filter(|href| is_internal_href(href));
			}
			current = element.parent_element();
		}
		None
	}

	/// Registers the delegated click and popstate listeners.
	///
	/// Call once. The listeners live for the lifetime of the page.
	pub fn install(navigator: Rc<Navigator<WebHost>>) -> Result<(), JsValue> {
		let window = navigator.host().window().clone();
		let document = navigator.host().document().clone();

		// 1. Link click delegation
		let nav = Rc::clone(&navigator);
		let link_handler = Closure::wrap(Box::new(move |event: Event| {
			let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
				return;
			};
			let Some(href) = intercepted_href(mouse) else {
				return;
			};
			event.prevent_default();
			debug_log!("Intercepted link to {}", href);

			let nav = Rc::clone(&nav);
			spawn_local(async move {
				if let Err(err) = nav.follow_link(&href).await {
					error_log!("Navigation to {} failed: {}", href, err);
				}
			});
		}) as Box<dyn FnMut(_)>);

		document.add_event_listener_with_callback("click", link_handler.as_ref().unchecked_ref())?;
		link_handler.forget();

		// 2. Browser back/forward
		let nav = Rc::clone(&navigator);
		let popstate_handler = Closure::wrap(Box::new(move |_event: Event| {
			let nav = Rc::clone(&nav);
			spawn_local(async move {
				if let Err(err) = nav.on_pop_state().await {
					error_log!("History navigation failed: {}", err);
				}
			});
		}) as Box<dyn FnMut(_)>);

		window
			.add_event_listener_with_callback("popstate", popstate_handler.as_ref().unchecked_ref())?;
		popstate_handler.forget();

		Ok(())
	}

}
