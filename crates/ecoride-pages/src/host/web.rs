//! Host backed by the real browser.

use super::Host;
use crate::error::PagesError;
use async_trait::async_trait;
use ecoride_auth::CookieJar;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlDocument, Window};

fn dom_error(context: &str, err: JsValue) -> PagesError {
	PagesError::Dom(format!("{}: {:?}", context, err))
}

/// Host driving `window` and `document`
#[derive(Debug, Clone)]
pub struct WebHost {
	window: Window,
	document: Document,
	http: reqwest::Client,
}

impl WebHost {
	/// Binds to the global `window`
	pub fn new() -> Result<Self, PagesError> {
		let window =
			web_sys::window().ok_or_else(|| PagesError::Dom("No window object".to_string()))?;
		let document = window
			.document()
			.ok_or_else(|| PagesError::Dom("No document object".to_string()))?;
		Ok(Self {
			window,
			document,
			http: reqwest::Client::new(),
		})
	}

	pub fn window(&self) -> &Window {
		&self.window
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Resolves a same-origin path against `location.origin`
	fn absolute_url(&self, url: &str) -> Result<Url, PagesError> {
		let origin = self
			.window
			.location()
			.origin()
			.map_err(|e| dom_error("location.origin", e))?;
		Url::parse(&origin)
			.and_then(|base| base.join(url))
			.map_err(|e| PagesError::Fetch {
				url: url.to_string(),
				message: e.to_string(),
			})
	}

	fn element(&self, id: &str) -> Result<Element, PagesError> {
		self.document
			.get_element_by_id(id)
			.ok_or_else(|| PagesError::MissingElement(id.to_string()))
	}
}

#[async_trait(?Send)]
impl Host for WebHost {
	type Element = Element;

	fn pathname(&self) -> String {
		self.window
			.location()
			.pathname()
			.unwrap_or_else(|_| "/".to_string())
	}

	fn push_history(&self, url: &str) -> Result<(), PagesError> {
		self.window
			.history()
			.and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(url)))
			.map_err(|e| dom_error("history.pushState", e))
	}

	fn redirect(&self, url: &str) -> Result<(), PagesError> {
		self.window
			.location()
			.replace(url)
			.map_err(|e| dom_error("location.replace", e))
	}

	async fn fetch_text(&self, url: &str) -> Result<String, PagesError> {
		let target = self.absolute_url(url)?;
		let fetch_error = |e: reqwest::Error| PagesError::Fetch {
			url: url.to_string(),
			message: e.to_string(),
		};

		let response = self.http.get(target).send().await.map_err(fetch_error)?;
		let status = response.status();
		if !status.is_success() {
			return Err(PagesError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}
		response.text().await.map_err(fetch_error)
	}

	fn has_element(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn set_inner_html(&self, id: &str, html: &str) -> Result<(), PagesError> {
		// SAFETY(XSS): fragments are same-origin files shipped with the site.
		self.element(id)?.set_inner_html(html);
		Ok(())
	}

	fn set_text(&self, id: &str, text: &str) -> Result<(), PagesError> {
		self.element(id)?.set_text_content(Some(text));
		Ok(())
	}

	fn set_title(&self, title: &str) {
		self.document.set_title(title);
	}

	fn remove_scripts(&self, src: &str) -> Result<usize, PagesError> {
		let selector = format!("script[src=\"{}\"]", src);
		let nodes = self
			.document
			.query_selector_all(&selector)
			.map_err(|e| dom_error("querySelectorAll", e))?;

		let mut removed = 0;
		for index in 0..nodes.length() {
			if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
				element.remove();
				removed += 1;
			}
		}
		Ok(removed)
	}

	fn append_module_script(&self, src: &str) -> Result<(), PagesError> {
		let script = self
			.document
			.create_element("script")
			.map_err(|e| dom_error("createElement", e))?;
		script
			.set_attribute("type", "module")
			.and_then(|_| script.set_attribute("src", src))
			.map_err(|e| dom_error("setAttribute", e))?;

		let body = self
			.document
			.body()
			.ok_or_else(|| PagesError::MissingElement("body".to_string()))?;
		body.append_child(&script)
			.map_err(|e| dom_error("appendChild", e))?;
		Ok(())
	}

	fn elements_with_attribute(&self, attribute: &str) -> Vec<(Element, String)> {
		let Ok(nodes) = self.document.query_selector_all(&format!("[{}]", attribute)) else {
			return Vec::new();
		};

		(0..nodes.length())
			.filter_map(|index| nodes.item(index))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.filter_map(|element| {
				let value = element.get_attribute(attribute)?;
				Some((element, value))
			})
			.collect()
	}

	fn set_class(&self, element: &Element, class: &str, present: bool) {
		let _ = element.class_list().toggle_with_force(class, present);
	}
}

impl CookieJar for WebHost {
	fn cookie_string(&self) -> String {
		self.document
			.dyn_ref::<HtmlDocument>()
			.and_then(|doc| doc.cookie().ok())
			.unwrap_or_default()
	}

	fn set_cookie(&self, cookie: &str) {
		if let Some(doc) = self.document.dyn_ref::<HtmlDocument>() {
			let _ = doc.set_cookie(cookie);
		}
	}
}
