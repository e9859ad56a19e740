//! Browser host abstraction.
//!
//! Everything the router needs from the browser goes through [`Host`]:
//! location and history, fragment fetches, and the handful of DOM writes the
//! page loader performs. Two implementations exist:
//!
//! - [`WebHost`] (wasm32 only) drives the real `window`/`document`
//! - [`MemoryHost`] keeps an in-memory browser for native runs and tests

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::{FetchGate, MemoryElement, MemoryHost};
#[cfg(target_arch = "wasm32")]
pub use web::WebHost;

use crate::error::PagesError;
use async_trait::async_trait;
use ecoride_auth::CookieJar;

/// Browser services used by the router.
///
/// Futures are not `Send`: browser hosts live on the single UI thread.
#[async_trait(?Send)]
pub trait Host: CookieJar {
	/// Handle to an element returned by [`elements_with_attribute`](Self::elements_with_attribute)
	type Element;

	/// Current location path, without query string or fragment
	fn pathname(&self) -> String;

	/// Pushes `url` as a new history entry without reloading
	fn push_history(&self, url: &str) -> Result<(), PagesError>;

	/// Navigates to `url`, replacing the current history entry
	fn redirect(&self, url: &str) -> Result<(), PagesError>;

	/// GETs `url` and returns the body of a 2xx response
	async fn fetch_text(&self, url: &str) -> Result<String, PagesError>;

	/// Whether an element with this id exists
	fn has_element(&self, id: &str) -> bool;

	/// Replaces the markup inside the element `id`
	fn set_inner_html(&self, id: &str, html: &str) -> Result<(), PagesError>;

	/// Replaces the text inside the element `id`
	fn set_text(&self, id: &str, text: &str) -> Result<(), PagesError>;

	fn set_title(&self, title: &str);

	/// Removes every `<script>` whose `src` is `src`, returning how many went
	fn remove_scripts(&self, src: &str) -> Result<usize, PagesError>;

	/// Appends `<script type="module" src="...">` to the body
	fn append_module_script(&self, src: &str) -> Result<(), PagesError>;

	/// Elements carrying `attribute`, paired with its value
	fn elements_with_attribute(&self, attribute: &str) -> Vec<(Self::Element, String)>;

	/// Adds (`present == true`) or removes a class on an element
	fn set_class(&self, element: &Self::Element, class: &str, present: bool);
}
