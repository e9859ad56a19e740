//! In-memory browser.
//!
//! `MemoryHost` models just enough of a browser to run the router outside
//! WASM: a history stack with back navigation, a map of fragment responses,
//! the shell's id-addressed elements, the list of script tags, tagged elements
//! with their classes, and a cookie jar.
//!
//! Fragment fetches can be held open with [`MemoryHost::hold`] to reproduce
//! responses arriving out of order.

use super::Host;
use crate::error::PagesError;
use async_trait::async_trait;
use ecoride_auth::CookieJar;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Handle to an element registered with [`MemoryHost::tag`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryElement(usize);

/// Keeps one fragment fetch pending until released or dropped
#[derive(Debug)]
pub struct FetchGate {
	release: oneshot::Sender<()>,
}

impl FetchGate {
	/// Lets the held fetch complete
	pub fn release(self) {
		let _ = self.release.send(());
	}
}

#[derive(Debug, Clone)]
enum Response {
	Body(String),
	Status(u16),
	Unreachable,
}

#[derive(Debug, Default)]
struct TaggedNode {
	attributes: BTreeMap<String, String>,
	classes: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct BrowserState {
	history: Vec<String>,
	cursor: usize,
	redirects: Vec<String>,
	responses: HashMap<String, Response>,
	fetched: Vec<String>,
	elements: BTreeMap<String, String>,
	title: String,
	scripts: Vec<String>,
	tagged: Vec<TaggedNode>,
	cookies: BTreeMap<String, String>,
}

/// Browser host backed by plain data structures
#[derive(Debug)]
pub struct MemoryHost {
	state: RefCell<BrowserState>,
	held: RefCell<HashMap<String, oneshot::Receiver<()>>>,
}

impl MemoryHost {
	/// Opens a browser at `url`
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			state: RefCell::new(BrowserState {
				history: vec![url.into()],
				..Default::default()
			}),
			held: RefCell::new(HashMap::new()),
		}
	}

	/// Adds an empty element with this id
	pub fn with_element(self, id: impl Into<String>) -> Self {
		self.state.borrow_mut().elements.insert(id.into(), String::new());
		self
	}

	/// Serves `html` for GET `url`
	pub fn with_fragment(self, url: impl Into<String>, html: impl Into<String>) -> Self {
		self.serve(url, html);
		self
	}

	/// Serves `html` for GET `url`
	pub fn serve(&self, url: impl Into<String>, html: impl Into<String>) {
		self.state
			.borrow_mut()
			.responses
			.insert(url.into(), Response::Body(html.into()));
	}

	/// Answers GET `url` with an error status
	pub fn serve_status(&self, url: impl Into<String>, status: u16) {
		self.state
			.borrow_mut()
			.responses
			.insert(url.into(), Response::Status(status));
	}

	/// Makes GET `url` fail as if the network were down
	pub fn make_unreachable(&self, url: impl Into<String>) {
		self.state
			.borrow_mut()
			.responses
			.insert(url.into(), Response::Unreachable);
	}

	/// Holds the next fetch of `url` until the returned gate is released
	pub fn hold(&self, url: impl Into<String>) -> FetchGate {
		let (release, pending) = oneshot::channel();
		self.held.borrow_mut().insert(url.into(), pending);
		FetchGate { release }
	}

	/// Simulates the user reaching `url` through the address bar or a plain link
	pub fn visit(&self, url: impl Into<String>) {
		let mut state = self.state.borrow_mut();
		let cursor = state.cursor;
		state.history.truncate(cursor + 1);
		state.history.push(url.into());
		state.cursor += 1;
	}

	/// Moves one entry back, like the browser back button.
	///
	/// Returns `false` at the start of history. The caller dispatches the
	/// popstate handling itself.
	pub fn back(&self) -> bool {
		let mut state = self.state.borrow_mut();
		if state.cursor == 0 {
			return false;
		}
		state.cursor -= 1;
		true
	}

	/// Moves one entry forward. Returns `false` at the end of history.
	pub fn forward(&self) -> bool {
		let mut state = self.state.borrow_mut();
		if state.cursor + 1 >= state.history.len() {
			return false;
		}
		state.cursor += 1;
		true
	}

	/// Full current URL, including any query string
	pub fn location(&self) -> String {
		let state = self.state.borrow();
		state.history[state.cursor].clone()
	}

	/// Every history entry, oldest first
	pub fn history(&self) -> Vec<String> {
		self.state.borrow().history.clone()
	}

	/// Redirect targets, in order
	pub fn redirects(&self) -> Vec<String> {
		self.state.borrow().redirects.clone()
	}

	/// URLs requested through [`Host::fetch_text`], in order
	pub fn fetched(&self) -> Vec<String> {
		self.state.borrow().fetched.clone()
	}

	/// Markup or text of the element `id`
	pub fn content(&self, id: &str) -> Option<String> {
		self.state.borrow().elements.get(id).cloned()
	}

	pub fn title(&self) -> String {
		self.state.borrow().title.clone()
	}

	/// `src` of every script tag, in document order
	pub fn scripts(&self) -> Vec<String> {
		self.state.borrow().scripts.clone()
	}

	/// Registers an element carrying `attribute="value"`
	pub fn tag(&self, attribute: impl Into<String>, value: impl Into<String>) -> MemoryElement {
		let mut state = self.state.borrow_mut();
		let mut node = TaggedNode::default();
		node.attributes.insert(attribute.into(), value.into());
		state.tagged.push(node);
		MemoryElement(state.tagged.len() - 1)
	}

	/// Whether a tagged element currently has `class`
	pub fn has_class(&self, element: MemoryElement, class: &str) -> bool {
		self.state
			.borrow()
			.tagged
			.get(element.0)
			.is_some_and(|node| node.classes.contains(class))
	}
}

#[async_trait(?Send)]
impl Host for MemoryHost {
	type Element = MemoryElement;

	fn pathname(&self) -> String {
		let location = self.location();
		let end = location.find(['?', '#']).unwrap_or(location.len());
		location[..end].to_string()
	}

	fn push_history(&self, url: &str) -> Result<(), PagesError> {
		self.visit(url);
		Ok(())
	}

	fn redirect(&self, url: &str) -> Result<(), PagesError> {
		let mut state = self.state.borrow_mut();
		let cursor = state.cursor;
		state.history[cursor] = url.to_string();
		state.redirects.push(url.to_string());
		Ok(())
	}

	async fn fetch_text(&self, url: &str) -> Result<String, PagesError> {
		self.state.borrow_mut().fetched.push(url.to_string());

		let pending = self.held.borrow_mut().remove(url);
		if let Some(pending) = pending {
			// A dropped gate releases the fetch as well.
			let _ = pending.await;
		}

		let response = self.state.borrow().responses.get(url).cloned();
		match response {
			Some(Response::Body(body)) => Ok(body),
			Some(Response::Status(status)) => Err(PagesError::Status {
				url: url.to_string(),
				status,
			}),
			Some(Response::Unreachable) => Err(PagesError::Fetch {
				url: url.to_string(),
				message: "network unreachable".to_string(),
			}),
			None => Err(PagesError::Status {
				url: url.to_string(),
				status: 404,
			}),
		}
	}

	fn has_element(&self, id: &str) -> bool {
		self.state.borrow().elements.contains_key(id)
	}

	fn set_inner_html(&self, id: &str, html: &str) -> Result<(), PagesError> {
		let mut state = self.state.borrow_mut();
		let slot = state
			.elements
			.get_mut(id)
			.ok_or_else(|| PagesError::MissingElement(id.to_string()))?;
		*slot = html.to_string();
		Ok(())
	}

	fn set_text(&self, id: &str, text: &str) -> Result<(), PagesError> {
		self.set_inner_html(id, text)
	}

	fn set_title(&self, title: &str) {
		self.state.borrow_mut().title = title.to_string();
	}

	fn remove_scripts(&self, src: &str) -> Result<usize, PagesError> {
		let mut state = self.state.borrow_mut();
		let before = state.scripts.len();
		state.scripts.retain(|s| s != src);
		Ok(before - state.scripts.len())
	}

	fn append_module_script(&self, src: &str) -> Result<(), PagesError> {
		self.state.borrow_mut().scripts.push(src.to_string());
		Ok(())
	}

	fn elements_with_attribute(&self, attribute: &str) -> Vec<(MemoryElement, String)> {
		self.state
			.borrow()
			.tagged
			.iter()
			.enumerate()
			.filter_map(|(index, node)| {
				node.attributes
					.get(attribute)
					.map(|value| (MemoryElement(index), value.clone()))
			})
			.collect()
	}

	fn set_class(&self, element: &MemoryElement, class: &str, present: bool) {
		let mut state = self.state.borrow_mut();
		if let Some(node) = state.tagged.get_mut(element.0) {
			if present {
				node.classes.insert(class.to_string());
			} else {
				node.classes.remove(class);
			}
		}
	}
}

impl CookieJar for MemoryHost {
	fn cookie_string(&self) -> String {
		self.state
			.borrow()
			.cookies
			.iter()
			.map(|(name, value)| format!("{}={}", name, value))
			.collect::<Vec<_>>()
			.join("; ")
	}

	fn set_cookie(&self, cookie: &str) {
		let mut parts = cookie.split(';');
		let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
			return;
		};
		let expired = parts.any(|attr| attr.trim().eq_ignore_ascii_case("max-age=0"));

		let mut state = self.state.borrow_mut();
		if expired {
			state.cookies.remove(name.trim());
		} else {
			state
				.cookies
				.insert(name.trim().to_string(), value.trim().to_string());
		}
	}
}
