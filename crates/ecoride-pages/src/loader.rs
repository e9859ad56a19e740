//! Page loader.
//!
//! [`PageLoader::load_content_page`] turns the current location into a rendered
//! page: resolve, guard, fetch the fragment, swap it into the shell, reinject
//! the page controller and refresh the title, heading, visibility and menu.
//!
//! Navigations can overlap because the fetch yields. Each load takes a number
//! from a generation counter and drops its result if another load started
//! while it was waiting, so a slow response never overwrites a newer page.

use crate::error::PagesError;
use crate::host::Host;
use crate::menu::{mark_active, menu_token};
use crate::router::{AccessGuard, Route, RouteTable};
use crate::shell::Shell;
use crate::visibility::apply_visibility;
use crate::{debug_log, info_log};
use ecoride_auth::{Session, SessionStore};
use ecoride_conf::SiteSettings;
use std::cell::Cell;

/// What a call to [`PageLoader::load_content_page`] ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
	/// The route was rendered
	Rendered { path: String, title: String },
	/// Access was denied and the host was redirected
	Redirected { to: String },
	/// A newer navigation started while the fragment was in flight
	Superseded,
}

impl LoadOutcome {
	pub fn is_rendered(&self) -> bool {
		matches!(self, Self::Rendered { .. })
	}
}

/// Renders routes into the page shell
#[derive(Debug)]
pub struct PageLoader<H: Host> {
	host: H,
	table: RouteTable,
	settings: SiteSettings,
	sessions: SessionStore,
	guard: AccessGuard,
	shell: Shell,
	generation: Cell<u64>,
}

impl<H: Host> PageLoader<H> {
	/// Binds the shell and prepares the loader.
	///
	/// Fails with [`PagesError::MissingElement`] when the shell markup is incomplete.
	pub fn new(host: H, table: RouteTable, settings: SiteSettings) -> Result<Self, PagesError> {
		let shell = Shell::bind(&host, &settings.shell)?;
		Ok(Self {
			sessions: SessionStore::new(&settings.session),
			guard: AccessGuard::new(settings.redirect_path.clone()),
			host,
			table,
			settings,
			shell,
			generation: Cell::new(0),
		})
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	pub fn shell(&self) -> &Shell {
		&self.shell
	}

	pub fn sessions(&self) -> &SessionStore {
		&self.sessions
	}

	/// Session as currently stored in the host's cookies
	pub fn session(&self) -> Session {
		self.sessions.load(&self.host)
	}

	/// Number of loads started so far
	pub fn generation(&self) -> u64 {
		self.generation.get()
	}

	/// Loads the page for the host's current location.
	///
	/// Fetch failures propagate and leave the shell untouched, unless a newer
	/// load started meanwhile; the outcome is then [`LoadOutcome::Superseded`].
	pub async fn load_content_page(&self) -> Result<LoadOutcome, PagesError> {
		let generation = self.generation.get() + 1;
		self.generation.set(generation);

		let path = self.host.pathname();
		let route = self.table.resolve(&path);
		let session = self.session();

		if !self
			.guard
			.check(&self.host, route.requirement(), &session)?
		{
			return Ok(LoadOutcome::Redirected {
				to: self.guard.redirect_to().to_string(),
			});
		}

		// A newer load owns the shell, whatever this fetch produced.
		let fetched = self.host.fetch_text(route.fragment()).await;
		if self.generation.get() != generation {
			debug_log!("Dropping stale fragment for {}", path);
			return Ok(LoadOutcome::Superseded);
		}
		let html = fetched?;

		self.render(route, &html, &session)?;

		let title = self.table.document_title(route);
		info_log!("Rendered {} as \"{}\"", path, title);
		Ok(LoadOutcome::Rendered { path, title })
	}

	fn render(&self, route: &Route, html: &str, session: &Session) -> Result<(), PagesError> {
		self.shell.replace_content(&self.host, html)?;

		if let Some(script) = route.script() {
			debug_log!("Reinjecting {}", script);
			self.host.remove_scripts(script)?;
			self.host.append_module_script(script)?;
		}

		self.host.set_title(&self.table.document_title(route));
		if route.path() != self.settings.home_path {
			self.shell.set_heading(&self.host, route.title())?;
		}

		let shell = &self.settings.shell;
		apply_visibility(&self.host, session, shell);
		mark_active(
			&self.host,
			menu_token(route.path(), &shell.home_menu_token),
			shell,
		);
		Ok(())
	}
}
