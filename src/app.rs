//! Application context.
//!
//! [`EcoRide`] is built once at startup and owns everything the client needs:
//! settings, the navigator (and through it the page loader, route table and
//! host) and the REST client. The sign-in and sign-out flows live here since
//! they are the only writers of the session cookies.

use crate::routes::route_table;
use chrono::{DateTime, Utc};
use ecoride_auth::{Role, Session};
use ecoride_conf::{SettingsError, SiteSettings};
use ecoride_pages::{
	ApiClient, ApiError, Credentials, Host, LoadOutcome, Navigator, PageLoader, PagesError,
	RouterError, info_log,
};
use std::rc::Rc;

/// Application-level error
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error(transparent)]
	Settings(#[from] SettingsError),

	#[error(transparent)]
	Router(#[from] RouterError),

	#[error(transparent)]
	Pages(#[from] PagesError),

	#[error(transparent)]
	Api(#[from] ApiError),

	/// The login answer carried no role this client knows
	#[error("No known role granted to {user}")]
	NoRole { user: String },
}

/// The EcoRide client
pub struct EcoRide<H: Host> {
	navigator: Rc<Navigator<H>>,
	api: ApiClient,
}

impl<H: Host> EcoRide<H> {
	/// Builds the route table, binds the shell and prepares the API client
	pub fn new(host: H, settings: SiteSettings) -> Result<Self, AppError> {
		settings.validate()?;
		let api = ApiClient::new(&settings)?;
		let table = route_table(&settings)?;
		let loader = PageLoader::new(host, table, settings)?;
		Ok(Self {
			navigator: Rc::new(Navigator::new(loader)),
			api,
		})
	}

	pub fn navigator(&self) -> &Navigator<H> {
		&self.navigator
	}

	/// Shared handle for event listeners
	pub fn navigator_handle(&self) -> Rc<Navigator<H>> {
		Rc::clone(&self.navigator)
	}

	pub fn host(&self) -> &H {
		self.navigator.host()
	}

	pub fn api(&self) -> &ApiClient {
		&self.api
	}

	pub fn settings(&self) -> &SiteSettings {
		self.navigator.loader().settings()
	}

	/// Current session
	pub fn session(&self) -> Session {
		self.navigator.loader().session()
	}

	/// Renders the page for the initial location
	pub async fn start(&self) -> Result<LoadOutcome, AppError> {
		Ok(self.navigator.start().await?)
	}

	/// Logs in, stores the session cookies and goes home.
	///
	/// Returns the role the session was opened with.
	pub async fn sign_in(&self, credentials: &Credentials) -> Result<Role, AppError> {
		self.sign_in_at(credentials, now()).await
	}

	/// [`sign_in`](Self::sign_in) with an explicit clock
	pub async fn sign_in_at(
		&self,
		credentials: &Credentials,
		now: DateTime<Utc>,
	) -> Result<Role, AppError> {
		let response = self.api.sign_in(credentials).await?;
		let role = Role::highest(&response.roles).ok_or_else(|| AppError::NoRole {
			user: response.user.clone(),
		})?;

		self.navigator
			.loader()
			.sessions()
			.sign_in(self.host(), &response.api_token, role, now);
		info_log!("Signed in {} as {}", response.user, role);

		self.navigator.redirect_home()?;
		Ok(role)
	}

	/// Drops the session cookies and goes home
	pub fn sign_out(&self) -> Result<(), AppError> {
		self.navigator.loader().sessions().sign_out(self.host());
		info_log!("Signed out");
		self.navigator.redirect_home()?;
		Ok(())
	}
}

#[cfg(target_arch = "wasm32")]
fn now() -> DateTime<Utc> {
	DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> DateTime<Utc> {
	Utc::now()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;
	use ecoride_auth::CookieJar;
	use ecoride_pages::MemoryHost;
	use rstest::rstest;
	use serde_json::json;
	use wiremock::matchers::{method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn host(url: &str) -> MemoryHost {
		MemoryHost::new(url)
			.with_element("main-page")
			.with_element("page-title")
	}

	fn settings(api_base_url: &str) -> SiteSettings {
		let mut settings = SiteSettings::default();
		settings.api_base_url = api_base_url.to_string();
		settings
	}

	#[rstest]
	fn test_new_rejects_invalid_settings() {
		let mut invalid = SiteSettings::default();
		invalid.session.ttl_days = 0;
		assert!(matches!(
			EcoRide::new(host("/"), invalid),
			Err(AppError::Settings(SettingsError::Invalid { .. }))
		));
	}

	#[rstest]
	fn test_new_requires_shell() {
		assert!(matches!(
			EcoRide::new(MemoryHost::new("/"), SiteSettings::default()),
			Err(AppError::Pages(PagesError::MissingElement(_)))
		));
	}

	#[rstest]
	fn test_sign_out_erases_cookies() {
		let app = EcoRide::new(host("/account"), SiteSettings::default()).unwrap();
		app.host().set_cookie("accesstoken=abc123; Path=/");
		app.host().set_cookie("role=ROLE_USER; Path=/");
		assert!(app.session().is_connected());

		app.sign_out().unwrap();

		assert_eq!(app.host().cookie_string(), "");
		assert!(!app.session().is_connected());
		assert_eq!(app.host().redirects(), vec!["/"]);
	}

	#[tokio::test]
	async fn test_sign_in_without_known_role_writes_nothing() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/login"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"user": "guest@ecoride.fr",
				"apiToken": "abc123",
				"roles": ["ROLE_GUEST"]
			})))
			.mount(&server)
			.await;

		let app = EcoRide::new(host("/signin"), settings(&format!("{}/api/", server.uri()))).unwrap();
		let err = app
			.sign_in(&Credentials::new("guest@ecoride.fr", "secret"))
			.await
			.unwrap_err();

		assert!(matches!(err, AppError::NoRole { ref user } if user == "guest@ecoride.fr"));
		assert_eq!(app.host().cookie_string(), "");
		assert!(app.host().redirects().is_empty());
	}
}
