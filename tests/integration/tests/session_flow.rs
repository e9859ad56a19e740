//! Sign-in and sign-out flows against a mock EcoRide API
//!
//! These tests verify:
//! 1. Cookies written on sign-in (token and most privileged role)
//! 2. Pages opened with the new session
//! 3. Sign-out and the disconnected-only pages
//! 4. API failures leave the session untouched

#[cfg(not(target_arch = "wasm32"))]
mod session_flow {
	use ecoride::{AppError, EcoRide};
	use ecoride_auth::{CookieJar, Role};
	use ecoride_integration_tests::{api_settings, fragment_body, shell_host};
	use ecoride_pages::{ApiError, Credentials, LoadOutcome, MemoryHost};
	use rstest::rstest;
	use serde_json::json;
	use wiremock::matchers::{body_json, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn credentials() -> Credentials {
		Credentials::new("jose@ecoride.fr", "Secret123!")
	}

	async fn login_server(roles: serde_json::Value) -> MockServer {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/login"))
			.and(body_json(json!({
				"username": "jose@ecoride.fr",
				"password": "Secret123!"
			})))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"user": "jose@ecoride.fr",
				"apiToken": "4f9c2a",
				"roles": roles
			})))
			.mount(&server)
			.await;
		server
	}

	fn app(url: &str, server: &MockServer) -> EcoRide<MemoryHost> {
		EcoRide::new(shell_host(url), api_settings(&server.uri())).unwrap()
	}

	#[rstest]
	#[tokio::test]
	async fn test_sign_in_opens_account_pages() {
		let server = login_server(json!(["ROLE_USER"])).await;
		let app = app("/signin", &server);
		app.start().await.unwrap();

		let role = app.sign_in(&credentials()).await.unwrap();

		assert_eq!(role, Role::Client);
		assert_eq!(app.host().cookie("accesstoken"), Some("4f9c2a".to_string()));
		assert_eq!(app.host().cookie("role"), Some("ROLE_USER".to_string()));
		assert_eq!(app.host().redirects(), vec!["/"]);

		let outcome = app.navigator().follow_link("/vehicles").await.unwrap();
		assert!(outcome.is_rendered());
		assert_eq!(
			app.host().content("main-page"),
			Some(fragment_body("/vehicles"))
		);

		let outcome = app.navigator().follow_link("/signin").await.unwrap();
		assert_eq!(outcome, LoadOutcome::Redirected { to: "/".to_string() });
	}

	#[rstest]
	#[case::single(json!(["ROLE_EMPLOYEE"]), Role::Employee)]
	#[case::admin_wins(json!(["ROLE_USER", "ROLE_ADMIN", "ROLE_EMPLOYEE"]), Role::Admin)]
	#[case::unknown_skipped(json!(["ROLE_GUEST", "ROLE_USER"]), Role::Client)]
	#[tokio::test]
	async fn test_sign_in_keeps_most_privileged_role(
		#[case] roles: serde_json::Value,
		#[case] expected: Role,
	) {
		let server = login_server(roles).await;
		let app = app("/signin", &server);

		let role = app.sign_in(&credentials()).await.unwrap();

		assert_eq!(role, expected);
		assert_eq!(app.host().cookie("role"), Some(expected.as_str().to_string()));
	}

	#[rstest]
	#[tokio::test]
	async fn test_rejected_credentials_leave_session_untouched() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/login"))
			.respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials."))
			.mount(&server)
			.await;
		let app = app("/signin", &server);

		let err = app.sign_in(&credentials()).await.unwrap_err();

		assert!(matches!(
			err,
			AppError::Api(ApiError::Status { status: 401, .. })
		));
		assert_eq!(app.host().cookie_string(), "");
		assert!(app.host().redirects().is_empty());
		assert_eq!(app.host().location(), "/signin");
	}

	#[rstest]
	#[tokio::test]
	async fn test_sign_out_closes_restricted_pages() {
		let server = login_server(json!(["ROLE_ADMIN"])).await;
		let app = app("/signin", &server);
		app.sign_in(&credentials()).await.unwrap();
		assert!(
			app.navigator()
				.follow_link("/admin")
				.await
				.unwrap()
				.is_rendered()
		);

		app.sign_out().unwrap();

		assert!(!app.session().is_connected());
		assert_eq!(app.host().cookie("role"), None);
		let outcome = app.navigator().follow_link("/admin").await.unwrap();
		assert_eq!(outcome, LoadOutcome::Redirected { to: "/".to_string() });
		let outcome = app.navigator().follow_link("/signin").await.unwrap();
		assert!(outcome.is_rendered());
	}

	#[rstest]
	#[tokio::test]
	async fn test_account_uses_stored_token() {
		let server = login_server(json!(["ROLE_USER"])).await;
		Mock::given(method("GET"))
			.and(path("/api/account/me"))
			.and(wiremock::matchers::header("X-AUTH-TOKEN", "4f9c2a"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"email": "jose@ecoride.fr",
				"pseudo": "jose",
				"roles": ["ROLE_USER"],
				"credits": 20
			})))
			.mount(&server)
			.await;
		let app = app("/signin", &server);
		app.sign_in(&credentials()).await.unwrap();

		let token = app.session().token().map(str::to_string).unwrap();
		let account = app.api().account(&token).await.unwrap();

		assert_eq!(account.email, "jose@ecoride.fr");
		assert_eq!(account.credits, Some(20));
	}

	#[rstest]
	fn test_credentials_serialize_as_login_form() {
		let value = serde_json::to_value(Credentials::new("jose@ecoride.fr", "x")).unwrap();
		assert_eq!(value, json!({"username": "jose@ecoride.fr", "password": "x"}));
	}
}
