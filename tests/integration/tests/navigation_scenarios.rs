//! End-to-end navigation scenarios over the EcoRide route table
//!
//! These tests verify:
//! 1. Access rules of the real route table, per session
//! 2. The 404 fallback
//! 3. Controller script reinjection across revisits
//! 4. Back navigation after a guard redirect

#[cfg(not(target_arch = "wasm32"))]
mod scenarios {
	use ecoride_integration_tests::{app_at, fragment_body, with_session};
	use ecoride_pages::{Host, LoadOutcome};
	use rstest::rstest;

	#[rstest]
	#[case::home("/", None, true)]
	#[case::rides_anonymous("/rides", None, true)]
	#[case::account_anonymous("/account", None, false)]
	#[case::account_client("/account", Some("ROLE_USER"), true)]
	#[case::signin_anonymous("/signin", None, true)]
	#[case::signin_connected("/signin", Some("ROLE_USER"), false)]
	#[case::signup_connected("/signup", Some("ROLE_ADMIN"), false)]
	#[case::vehicles_client("/vehicles", Some("ROLE_USER"), true)]
	#[case::vehicles_employee("/vehicles", Some("ROLE_EMPLOYEE"), false)]
	#[case::employee_employee("/employee", Some("ROLE_EMPLOYEE"), true)]
	#[case::employee_admin("/employee", Some("ROLE_ADMIN"), false)]
	#[case::admin_admin("/admin", Some("ROLE_ADMIN"), true)]
	#[case::admin_lowercase_role("/admin", Some("admin"), false)]
	#[tokio::test]
	async fn test_route_access(
		#[case] path: &str,
		#[case] role: Option<&str>,
		#[case] rendered: bool,
	) {
		let app = app_at("/");
		if let Some(role) = role {
			with_session(app.host(), "abc123", role);
		}

		let outcome = app.navigator().follow_link(path).await.unwrap();

		assert_eq!(outcome.is_rendered(), rendered, "{path} as {role:?}");
		if rendered {
			assert_eq!(app.host().content("main-page"), Some(fragment_body(path)));
		} else {
			assert_eq!(outcome, LoadOutcome::Redirected { to: "/".to_string() });
			assert!(app.host().fetched().is_empty());
			assert_eq!(app.host().location(), "/");
		}
	}

	#[rstest]
	#[tokio::test]
	async fn test_account_while_disconnected_never_fetches_fragment() {
		let app = app_at("/account");

		let outcome = app.start().await.unwrap();

		assert_eq!(outcome, LoadOutcome::Redirected { to: "/".to_string() });
		assert!(
			!app.host()
				.fetched()
				.contains(&"/pages/account/account.html".to_string())
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_unknown_path_renders_404() {
		let app = app_at("/unknown-path");

		let outcome = app.start().await.unwrap();

		assert_eq!(
			outcome,
			LoadOutcome::Rendered {
				path: "/unknown-path".to_string(),
				title: "Page introuvable - EcoRide".to_string(),
			}
		);
		assert_eq!(app.host().fetched(), vec!["/pages/404.html"]);
		assert_eq!(app.host().title(), "Page introuvable - EcoRide");
		assert!(app.host().scripts().is_empty());
	}

	#[rstest]
	#[tokio::test]
	async fn test_controllers_rerun_on_revisit() {
		let app = app_at("/");
		let nav = app.navigator();

		nav.start().await.unwrap();
		nav.follow_link("/contact").await.unwrap();
		nav.follow_link("/").await.unwrap();
		nav.follow_link("/contact").await.unwrap();

		assert_eq!(app.host().scripts(), vec!["/js/home.js", "/js/contact.js"]);
		assert_eq!(nav.loader().generation(), 4);
	}

	#[rstest]
	#[tokio::test]
	async fn test_home_heading_is_left_alone() {
		let app = app_at("/");
		app.host().set_text("page-title", "Voyagez vert").ok();

		app.start().await.unwrap();
		assert_eq!(app.host().content("page-title"), Some("Voyagez vert".to_string()));

		app.navigator().follow_link("/legal").await.unwrap();
		assert_eq!(
			app.host().content("page-title"),
			Some("Mentions légales".to_string())
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_back_after_redirect_does_not_return_to_denied_page() {
		let app = app_at("/");
		let nav = app.navigator();
		nav.start().await.unwrap();
		nav.follow_link("/rides").await.unwrap();
		nav.follow_link("/admin").await.unwrap();

		assert_eq!(app.host().history(), vec!["/", "/rides", "/"]);

		assert!(app.host().back());
		nav.on_pop_state().await.unwrap();
		assert_eq!(app.host().title(), "Covoiturages - EcoRide");
	}
}
