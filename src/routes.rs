//! EcoRide route table.
//!
//! Every page of the site, in menu order. Role-restricted routes list the
//! roles that may open them; `/signin` and `/signup` are reserved for visitors
//! without a session.

use ecoride_auth::{AccessRequirement, Role};
use ecoride_conf::SiteSettings;
use ecoride_pages::{Route, RouteTable, RouterError};

/// Builds the EcoRide route table, titled with `settings.site_name`
pub fn route_table(settings: &SiteSettings) -> Result<RouteTable, RouterError> {
	let connected = || AccessRequirement::roles(Role::ALL);

	RouteTable::builder(settings.site_name.as_str())
		.route(Route::new("/", "Accueil", "/pages/home.html").with_script("/js/home.js"))
		.route(
			Route::new("/rides", "Covoiturages", "/pages/rides/rides.html")
				.with_script("/js/rides/rides.js"),
		)
		.route(
			Route::new("/ride-detail", "Détail du trajet", "/pages/rides/ride-detail.html")
				.with_script("/js/rides/ride-detail.js"),
		)
		.route(
			Route::new("/contact", "Contact", "/pages/contact.html").with_script("/js/contact.js"),
		)
		.route(Route::new("/legal", "Mentions légales", "/pages/legal.html"))
		.route(
			Route::new("/signin", "Connexion", "/pages/auth/signin.html")
				.with_requirement(AccessRequirement::Disconnected)
				.with_script("/js/auth/signin.js"),
		)
		.route(
			Route::new("/signup", "Inscription", "/pages/auth/signup.html")
				.with_requirement(AccessRequirement::Disconnected)
				.with_script("/js/auth/signup.js"),
		)
		.route(
			Route::new("/account", "Mon compte", "/pages/account/account.html")
				.with_requirement(connected())
				.with_script("/js/account/account.js"),
		)
		.route(
			Route::new(
				"/editPassword",
				"Modifier le mot de passe",
				"/pages/account/edit-password.html",
			)
			.with_requirement(connected())
			.with_script("/js/account/edit-password.js"),
		)
		.route(
			Route::new("/vehicles", "Mes véhicules", "/pages/account/vehicles.html")
				.with_requirement(AccessRequirement::roles([Role::Client]))
				.with_script("/js/account/vehicles.js"),
		)
		.route(
			Route::new("/preferences", "Mes préférences", "/pages/account/preferences.html")
				.with_requirement(AccessRequirement::roles([Role::Client]))
				.with_script("/js/account/preferences.js"),
		)
		.route(
			Route::new("/employee", "Espace employé", "/pages/employee/employee.html")
				.with_requirement(AccessRequirement::roles([Role::Employee]))
				.with_script("/js/employee/employee.js"),
		)
		.route(
			Route::new("/admin", "Administration", "/pages/admin/admin.html")
				.with_requirement(AccessRequirement::roles([Role::Admin]))
				.with_script("/js/admin/admin.js"),
		)
		.build()
}
