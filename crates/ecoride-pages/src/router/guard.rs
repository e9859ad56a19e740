//! Access guard.
//!
//! Denial and redirect are one action: a denied session is sent to the
//! redirect path with a history replace, so going back never lands on the
//! refused page again.

use crate::error::PagesError;
use crate::host::Host;
use crate::warn_log;
use ecoride_auth::{AccessDecision, AccessRequirement, Session};

/// Enforces route requirements against the current session.
#[derive(Debug, Clone)]
pub struct AccessGuard {
	redirect_to: String,
}

impl AccessGuard {
	/// Creates a guard sending denied sessions to `redirect_to`
	pub fn new(redirect_to: impl Into<String>) -> Self {
		Self {
			redirect_to: redirect_to.into(),
		}
	}

	pub fn redirect_to(&self) -> &str {
		&self.redirect_to
	}

	/// Returns `true` when `session` may proceed.
	///
	/// On denial the host is redirected and `false` is returned; the caller must
	/// stop loading the page.
	pub fn check<H: Host + ?Sized>(
		&self,
		host: &H,
		requirement: &AccessRequirement,
		session: &Session,
	) -> Result<bool, PagesError> {
		match requirement.evaluate(session) {
			AccessDecision::Allow => Ok(true),
			AccessDecision::Deny => {
				warn_log!(
					"Access denied to {} ({:?}), redirecting to {}",
					host.pathname(),
					requirement,
					self.redirect_to
				);
				host.redirect(&self.redirect_to)?;
				Ok(false)
			}
		}
	}
}
