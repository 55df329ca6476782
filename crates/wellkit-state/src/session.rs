//! Mock authentication session.
//!
//! No real accounts exist: any non-empty credential pair is accepted and a
//! demo profile is fabricated from it.  Logging in with an email address
//! yields a profile whose name is the address's local part, demo age 32,
//! and the Hypertension condition tag — the tag is what lets the advisor's
//! personalized rule fire for the demo user.  Registration fabricates a
//! profile with no conditions.

use tracing::info;

use wellkit_contracts::{
    error::{WellkitError, WellkitResult},
    profile::UserProfile,
};

/// The login state of the application.
#[derive(Debug, Default)]
pub struct Session {
    profile: Option<UserProfile>,
}

impl Session {
    /// Start logged out.
    pub fn new() -> Self {
        Self { profile: None }
    }

    /// Mock login: accept any non-empty email/password pair.
    ///
    /// The fabricated profile carries the Hypertension tag so the
    /// personalized advisor path is reachable in the demo.
    pub fn login(&mut self, email: &str, password: &str) -> WellkitResult<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "email".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if password.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "password".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let name = email.split('@').next().unwrap_or(email).to_string();

        info!(email = %email, "mock login accepted");

        self.profile = Some(UserProfile {
            name,
            email: email.to_string(),
            age: Some(32),
            conditions: vec!["Hypertension".to_string()],
        });
        Ok(())
    }

    /// Mock registration: accept any non-empty name/email/password triple.
    ///
    /// Freshly registered profiles have no age and no condition tags.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> WellkitResult<()> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if email.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "email".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if password.is_empty() {
            return Err(WellkitError::InvalidEntry {
                field: "password".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        info!(email = %email, "mock registration accepted");

        self.profile = Some(UserProfile {
            name: name.to_string(),
            email: email.to_string(),
            age: None,
            conditions: Vec::new(),
        });
        Ok(())
    }

    /// Clear the profile and return to the logged-out state.
    pub fn logout(&mut self) {
        if let Some(profile) = self.profile.take() {
            info!(email = %profile.email, "logged out");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.profile.is_some()
    }

    /// The logged-in profile, if any.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::Session;

    #[test]
    fn login_fabricates_demo_profile() {
        let mut session = Session::new();
        session.login("maria@example.com", "secret").unwrap();

        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "maria");
        assert_eq!(profile.email, "maria@example.com");
        assert_eq!(profile.age, Some(32));
        assert!(profile.has_condition("Hypertension"));
        assert!(session.is_logged_in());
    }

    #[test]
    fn login_rejects_empty_credentials() {
        let mut session = Session::new();
        assert!(session.login("", "secret").is_err());
        assert!(session.login("maria@example.com", "").is_err());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn register_leaves_conditions_empty() {
        let mut session = Session::new();
        session
            .register("Maria Lopez", "maria@example.com", "secret")
            .unwrap();

        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "Maria Lopez");
        assert_eq!(profile.age, None);
        assert!(profile.conditions.is_empty());
    }

    #[test]
    fn logout_clears_profile() {
        let mut session = Session::new();
        session.login("maria@example.com", "secret").unwrap();
        session.logout();

        assert!(!session.is_logged_in());
        assert!(session.profile().is_none());
    }
}
