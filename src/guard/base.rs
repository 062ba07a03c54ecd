use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info};

use crate::config::GuardConfig;
use crate::session::Session;

use super::routes::RouteRule;

/// The outcome of a navigation attempt. Always one of these three; being
/// turned away is a decision, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The session may enter the view.
    Allow,
    /// No authenticated session; send it to the login surface.
    RedirectToLogin,
    /// Authenticated but lacking every required role; send it to the
    /// default surface.
    RedirectToDefault,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allow => write!(f, "allow"),
            Decision::RedirectToLogin => write!(f, "redirect-to-login"),
            Decision::RedirectToDefault => write!(f, "redirect-to-default"),
        }
    }
}

/// Decides, per navigation attempt, whether the current session may enter a
/// view. Holds the route table and the redirect surfaces from config, never
/// any session state, so every decision is a pure function of the session
/// snapshot it is handed. Re-evaluating on every navigation is the intended
/// use.
pub struct AccessGuard {
    rules: Vec<RouteRule>,
    login_path: String,
    default_path: String,
}

impl AccessGuard {
    pub fn new(config: &GuardConfig) -> Self {
        info!("Creating access guard with {} routes...", config.routes.len());
        AccessGuard {
            rules: config.routes.clone(),
            login_path: config.login_path.clone(),
            default_path: config.default_path.clone(),
        }
    }

    /// The core decision: unauthenticated sessions are sent to login no
    /// matter the requirement; authenticated ones pass unless the view
    /// requires roles the identity lacks. An absent or empty requirement
    /// means any authenticated identity may enter.
    pub fn evaluate(
        &self,
        session: &Session,
        required_roles: Option<&HashSet<String>>,
    ) -> Decision {
        if !session.is_authenticated() {
            return Decision::RedirectToLogin;
        }

        match required_roles {
            None => Decision::Allow,
            Some(required) if required.is_empty() => Decision::Allow,
            Some(required) if session.has_role(required) => Decision::Allow,
            Some(_) => Decision::RedirectToDefault,
        }
    }

    /// Looks a path up in the route table and evaluates it. Public views
    /// skip the guard entirely; a path not in the table is treated as a
    /// protected view with no role requirement.
    pub fn evaluate_path(&self, session: &Session, path: &str) -> Decision {
        let decision = match self.rules.iter().find(|rule| rule.path == path) {
            Some(rule) if rule.public => Decision::Allow,
            Some(rule) => self.evaluate(session, Some(&rule.roles)),
            None => self.evaluate(session, None),
        };
        debug!("Evaluated path '{}': {}", path, decision);
        decision
    }

    /// Where a turned-away navigation should land, per the configured
    /// surfaces. `Allow` has no target.
    pub fn redirect_target(&self, decision: Decision) -> Option<&str> {
        match decision {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some(&self.login_path),
            Decision::RedirectToDefault => Some(&self.default_path),
        }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roles;
    use crate::storage::memory_storage::MemoryStorage;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;
    use serde_json::json;
    use std::sync::Arc;

    fn guard() -> AccessGuard {
        AccessGuard::new(&GuardConfig::default())
    }

    fn logged_out_session() -> Session {
        Session::bootstrap(Arc::new(MemoryStorage::new()))
    }

    fn session_with_roles(role_claim: &str) -> Session {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD
            .encode(json!({"sub": "jdoe", "userId": "u1", "role": role_claim}).to_string());
        let token = format!("{header}.{payload}.sig");

        let mut session = logged_out_session();
        session.login(&token).expect("fixture token should decode");
        session
    }

    fn required(roles: &[&str]) -> HashSet<String> {
        roles.iter().map(|r| r.to_string()).collect()
    }

    /// Test that a logged-out session is sent to login regardless of what
    /// the view requires.
    #[test]
    fn test_unauthenticated_always_redirects_to_login() {
        let guard = guard();
        let session = logged_out_session();

        let admin_only = required(&[roles::ADMIN]);
        assert_eq!(
            guard.evaluate(&session, None),
            Decision::RedirectToLogin
        );
        assert_eq!(
            guard.evaluate(&session, Some(&admin_only)),
            Decision::RedirectToLogin
        );
        assert_eq!(
            guard.evaluate(&session, Some(&HashSet::new())),
            Decision::RedirectToLogin
        );
    }

    /// Test the role-intersection outcomes for an authenticated session.
    #[test]
    fn test_authenticated_role_matrix() {
        let guard = guard();
        let session = session_with_roles("ADMIN,PROFESSOR");

        assert_eq!(guard.evaluate(&session, None), Decision::Allow);
        assert_eq!(
            guard.evaluate(&session, Some(&required(&[roles::ADMIN]))),
            Decision::Allow
        );
        assert_eq!(
            guard.evaluate(&session, Some(&required(&[roles::SECRETARY]))),
            Decision::RedirectToDefault
        );
    }

    /// Test that an empty requirement behaves exactly like no requirement.
    #[test]
    fn test_empty_requirement_means_any_authenticated() {
        let guard = guard();
        let session = session_with_roles(roles::STUDENT);

        assert_eq!(
            guard.evaluate(&session, Some(&HashSet::new())),
            Decision::Allow
        );
        assert_eq!(guard.evaluate(&session, None), Decision::Allow);
    }

    /// Test that the decision is a pure function of the snapshot: the same
    /// session yields the same decision on repeated evaluation.
    #[test]
    fn test_evaluate_is_stable_for_a_snapshot() {
        let guard = guard();
        let session = session_with_roles(roles::STUDENT);
        let admin_only = required(&[roles::ADMIN]);

        let first = guard.evaluate(&session, Some(&admin_only));
        for _ in 0..10 {
            assert_eq!(guard.evaluate(&session, Some(&admin_only)), first);
        }
    }

    /// Test path evaluation: public views skip the guard, unknown paths are
    /// authenticated-only.
    #[test]
    fn test_evaluate_path_public_and_unknown() {
        let config = GuardConfig {
            routes: vec![
                RouteRule::public("/login"),
                RouteRule::restricted("/usuarios", [roles::ADMIN]),
            ],
            ..GuardConfig::default()
        };
        let guard = AccessGuard::new(&config);

        let logged_out = logged_out_session();
        assert_eq!(
            guard.evaluate_path(&logged_out, "/login"),
            Decision::Allow
        );
        assert_eq!(
            guard.evaluate_path(&logged_out, "/anything-else"),
            Decision::RedirectToLogin
        );

        let student = session_with_roles(roles::STUDENT);
        assert_eq!(
            guard.evaluate_path(&student, "/usuarios"),
            Decision::RedirectToDefault
        );
        assert_eq!(
            guard.evaluate_path(&student, "/not-in-the-table"),
            Decision::Allow
        );
    }

    /// Test that redirect targets come from the configured surfaces.
    #[test]
    fn test_redirect_targets() {
        let guard = guard();

        assert_eq!(guard.redirect_target(Decision::Allow), None);
        assert_eq!(
            guard.redirect_target(Decision::RedirectToLogin),
            Some("/login")
        );
        assert_eq!(
            guard.redirect_target(Decision::RedirectToDefault),
            Some("/")
        );
    }
}
