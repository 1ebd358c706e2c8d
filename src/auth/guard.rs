//! Page-level access check.
//!
//! No decision is taken while the session is still loading; a valid session
//! that has not resolved yet must not bounce the user to the login page.

use super::session::AuthSession;
use crate::models::UserRole;
use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving, render a placeholder.
    Pending,
    Allow,
    Redirect(Route),
}

pub fn evaluate(session: &AuthSession, required: Option<UserRole>) -> GuardDecision {
    let required = match required {
        Some(role) => role,
        None => return GuardDecision::Allow,
    };

    if session.loading {
        return GuardDecision::Pending;
    }

    if session.is_authenticated && session.role == Some(required) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

/// Turns guard decisions into at most one redirect per page visit.
#[derive(Debug, Default)]
pub struct RouteGuard {
    redirect_issued: bool,
}

impl RouteGuard {
    /// Forget the previous page's redirect.  Called on every route change.
    pub fn reset(&mut self) {
        self.redirect_issued = false;
    }

    /// Record a redirect issued outside the guard, e.g. on logout.
    pub fn mark_redirected(&mut self) {
        self.redirect_issued = true;
    }

    /// Returns the route to navigate to, the first time a redirect is due.
    pub fn check(&mut self, session: &AuthSession, route: Route) -> Option<Route> {
        match evaluate(session, route.required_role()) {
            GuardDecision::Redirect(target) if !self.redirect_issued => {
                self.redirect_issued = true;
                Some(target)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(loading: bool, authenticated: bool, role: Option<UserRole>) -> AuthSession {
        AuthSession {
            is_authenticated: authenticated,
            role,
            school_id: None,
            loading,
        }
    }

    #[test]
    fn pending_while_loading_regardless_of_auth() {
        for authenticated in [true, false] {
            let s = session(true, authenticated, None);
            assert_eq!(evaluate(&s, Some(UserRole::Student)), GuardDecision::Pending);
        }
    }

    #[test]
    fn public_routes_always_allowed() {
        let s = session(true, false, None);
        assert_eq!(evaluate(&s, None), GuardDecision::Allow);
    }

    #[test]
    fn wrong_role_redirects() {
        let s = session(false, true, Some(UserRole::Teacher));
        assert_eq!(
            evaluate(&s, Some(UserRole::Student)),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(evaluate(&s, Some(UserRole::Teacher)), GuardDecision::Allow);
    }

    #[test]
    fn redirect_happens_exactly_once_after_loading() {
        let mut guard = RouteGuard::default();
        let loading = session(true, false, None);
        assert_eq!(guard.check(&loading, Route::Home), None);
        assert_eq!(guard.check(&loading, Route::Home), None);

        let anonymous = session(false, false, None);
        assert_eq!(guard.check(&anonymous, Route::Home), Some(Route::Login));
        assert_eq!(guard.check(&anonymous, Route::Home), None);

        guard.reset();
        assert_eq!(guard.check(&anonymous, Route::Admin), Some(Route::Login));
    }

    #[test]
    fn login_page_never_redirects() {
        let mut guard = RouteGuard::default();
        let anonymous = session(false, false, None);
        assert_eq!(guard.check(&anonymous, Route::Login), None);
    }
}
