//! Session state shared by every page.
//!
//! [`AuthContext`] is owned by the application state and handed to pages as a
//! shared borrow.  Pages only see the read accessors; the mutators are
//! crate-private and called from the auth reducer alone.

use uuid::Uuid;

use crate::models::{SessionInfo, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub role: Option<UserRole>,
    pub school_id: Option<String>,
    pub loading: bool,
}

impl Default for AuthSession {
    /// Application start: nothing known yet, session check outstanding.
    fn default() -> Self {
        Self {
            is_authenticated: false,
            role: None,
            school_id: None,
            loading: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct AuthContext {
    session: AuthSession,
    /// The session check whose answer is still wanted.  A login or logout
    /// settles the session first and makes that answer obsolete.
    pending_check: Option<Uuid>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.session.loading
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.role
    }

    pub fn school_id(&self) -> Option<&str> {
        self.session.school_id.as_deref()
    }

    // ---------------------------------------------------------------
    // Write access (auth reducer only)
    // ---------------------------------------------------------------

    /// A session check is about to run.
    pub(crate) fn begin_check(&mut self, request_id: Uuid) {
        self.session.loading = true;
        self.pending_check = Some(request_id);
    }

    /// Whether `request_id` answers the outstanding session check.  Consumes
    /// the check when it does.
    pub(crate) fn finish_check(&mut self, request_id: Uuid) -> bool {
        if self.pending_check == Some(request_id) {
            self.pending_check = None;
            true
        } else {
            false
        }
    }

    /// The backend confirmed an authenticated identity.
    pub(crate) fn establish(&mut self, info: SessionInfo) {
        self.pending_check = None;
        self.session = AuthSession {
            is_authenticated: true,
            role: Some(info.role),
            school_id: info.school_id,
            loading: false,
        };
    }

    /// Logout, or a session check that found no valid session.
    pub(crate) fn clear(&mut self) {
        self.pending_check = None;
        self.session = AuthSession {
            loading: false,
            ..AuthSession::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_and_loading() {
        let ctx = AuthContext::new();
        assert!(!ctx.is_authenticated());
        assert!(ctx.is_loading());
        assert_eq!(ctx.role(), None);
        assert_eq!(ctx.school_id(), None);
    }

    #[test]
    fn establish_then_clear() {
        let mut ctx = AuthContext::new();
        ctx.establish(SessionInfo {
            role: UserRole::Teacher,
            school_id: Some("SCH-4".to_string()),
        });
        assert!(ctx.is_authenticated());
        assert!(!ctx.is_loading());
        assert_eq!(ctx.role(), Some(UserRole::Teacher));
        assert_eq!(ctx.school_id(), Some("SCH-4"));

        ctx.clear();
        assert_eq!(
            ctx.session(),
            &AuthSession {
                is_authenticated: false,
                role: None,
                school_id: None,
                loading: false,
            }
        );
    }

    #[test]
    fn begin_check_keeps_identity() {
        let mut ctx = AuthContext::new();
        ctx.establish(SessionInfo {
            role: UserRole::Student,
            school_id: None,
        });
        ctx.begin_check(Uuid::new_v4());
        assert!(ctx.is_loading());
        assert_eq!(ctx.role(), Some(UserRole::Student));
    }

    #[test]
    fn check_answer_is_accepted_once() {
        let mut ctx = AuthContext::new();
        let id = Uuid::new_v4();
        ctx.begin_check(id);
        assert!(!ctx.finish_check(Uuid::new_v4()));
        assert!(ctx.finish_check(id));
        assert!(!ctx.finish_check(id));
    }

    #[test]
    fn login_supersedes_outstanding_check() {
        let mut ctx = AuthContext::new();
        let id = Uuid::new_v4();
        ctx.begin_check(id);
        ctx.establish(SessionInfo {
            role: UserRole::Student,
            school_id: None,
        });
        assert!(!ctx.finish_check(id));
        assert!(ctx.is_authenticated());
    }
}
