// src/router.rs
//
// Client-side routes.  Each route knows its path and which role (if any) may
// view it; the auth guard reads `required_role` to decide on redirects.
//
use crate::models::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Student dashboard.
    Home,
    Login,
    /// Teacher dashboard.
    Dashboard,
    Admin,
    Subjects,
    Assessment,
    Parent,
    Calendar,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Home,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/admin" => Route::Admin,
            "/subjects" => Route::Subjects,
            "/assessment" => Route::Assessment,
            "/parent" => Route::Parent,
            "/calendar" => Route::Calendar,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Admin => "/admin",
            Route::Subjects => "/subjects",
            Route::Assessment => "/assessment",
            Route::Parent => "/parent",
            Route::Calendar => "/calendar",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Student Dashboard",
            Route::Login => "Sign in",
            Route::Dashboard => "Teacher Dashboard",
            Route::Admin => "Dashboard",
            Route::Subjects => "Subjects",
            Route::Assessment => "Assignments",
            Route::Parent => "Parent Portal",
            Route::Calendar => "Calendar",
            Route::NotFound => "Page not found",
        }
    }

    /// `None` for public pages.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::Login | Route::NotFound => None,
            Route::Home => Some(UserRole::Student),
            Route::Dashboard => Some(UserRole::Teacher),
            Route::Admin
            | Route::Subjects
            | Route::Assessment
            | Route::Parent
            | Route::Calendar => Some(UserRole::Admin),
        }
    }

    /// Landing page after login.
    pub fn home_for(role: UserRole) -> Route {
        match role {
            UserRole::Student => Route::Home,
            UserRole::Teacher => Route::Dashboard,
            UserRole::Admin => Route::Admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Dashboard,
            Route::Admin,
            Route::Subjects,
            Route::Assessment,
            Route::Parent,
            Route::Calendar,
        ] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Route::from_path("/admin/"), Route::Admin);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
    }

    #[test]
    fn role_homes_are_guarded_by_that_role() {
        for role in [UserRole::Student, UserRole::Teacher, UserRole::Admin] {
            assert_eq!(Route::home_for(role).required_role(), Some(role));
        }
        assert_eq!(Route::Login.required_role(), None);
    }
}
