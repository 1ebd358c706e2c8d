//! Authentication building blocks: form validation, the shared session and
//! the page guard.  Network and DOM side-effects live in `reducers` and
//! `command_executors`.

pub mod guard;
pub mod session;
pub mod validation;

pub use guard::{evaluate, GuardDecision, RouteGuard};
pub use session::AuthContext;
pub use validation::{
    validate_login, validate_registration, FieldErrors, FormField, LoginErrors, LoginInput,
    RegistrationInput,
};
