use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use crate::auth::{AuthContext, FieldErrors, LoginErrors, LoginInput, RegistrationInput, RouteGuard};
use crate::messages::{AuthTab, Command, Message};
use crate::router::Route;
use crate::update;

/// Registration form plus its submission bookkeeping.
#[derive(Debug, Default)]
pub struct RegisterFormState {
    pub input: RegistrationInput,
    pub errors: FieldErrors,
    /// A submission is in flight; the submit button is disabled.
    pub busy: bool,
    /// Id of the outstanding request.  Responses carrying another id belong
    /// to a form instance that no longer exists and are dropped.
    pub pending_request: Option<Uuid>,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

#[derive(Debug, Default)]
pub struct LoginFormState {
    pub input: LoginInput,
    pub errors: LoginErrors,
    pub busy: bool,
    pub pending_request: Option<Uuid>,
    pub show_password: bool,
}

/// Subjects shown on the student dashboard.
#[derive(Debug, Default)]
pub struct SubjectsState {
    /// The fetch for this page visit has been issued.
    pub requested: bool,
    pub loading: bool,
    pub subjects: Vec<String>,
    pub error: Option<String>,
    pub pending_request: Option<Uuid>,
}

pub struct AppState {
    pub route: Route,
    pub auth: AuthContext,
    pub guard: RouteGuard,
    pub auth_tab: AuthTab,
    pub register: RegisterFormState,
    pub login: LoginFormState,
    pub subjects: SubjectsState,
    pub sidebar_collapsed: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: Route::Login,
            auth: AuthContext::new(),
            guard: RouteGuard::default(),
            auth_tab: AuthTab::default(),
            register: RegisterFormState::default(),
            login: LoginFormState::default(),
            subjects: SubjectsState::default(),
            sidebar_collapsed: false,
        }
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update::update(self, msg)
    }
}

/// Cheap, clonable handle to the application state.  Event closures and
/// async tasks each hold a clone; nothing reaches the state through a global.
#[derive(Clone)]
pub struct AppHandle {
    state: Rc<RefCell<AppState>>,
}

impl AppHandle {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Run `f` with a shared borrow, e.g. for rendering.
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Update state, then execute the resulting commands.  The borrow is
    /// released first so executors may dispatch follow-up messages.
    pub fn dispatch(&self, msg: Message) {
        let commands = self.state.borrow_mut().dispatch(msg);
        for cmd in commands {
            crate::command_executors::execute(self, cmd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_waits_for_session() {
        let state = AppState::new();
        assert!(state.auth.is_loading());
        assert!(!state.register.busy);
        assert!(!state.login.busy);
        assert_eq!(state.auth_tab, AuthTab::Login);
    }
}
