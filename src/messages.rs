// src/messages.rs
//
// The events that can occur in the UI and the side-effects the update
// function asks the runtime to perform.
//
use uuid::Uuid;

use crate::models::{
    LoginPayload, LoginResponse, RegisterPayload, RegisterResponse, SessionInfo, UserType,
};
use crate::network::ApiError;
use crate::router::Route;
use crate::toast::ToastKind;

/// Which half of the authentication page is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

/// A single edit in the registration form.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterEdit {
    FullName(String),
    Email(String),
    Password(String),
    ConfirmPassword(String),
    UserType(Option<UserType>),
    StudentClass(Option<u8>),
    SchoolId(String),
    AgreedToTerms(bool),
    TogglePasswordVisible,
    ToggleConfirmVisible,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginEdit {
    Email(String),
    Password(String),
    TogglePasswordVisible,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    /// A link was clicked; push history, then switch pages.
    NavigateTo(Route),
    /// The visible page changed (history push or browser back/forward).
    RouteChanged(Route),
    AuthTabSelected(AuthTab),
    ToggleSidebar,

    // Session lifecycle
    SessionCheckRequested,
    SessionResolved {
        request_id: Uuid,
        result: Result<Option<SessionInfo>, ApiError>,
    },
    LogoutRequested,
    LoggedOut,

    // Registration form
    RegisterFieldChanged(RegisterEdit),
    SubmitRegistration,
    RegistrationCompleted {
        request_id: Uuid,
        result: Result<RegisterResponse, ApiError>,
    },

    // Login form
    LoginFieldChanged(LoginEdit),
    SubmitLogin,
    LoginCompleted {
        request_id: Uuid,
        result: Result<LoginResponse, ApiError>,
    },

    // Student dashboard
    SubjectsLoaded {
        request_id: Uuid,
        result: Result<Vec<String>, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: ToastKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Re-render the active view from state
    Render,

    /// Push a history entry and switch views
    Navigate(Route),

    /// Show a toast
    Notify(Notification),

    /// GET the current cookie session
    CheckSession { request_id: Uuid },

    /// POST the registration form
    SendRegistration {
        request_id: Uuid,
        payload: RegisterPayload,
    },

    /// POST the login form
    SendLogin {
        request_id: Uuid,
        payload: LoginPayload,
    },

    /// POST logout
    SendLogout,

    /// GET the signed-in student's subjects
    FetchSubjects { request_id: Uuid },
}
