//! Constants for the frontend application
//!
//! This module centralizes commonly used string literals to prevent typos
//! and enable safe refactoring across the codebase.

// API paths (relative to the configured base URL)
pub const API_REGISTER: &str = "/api/auth/register";
pub const API_LOGIN: &str = "/api/auth/login";
pub const API_LOGOUT: &str = "/api/auth/logout";
pub const API_SESSION: &str = "/api/auth/me";
pub const API_MY_SUBJECTS: &str = "/api/students/subjects/me";

// Fallback base URL for local development
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

// Validation messages
pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_INVALID: &str = "Email is invalid";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_USER_TYPE_REQUIRED: &str = "User type is required";
pub const MSG_TERMS_REQUIRED: &str = "You must agree to the terms";
pub const MSG_CLASS_REQUIRED: &str = "Class is required for students";
pub const MSG_SCHOOL_ID_REQUIRED: &str = "School ID is required";

// Toast fallbacks
pub const MSG_REGISTER_SUCCESS: &str = "Registration successful!";
pub const MSG_REGISTER_FAILED: &str = "Registration failed";
pub const MSG_LOGIN_SUCCESS: &str = "Welcome back!";
pub const MSG_LOGIN_FAILED: &str = "Login failed";
pub const MSG_LOGGED_OUT: &str = "You have been signed out";

// Student classes offered in the registration form
pub const MIN_STUDENT_CLASS: u8 = 1;
pub const MAX_STUDENT_CLASS: u8 = 12;

// Toast lifetime
pub const TOAST_DURATION_MS: u32 = 4000;

// Element IDs
pub const ID_APP_ROOT: &str = "app";
pub const ID_TOAST_ROOT: &str = "toast-root";
pub const ID_TOAST_STYLES: &str = "toast-styles";
pub const ID_REGISTER_FORM: &str = "register-form";
pub const ID_LOGIN_FORM: &str = "login-form";
pub const ID_ADMIN_SIDEBAR: &str = "admin-sidebar";

// CSS Class Names
pub const CSS_HIDDEN: &str = "hidden";
pub const CSS_VISIBLE: &str = "visible";
pub const CSS_CARD: &str = "card";
pub const CSS_FORM_ROW: &str = "form-row";
pub const CSS_FIELD_ERROR: &str = "field-error";
pub const CSS_INPUT_INVALID: &str = "input-invalid";
pub const CSS_SPINNER: &str = "spinner";
pub const CSS_NAV_ITEM: &str = "nav-item";
pub const CSS_NAV_ITEM_ACTIVE: &str = "nav-item active";
pub const CSS_PAGE: &str = "page";
pub const CSS_PLACEHOLDER: &str = "page-placeholder";
pub const CSS_ERROR_TEXT: &str = "error-text";
