//! Field validation for the registration and login forms.
//!
//! Every rule is evaluated independently so the form can show all problems at
//! once; nothing short-circuits.

use crate::constants::{
    MAX_STUDENT_CLASS, MIN_STUDENT_CLASS, MSG_CLASS_REQUIRED, MSG_EMAIL_INVALID,
    MSG_EMAIL_REQUIRED, MSG_FULL_NAME_REQUIRED, MSG_PASSWORD_MISMATCH, MSG_PASSWORD_REQUIRED,
    MSG_SCHOOL_ID_REQUIRED, MSG_TERMS_REQUIRED, MSG_USER_TYPE_REQUIRED,
};
use crate::models::{LoginPayload, RegisterPayload, UserType};

/// Snapshot of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: Option<UserType>,
    pub student_class: Option<u8>,
    pub school_id: String,
    pub agreed_to_terms: bool,
}

impl RegistrationInput {
    /// Map the form onto the wire payload.  The class is only sent for
    /// students; `None` when the user type is still unset.
    pub fn to_payload(&self) -> Option<RegisterPayload> {
        let role = self.user_type?;
        Some(RegisterPayload {
            name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role,
            school_id: self.school_id.clone(),
            class: match role {
                UserType::Student => self.student_class,
                UserType::Teacher => None,
            },
        })
    }
}

/// Identifies a registration form field.  Used for DOM ids and for iterating
/// over errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    UserType,
    Terms,
    StudentClass,
    SchoolId,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::FullName,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
        FormField::UserType,
        FormField::Terms,
        FormField::StudentClass,
        FormField::SchoolId,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FormField::FullName => "fullName",
            FormField::Email => "email",
            FormField::Password => "register-password",
            FormField::ConfirmPassword => "confirm-password",
            FormField::UserType => "userType",
            FormField::Terms => "terms",
            FormField::StudentClass => "class",
            FormField::SchoolId => "schoolId",
        }
    }
}

/// One optional error per field.  `None` means the field passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub user_type: Option<&'static str>,
    pub terms: Option<&'static str>,
    pub student_class: Option<&'static str>,
    pub school_id: Option<&'static str>,
}

pub type ValidationResult = FieldErrors;

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::FullName => self.full_name,
            FormField::Email => self.email,
            FormField::Password => self.password,
            FormField::ConfirmPassword => self.confirm_password,
            FormField::UserType => self.user_type,
            FormField::Terms => self.terms,
            FormField::StudentClass => self.student_class,
            FormField::SchoolId => self.school_id,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        FormField::ALL
            .iter()
            .filter_map(move |field| self.get(*field).map(|msg| (*field, msg)))
    }

    pub fn error_count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }
}

/// Validate a registration snapshot.  Pure; all rules are reported together.
pub fn validate_registration(input: &RegistrationInput) -> ValidationResult {
    let mut errors = FieldErrors::default();

    if input.full_name.trim().is_empty() {
        errors.full_name = Some(MSG_FULL_NAME_REQUIRED);
    }

    errors.email = email_error(&input.email);

    if input.password.is_empty() {
        errors.password = Some(MSG_PASSWORD_REQUIRED);
    }

    // Checked even when the password itself is missing.
    if input.password != input.confirm_password {
        errors.confirm_password = Some(MSG_PASSWORD_MISMATCH);
    }

    if input.user_type.is_none() {
        errors.user_type = Some(MSG_USER_TYPE_REQUIRED);
    }

    if !input.agreed_to_terms {
        errors.terms = Some(MSG_TERMS_REQUIRED);
    }

    if input.user_type == Some(UserType::Student) && !is_valid_class(input.student_class) {
        errors.student_class = Some(MSG_CLASS_REQUIRED);
    }

    if input.school_id.trim().is_empty() {
        errors.school_id = Some(MSG_SCHOOL_ID_REQUIRED);
    }

    errors
}

fn is_valid_class(class: Option<u8>) -> bool {
    matches!(class, Some(c) if (MIN_STUDENT_CLASS..=MAX_STUDENT_CLASS).contains(&c))
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some(MSG_EMAIL_REQUIRED)
    } else if !looks_like_email(email) {
        Some(MSG_EMAIL_INVALID)
    } else {
        None
    }
}

/// Unanchored `\S+@\S+\.\S+`: some whitespace-free run must contain a
/// non-empty local part, an `@`, a non-empty domain label, a `.` and a
/// non-empty tail.
pub fn looks_like_email(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        let chars: Vec<char> = token.chars().collect();
        // The earliest usable `@` leaves the most room for the domain.
        let at = match chars.iter().skip(1).position(|c| *c == '@') {
            Some(pos) => pos + 1,
            None => return false,
        };
        let last = chars.len().saturating_sub(1);
        chars
            .iter()
            .enumerate()
            .any(|(idx, c)| *c == '.' && idx >= at + 2 && idx < last)
    })
}

/// Snapshot of the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl LoginInput {
    pub fn to_payload(&self) -> LoginPayload {
        LoginPayload {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(input: &LoginInput) -> LoginErrors {
    LoginErrors {
        email: email_error(&input.email),
        password: input
            .password
            .is_empty()
            .then_some(MSG_PASSWORD_REQUIRED),
    }
}
