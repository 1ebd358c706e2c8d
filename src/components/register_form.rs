//! Registration form: rendering and the mapping from DOM edits back to
//! [`RegisterEdit`]s.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::auth::FormField;
use crate::constants::{ID_REGISTER_FORM, MAX_STUDENT_CLASS, MIN_STUDENT_CLASS};
use crate::dom_utils::{el, set_visible};
use crate::messages::RegisterEdit;
use crate::models::UserType;
use crate::state::RegisterFormState;

use super::fields::{
    checkbox_field, disable_controls, password_field, select_field, submit_button, text_field,
};

pub const ACTION_TOGGLE_PASSWORD: &str = "toggle-register-password";
pub const ACTION_TOGGLE_CONFIRM: &str = "toggle-confirm-password";

pub fn render(document: &Document, form: &RegisterFormState) -> Result<Element, JsValue> {
    let input = &form.input;
    let errors = &form.errors;

    let root = el(document, "form", "auth-form")?;
    root.set_id(ID_REGISTER_FORM);
    root.set_attribute("novalidate", "")?;

    let full_name = text_field(
        document,
        FormField::FullName.id(),
        "Full name",
        "text",
        &input.full_name,
        errors.full_name,
    )?;
    let email = text_field(
        document,
        FormField::Email.id(),
        "Email",
        "email",
        &input.email,
        errors.email,
    )?;
    let password = password_field(
        document,
        FormField::Password.id(),
        "Password",
        &input.password,
        form.show_password,
        ACTION_TOGGLE_PASSWORD,
        errors.password,
    )?;
    let confirm = password_field(
        document,
        FormField::ConfirmPassword.id(),
        "Confirm password",
        &input.confirm_password,
        form.show_confirm_password,
        ACTION_TOGGLE_CONFIRM,
        errors.confirm_password,
    )?;

    let user_types = [UserType::Student, UserType::Teacher]
        .iter()
        .map(|t| (t.as_str().to_string(), user_type_label(*t).to_string()))
        .collect::<Vec<_>>();
    let user_type = select_field(
        document,
        FormField::UserType.id(),
        "I am a",
        "Select user type",
        &user_types,
        input.user_type.map(|t| t.as_str()).unwrap_or(""),
        errors.user_type,
    )?;

    let selected_class = input.student_class.map(|c| c.to_string()).unwrap_or_default();
    let class_row = select_field(
        document,
        FormField::StudentClass.id(),
        "Class",
        "Select class",
        &class_options(),
        &selected_class,
        errors.student_class,
    )?;
    set_visible(&class_row, input.user_type == Some(UserType::Student));

    let school_id = text_field(
        document,
        FormField::SchoolId.id(),
        "School ID",
        "text",
        &input.school_id,
        errors.school_id,
    )?;
    let terms = checkbox_field(
        document,
        FormField::Terms.id(),
        "I agree to the terms and conditions",
        input.agreed_to_terms,
        errors.terms,
    )?;
    let submit = submit_button(document, "Create account", "Creating account...", form.busy)?;

    for row in [
        &full_name, &email, &password, &confirm, &user_type, &class_row, &school_id, &terms, &submit,
    ] {
        root.append_child(row)?;
    }
    if form.busy {
        disable_controls(&root)?;
    }

    Ok(root)
}

fn user_type_label(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Student => "Student",
        UserType::Teacher => "Teacher",
    }
}

fn class_options() -> Vec<(String, String)> {
    (MIN_STUDENT_CLASS..=MAX_STUDENT_CLASS)
        .map(|c| (c.to_string(), format!("Class {}", c)))
        .collect()
}

/// Translate a change on the control with `id` into a form edit.  Unknown ids
/// are not part of this form.
pub fn edit_for(id: &str, value: &str, checked: bool) -> Option<RegisterEdit> {
    let field = FormField::ALL.iter().find(|f| f.id() == id)?;
    let edit = match field {
        FormField::FullName => RegisterEdit::FullName(value.to_string()),
        FormField::Email => RegisterEdit::Email(value.to_string()),
        FormField::Password => RegisterEdit::Password(value.to_string()),
        FormField::ConfirmPassword => RegisterEdit::ConfirmPassword(value.to_string()),
        FormField::UserType => RegisterEdit::UserType(UserType::from_form_value(value)),
        FormField::StudentClass => RegisterEdit::StudentClass(value.trim().parse().ok()),
        FormField::SchoolId => RegisterEdit::SchoolId(value.to_string()),
        FormField::Terms => RegisterEdit::AgreedToTerms(checked),
    };
    Some(edit)
}

/// Button actions owned by this form.
pub fn action_edit(action: &str) -> Option<RegisterEdit> {
    match action {
        ACTION_TOGGLE_PASSWORD => Some(RegisterEdit::TogglePasswordVisible),
        ACTION_TOGGLE_CONFIRM => Some(RegisterEdit::ToggleConfirmVisible),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_field_id() {
        assert_eq!(
            edit_for("fullName", "Ada", false),
            Some(RegisterEdit::FullName("Ada".to_string()))
        );
        assert_eq!(
            edit_for("confirm-password", "pw", false),
            Some(RegisterEdit::ConfirmPassword("pw".to_string()))
        );
        assert_eq!(
            edit_for("userType", "teacher", false),
            Some(RegisterEdit::UserType(Some(UserType::Teacher)))
        );
        assert_eq!(
            edit_for("userType", "", false),
            Some(RegisterEdit::UserType(None))
        );
        assert_eq!(
            edit_for("terms", "on", true),
            Some(RegisterEdit::AgreedToTerms(true))
        );
        assert_eq!(edit_for("login-email", "x", false), None);
    }

    #[test]
    fn class_select_parses_or_clears() {
        assert_eq!(
            edit_for("class", "7", false),
            Some(RegisterEdit::StudentClass(Some(7)))
        );
        assert_eq!(
            edit_for("class", "", false),
            Some(RegisterEdit::StudentClass(None))
        );
    }

    #[test]
    fn offers_classes_one_to_twelve() {
        let options = class_options();
        assert_eq!(options.len(), 12);
        assert_eq!(options[0], ("1".to_string(), "Class 1".to_string()));
        assert_eq!(options[11].0, "12");
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::super::*;
        use crate::dom_utils::document;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn busy_form_disables_submit() {
            let document = document().unwrap();
            let form = RegisterFormState {
                busy: true,
                ..RegisterFormState::default()
            };
            let node = render(&document, &form).unwrap();
            let button = node.query_selector("button[type=submit]").unwrap().unwrap();
            assert!(button.has_attribute("disabled"));
            assert!(button.query_selector(".spinner").unwrap().is_some());
        }

        #[wasm_bindgen_test]
        fn busy_form_locks_every_control() {
            let document = document().unwrap();
            let form = RegisterFormState {
                busy: true,
                ..RegisterFormState::default()
            };
            let node = render(&document, &form).unwrap();
            for selector in ["#fullName", "#register-password", "#userType", "#class", "#terms"] {
                let control = node.query_selector(selector).unwrap().unwrap();
                assert!(control.has_attribute("disabled"), "{} editable while busy", selector);
            }
            let toggle = node.query_selector("[data-action=toggle-register-password]").unwrap().unwrap();
            assert!(toggle.has_attribute("disabled"));
        }

        #[wasm_bindgen_test]
        fn idle_form_is_editable() {
            let document = document().unwrap();
            let node = render(&document, &RegisterFormState::default()).unwrap();
            let name = node.query_selector("#fullName").unwrap().unwrap();
            assert!(!name.has_attribute("disabled"));
        }

        #[wasm_bindgen_test]
        fn errors_render_inline() {
            let document = document().unwrap();
            let mut form = RegisterFormState::default();
            form.errors = crate::auth::validate_registration(&form.input);
            let node = render(&document, &form).unwrap();
            let error = node.query_selector("#fullName-error").unwrap().unwrap();
            assert_eq!(error.text_content().unwrap(), "Full name is required");
        }
    }
}
