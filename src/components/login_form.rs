use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::ID_LOGIN_FORM;
use crate::dom_utils::el;
use crate::messages::LoginEdit;
use crate::state::LoginFormState;

use super::fields::{disable_controls, password_field, submit_button, text_field};

pub const ID_EMAIL: &str = "login-email";
pub const ID_PASSWORD: &str = "login-password";
pub const ACTION_TOGGLE_PASSWORD: &str = "toggle-login-password";

pub fn render(document: &Document, form: &LoginFormState) -> Result<Element, JsValue> {
    let root = el(document, "form", "auth-form")?;
    root.set_id(ID_LOGIN_FORM);
    root.set_attribute("novalidate", "")?;

    let email = text_field(
        document,
        ID_EMAIL,
        "Email",
        "email",
        &form.input.email,
        form.errors.email,
    )?;
    root.append_child(&email)?;
    let password = password_field(
        document,
        ID_PASSWORD,
        "Password",
        &form.input.password,
        form.show_password,
        ACTION_TOGGLE_PASSWORD,
        form.errors.password,
    )?;
    root.append_child(&password)?;
    let submit = submit_button(document, "Sign in", "Signing in...", form.busy)?;
    root.append_child(&submit)?;
    if form.busy {
        disable_controls(&root)?;
    }

    Ok(root)
}

pub fn edit_for(id: &str, value: &str) -> Option<LoginEdit> {
    match id {
        ID_EMAIL => Some(LoginEdit::Email(value.to_string())),
        ID_PASSWORD => Some(LoginEdit::Password(value.to_string())),
        _ => None,
    }
}
