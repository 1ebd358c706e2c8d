//! Authentication page: login and registration behind two tabs.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::components::{login_form, register_form};
use crate::constants::{CSS_CARD, CSS_PAGE};
use crate::dom_utils::{append, append_text, class_with, el};
use crate::messages::AuthTab;
use crate::state::AppState;

pub const ACTION_TAB_LOGIN: &str = "tab-login";
pub const ACTION_TAB_REGISTER: &str = "tab-register";

pub fn render(document: &Document, state: &AppState) -> Result<Element, JsValue> {
    let page = el(document, "main", &format!("{} auth-page", CSS_PAGE))?;
    let card = append(&page, document, "div", &format!("{} auth-card", CSS_CARD))?;

    append_text(&card, document, "h1", "auth-title", "School Portal")?;
    append_text(
        &card,
        document,
        "p",
        "auth-subtitle",
        match state.auth_tab {
            AuthTab::Login => "Sign in to continue",
            AuthTab::Register => "Create your account",
        },
    )?;

    let tabs = append(&card, document, "div", "tabs")?;
    tabs.set_attribute("role", "tablist")?;
    for (tab, label, action) in [
        (AuthTab::Login, "Login", ACTION_TAB_LOGIN),
        (AuthTab::Register, "Register", ACTION_TAB_REGISTER),
    ] {
        let active = state.auth_tab == tab;
        let button = append_text(&tabs, document, "button", &class_with("tab-button", "active", active), label)?;
        button.set_attribute("type", "button")?;
        button.set_attribute("role", "tab")?;
        button.set_attribute("aria-selected", if active { "true" } else { "false" })?;
        button.set_attribute("data-action", action)?;
    }

    let form = match state.auth_tab {
        AuthTab::Login => login_form::render(document, &state.login)?,
        AuthTab::Register => register_form::render(document, &state.register)?,
    };
    card.append_child(&form)?;

    Ok(page)
}
