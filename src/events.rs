//! Delegated DOM listeners.
//!
//! Pages are rebuilt on every render, so listeners live on the `#app` root and
//! are installed once.  Each event is resolved to a [`Message`] by looking at
//! the target's id, its `data-action` or its `data-route`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::components::{login_form, register_form};
use crate::constants::{ID_LOGIN_FORM, ID_REGISTER_FORM};
use crate::messages::{AuthTab, Message};
use crate::pages::login::{ACTION_TAB_LOGIN, ACTION_TAB_REGISTER};
use crate::router::Route;
use crate::state::AppHandle;

pub fn install(handle: &AppHandle, root: &Element) -> Result<(), JsValue> {
    // Text inputs report every keystroke; selects and checkboxes report on
    // change.  Listening to both for every control would double-dispatch.
    for event_name in ["input", "change"] {
        let handle = handle.clone();
        let on_edit = Closure::wrap(Box::new(move |event: Event| {
            if let Some(msg) = edit_message(&event) {
                handle.dispatch(msg);
            }
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback(event_name, on_edit.as_ref().unchecked_ref())?;
        on_edit.forget();
    }

    {
        let handle = handle.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                Some(t) => t,
                None => return,
            };
            let trigger = match target.closest("[data-action],[data-route]") {
                Ok(Some(el)) => el,
                _ => return,
            };
            let msg = if let Some(action) = trigger.get_attribute("data-action") {
                action_message(&action)
            } else {
                trigger
                    .get_attribute("data-route")
                    .map(|path| Message::NavigateTo(Route::from_path(&path)))
            };
            if let Some(msg) = msg {
                event.prevent_default();
                handle.dispatch(msg);
            }
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    {
        let handle = handle.clone();
        let on_submit = Closure::wrap(Box::new(move |event: Event| {
            let form_id = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.id())
                .unwrap_or_default();
            if let Some(msg) = submit_message(&form_id) {
                event.prevent_default();
                handle.dispatch(msg);
            }
        }) as Box<dyn FnMut(_)>);
        root.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
    }

    Ok(())
}

/// Browser back / forward.
pub fn install_popstate(handle: &AppHandle, window: &web_sys::Window) -> Result<(), JsValue> {
    let handle = handle.clone();
    let on_pop = Closure::wrap(Box::new(move |_: Event| {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        handle.dispatch(Message::RouteChanged(Route::from_path(&path)));
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("popstate", on_pop.as_ref().unchecked_ref())?;
    on_pop.forget();
    Ok(())
}

fn edit_message(event: &Event) -> Option<Message> {
    let target = event.target()?;
    let is_change = event.type_() == "change";

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        let is_checkbox = input.type_() == "checkbox";
        if is_checkbox != is_change {
            return None;
        }
        return field_message(&input.id(), &input.value(), input.checked());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        if !is_change {
            return None;
        }
        return field_message(&select.id(), &select.value(), false);
    }
    None
}

/// Route a control's new value to the form that owns the control.
pub fn field_message(id: &str, value: &str, checked: bool) -> Option<Message> {
    if let Some(edit) = login_form::edit_for(id, value) {
        return Some(Message::LoginFieldChanged(edit));
    }
    register_form::edit_for(id, value, checked).map(Message::RegisterFieldChanged)
}

pub fn action_message(action: &str) -> Option<Message> {
    if let Some(edit) = register_form::action_edit(action) {
        return Some(Message::RegisterFieldChanged(edit));
    }
    match action {
        login_form::ACTION_TOGGLE_PASSWORD => Some(Message::LoginFieldChanged(
            crate::messages::LoginEdit::TogglePasswordVisible,
        )),
        ACTION_TAB_LOGIN => Some(Message::AuthTabSelected(AuthTab::Login)),
        ACTION_TAB_REGISTER => Some(Message::AuthTabSelected(AuthTab::Register)),
        "toggle-sidebar" => Some(Message::ToggleSidebar),
        "logout" => Some(Message::LogoutRequested),
        _ => {
            crate::warn_log!("Unknown action '{}'", action);
            None
        }
    }
}

pub fn submit_message(form_id: &str) -> Option<Message> {
    match form_id {
        ID_REGISTER_FORM => Some(Message::SubmitRegistration),
        ID_LOGIN_FORM => Some(Message::SubmitLogin),
        _ => None,
    }
}
