// src/command_executors.rs
//
// Runs the side-effects requested by `update`.  Network commands spawn a
// task on the browser event loop and feed their result back as a message.
//
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use crate::messages::{Command, Message};
use crate::network::ApiClient;
use crate::router::Route;
use crate::state::AppHandle;
use crate::{toast, views};

pub fn execute(handle: &AppHandle, cmd: Command) {
    match cmd {
        Command::Render => {
            if let Err(e) = handle.with_state(views::render) {
                crate::error_log!("Render failed: {:?}", e);
            }
        }
        Command::Navigate(route) => navigate(handle, route),
        Command::Notify(notification) => toast::show(&notification.message, notification.kind),
        Command::CheckSession { request_id } => {
            let handle = handle.clone();
            spawn_local(async move {
                let result = ApiClient::current_session().await;
                handle.dispatch(Message::SessionResolved { request_id, result });
            });
        }
        Command::SendRegistration {
            request_id,
            payload,
        } => {
            let handle = handle.clone();
            spawn_local(async move {
                let result = ApiClient::register(&payload).await;
                handle.dispatch(Message::RegistrationCompleted { request_id, result });
            });
        }
        Command::SendLogin {
            request_id,
            payload,
        } => {
            let handle = handle.clone();
            spawn_local(async move {
                let result = ApiClient::login(&payload).await;
                handle.dispatch(Message::LoginCompleted { request_id, result });
            });
        }
        Command::SendLogout => {
            let handle = handle.clone();
            spawn_local(async move {
                // The local session ends either way.
                if let Err(e) = ApiClient::logout().await {
                    crate::warn_log!("Logout request failed: {}", e);
                }
                handle.dispatch(Message::LoggedOut);
            });
        }
        Command::FetchSubjects { request_id } => {
            let handle = handle.clone();
            spawn_local(async move {
                let result = ApiClient::my_subjects().await;
                handle.dispatch(Message::SubjectsLoaded { request_id, result });
            });
        }
    }
}

/// Push a history entry unless the address bar already shows `route`, then
/// switch pages.
fn navigate(handle: &AppHandle, route: Route) {
    if let Some(window) = web_sys::window() {
        let current = window.location().pathname().unwrap_or_default();
        if Route::from_path(&current) != route {
            let pushed = window
                .history()
                .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(route.path())));
            if let Err(e) = pushed {
                crate::error_log!("Failed to push history for {}: {:?}", route.path(), e);
            }
        }
    }
    handle.dispatch(Message::RouteChanged(route));
}
