use wasm_bindgen::prelude::*;

mod macros;

mod auth;
mod command_executors;
mod components;
mod constants;
mod dom_utils;
mod events;
mod messages;
mod mock_data;
mod models;
mod network;
mod pages;
mod reducers;
mod router;
mod state;
mod toast;
mod update;
mod views;

use messages::Message;
use router::Route;
use state::{AppHandle, AppState};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    network::init_api_config();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    let handle = AppHandle::new(AppState::new());

    let root = views::app_root(&document)?;
    events::install(&handle, &root)?;
    events::install_popstate(&handle, &window)?;

    let path = window.location().pathname().unwrap_or_default();
    handle.dispatch(Message::RouteChanged(Route::from_path(&path)));
    handle.dispatch(Message::SessionCheckRequested);

    Ok(())
}
