// Re-export network modules
pub mod api_client;
pub mod config;
pub mod error;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use error::ApiError;

use config::{ApiConfig, JsApiConfig};
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn store_config(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// Initialize the API configuration from the build environment.  Called once
/// during start-up unless the host page already provided a URL.
pub fn init_api_config() {
    let already_set = match API_CONFIG.read() {
        Ok(guard) => guard.is_some(),
        Err(poisoned) => poisoned.into_inner().is_some(),
    };
    if !already_set {
        let config = ApiConfig::new();
        crate::debug_log!("API base URL: {}", config.base_url());
        store_config(config);
    }
}

/// Initialize the API configuration from JS.  Accepts either a URL string or
/// an object `{ apiBaseUrl: "..." }`.
#[wasm_bindgen]
pub fn init_api_config_js(config: JsValue) -> Result<(), JsValue> {
    let url = match config.as_string() {
        Some(url) => url,
        None => {
            let parsed: JsApiConfig = serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid API config: {}", e)))?;
            parsed.api_base_url
        }
    };
    crate::debug_log!("Initializing API config from JS: {}", url);
    store_config(ApiConfig::from_url(&url));
    Ok(())
}

/// Absolute URL for an API path.
pub(crate) fn api_url(path: &str) -> String {
    let guard = match API_CONFIG.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    match guard.as_ref() {
        Some(cfg) => cfg.url(path),
        None => ApiConfig::default().url(path),
    }
}
