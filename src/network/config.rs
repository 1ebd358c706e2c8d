use serde::Deserialize;

use crate::constants::DEFAULT_API_BASE_URL;

/// API route configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Points at the local development backend.  Used by unit tests and by
    /// builds that were compiled without `API_BASE_URL` and never received a
    /// runtime override from JS.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE_URL)
    }
}

/// Shape accepted by `init_api_config_js` when the host page passes an
/// object instead of a plain string.
#[derive(Debug, Deserialize)]
pub struct JsApiConfig {
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
}

impl ApiConfig {
    /// Create a new ApiConfig from the compile-time API_BASE_URL environment
    /// variable, falling back to the local backend.
    pub fn new() -> Self {
        match option_env!("API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::from_url(url),
            _ => Self::default(),
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a full URL for an API path such as `/api/auth/register`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
