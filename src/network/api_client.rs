use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::error::ApiError;
use crate::constants::{API_LOGIN, API_LOGOUT, API_MY_SUBJECTS, API_REGISTER, API_SESSION};
use crate::models::{
    LoginPayload, LoginResponse, RegisterPayload, RegisterResponse, SessionInfo, SubjectsResponse,
};

// REST API client for the auth backend
pub struct ApiClient;

impl ApiClient {
    /// POST /api/auth/register: any 2xx answer is a success, whatever its body.
    pub async fn register(payload: &RegisterPayload) -> Result<RegisterResponse, ApiError> {
        let body = Self::encode(payload)?;
        let text = Self::fetch_json(&super::api_url(API_REGISTER), "POST", Some(&body)).await?;
        Ok(RegisterResponse::from_body(&text))
    }

    /// POST /api/auth/login: the backend sets the session cookie.
    pub async fn login(payload: &LoginPayload) -> Result<LoginResponse, ApiError> {
        let body = Self::encode(payload)?;
        let text = Self::fetch_json(&super::api_url(API_LOGIN), "POST", Some(&body)).await?;
        Self::decode(&text)
    }

    /// POST /api/auth/logout: the body of the answer is irrelevant.
    pub async fn logout() -> Result<(), ApiError> {
        Self::fetch_json(&super::api_url(API_LOGOUT), "POST", None)
            .await
            .map(|_| ())
    }

    /// GET /api/auth/me: `Ok(None)` when the cookie session is missing or
    /// expired.
    pub async fn current_session() -> Result<Option<SessionInfo>, ApiError> {
        match Self::fetch_json(&super::api_url(API_SESSION), "GET", None).await {
            Ok(text) => Self::decode(&text).map(Some),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// GET /api/students/subjects/me
    pub async fn my_subjects() -> Result<Vec<String>, ApiError> {
        let text = Self::fetch_json(&super::api_url(API_MY_SUBJECTS), "GET", None).await?;
        Self::decode::<SubjectsResponse>(&text).map(|r| r.subjects)
    }

    fn encode<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
        serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Single fetch with the session cookie attached.  Returns the body text
    /// of a 2xx response; every other outcome becomes an [`ApiError`].
    pub async fn fetch_json(url: &str, method: &str, body: Option<&str>) -> Result<String, ApiError> {
        use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        opts.set_credentials(RequestCredentials::Include);

        let headers = Headers::new().map_err(network_error)?;
        headers
            .append("Content-Type", "application/json")
            .map_err(network_error)?;
        if let Some(data) = body {
            opts.set_body(&JsValue::from_str(data));
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;

        crate::debug_log!("{} {}", method, url);
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        let text = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        if !resp.ok() {
            let err = ApiError::from_response(resp.status(), &resp.status_text(), &text);
            crate::warn_log!("{} {} failed: {}", method, url, err);
            return Err(err);
        }

        Ok(text)
    }
}

/// Turn a rejected JS promise / thrown exception into a network error.  A
/// `TypeError("Failed to fetch")` is the usual shape.
fn network_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}
