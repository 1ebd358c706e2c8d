use std::fmt;

use crate::models::ApiErrorBody;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    Network(String),
    /// Non-2xx response.
    Server {
        status: u16,
        status_text: String,
        message: Option<String>,
    },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Build a `Server` error from the raw response body.  The backend puts a
    /// human readable `message` into JSON error bodies; anything else is
    /// ignored.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Server {
            status,
            status_text: status_text.to_string(),
            message,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a toast: the server's own message when it sent one,
    /// otherwise the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::Server {
                status,
                status_text,
                ..
            } => write!(f, "Error {}: {}", status, status_text),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_extracted() {
        let err = ApiError::from_response(409, "Conflict", r#"{"message":"Email already used"}"#);
        assert_eq!(err.server_message(), Some("Email already used"));
        assert_eq!(err.user_message("Registration failed"), "Email already used");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn non_json_body_falls_back() {
        let err = ApiError::from_response(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
    }

    #[test]
    fn blank_message_is_ignored() {
        let err = ApiError::from_response(400, "Bad Request", r#"{"message":"  "}"#);
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn network_errors_use_fallback() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
        assert_eq!(err.to_string(), "Failed to fetch");
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn unauthorized_statuses() {
        assert!(ApiError::from_response(401, "Unauthorized", "").is_unauthorized());
        assert!(ApiError::from_response(403, "Forbidden", "").is_unauthorized());
        assert!(!ApiError::from_response(404, "Not Found", "").is_unauthorized());
    }
}
