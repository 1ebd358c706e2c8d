// src/models.rs
//
// Wire-level data exchanged with the auth backend plus the role enums shared
// by the session, the router and the forms.
//
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The account kinds a visitor can register as.  Admin accounts are created
/// by the backend, never through the public form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Teacher,
}

impl UserType {
    /// Parse the `<select>` value.  The empty placeholder option maps to `None`.
    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "student" => Some(UserType::Student),
            "teacher" => Some(UserType::Teacher),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Teacher => "teacher",
        }
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserType,
    #[serde(rename = "schoolId")]
    pub school_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl RegisterResponse {
    /// Any 2xx reply counts as a completed registration, so a body that is
    /// empty or not the expected JSON only loses the message.
    pub fn from_body(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|e| {
            crate::debug_log!("Registration reply without a readable body: {}", e);
            Self::default()
        })
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Identity returned by the login endpoint and by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionInfo {
    pub role: UserRole,
    #[serde(rename = "schoolId", default)]
    pub school_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub session: SessionInfo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subjects: Vec<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_payload_omits_class_for_teachers() {
        let payload = RegisterPayload {
            name: "Ada".to_string(),
            email: "ada@school.test".to_string(),
            password: "secret".to_string(),
            role: UserType::Teacher,
            school_id: "SCH-1".to_string(),
            class: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "email": "ada@school.test",
                "password": "secret",
                "role": "teacher",
                "schoolId": "SCH-1"
            })
        );
    }

    #[test]
    fn register_payload_carries_class_for_students() {
        let payload = RegisterPayload {
            name: "Bo".to_string(),
            email: "bo@school.test".to_string(),
            password: "pw".to_string(),
            role: UserType::Student,
            school_id: "SCH-2".to_string(),
            class: Some(7),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["role"], "student");
        assert_eq!(value["class"], 7);
    }

    #[test]
    fn login_response_flattens_session() {
        let resp: LoginResponse = serde_json::from_value(json!({
            "message": "Logged in",
            "role": "admin",
            "schoolId": "SCH-9"
        }))
        .unwrap();
        assert_eq!(resp.message.as_deref(), Some("Logged in"));
        assert_eq!(resp.session.role, UserRole::Admin);
        assert_eq!(resp.session.school_id.as_deref(), Some("SCH-9"));
    }

    #[test]
    fn subjects_default_to_empty_list() {
        let resp: SubjectsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.subjects.is_empty());
        let resp: SubjectsResponse = serde_json::from_str(r#"{"subjects":null}"#).unwrap();
        assert!(resp.subjects.is_empty());
        let resp: SubjectsResponse = serde_json::from_str(r#"{"subjects":["Maths"]}"#).unwrap();
        assert_eq!(resp.subjects, vec!["Maths".to_string()]);
    }

    #[test]
    fn register_reply_message_is_optional() {
        assert_eq!(
            RegisterResponse::from_body(r#"{"message":"Account created"}"#).message.as_deref(),
            Some("Account created")
        );
        assert_eq!(RegisterResponse::from_body(r#"{"message":null}"#).message, None);
        assert_eq!(RegisterResponse::from_body("{}").message, None);
        assert_eq!(RegisterResponse::from_body("").message, None);
        assert_eq!(RegisterResponse::from_body("Created").message, None);
        assert_eq!(RegisterResponse::from_body("[1,2]").message, None);
    }

    #[test]
    fn user_type_from_form_value() {
        assert_eq!(UserType::from_form_value("student"), Some(UserType::Student));
        assert_eq!(UserType::from_form_value("teacher"), Some(UserType::Teacher));
        assert_eq!(UserType::from_form_value(""), None);
        assert_eq!(UserType::from_form_value("admin"), None);
    }
}
