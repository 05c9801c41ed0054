use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials posted to either authentication endpoint.
///
/// `username` is only collected on sign up; when absent it is left out of the
/// JSON body entirely rather than sent as an empty string.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_body_omits_username() {
        let credentials = Credentials {
            username: None,
            email: "alice@example.com".into(),
            password: "hunter2".into(),
        };
        let body = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "email": "alice@example.com",
                "password": "hunter2",
            })
        );
    }

    #[test]
    fn signup_body_keeps_empty_username() {
        let credentials = Credentials {
            username: Some(String::new()),
            email: "bob@example.com".into(),
            password: "pw".into(),
        };
        let body = serde_json::to_value(&credentials).unwrap();
        assert_eq!(body["username"], "");
    }

    #[test]
    fn debug_redacts_password() {
        let credentials = Credentials {
            username: Some("alice".into()),
            email: "alice@example.com".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{credentials:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("alice@example.com"));
    }
}
