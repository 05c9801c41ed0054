use serde::{Deserialize, Serialize};

/// Shown when the backend rejects a request without saying why.
pub const DEFAULT_AUTH_ERROR: &str = "Authentication failed";

/// Body returned by both `/login` and `/signup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

/// What an authentication attempt amounted to, once the response has been
/// checked for consistency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The backend issued a session token.
    Authenticated { token: String },
    /// The backend refused the credentials; the message is shown verbatim.
    Rejected { errors: String },
}

impl AuthResponse {
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            errors: None,
        }
    }

    pub fn rejected(errors: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            errors: Some(errors.into()),
        }
    }

    /// Interpret the response. Returns `None` when the backend claims success
    /// but did not send a token.
    pub fn outcome(self) -> Option<AuthOutcome> {
        if self.success {
            self.token.map(|token| AuthOutcome::Authenticated { token })
        } else {
            Some(AuthOutcome::Rejected {
                errors: self
                    .errors
                    .unwrap_or_else(|| DEFAULT_AUTH_ERROR.to_string()),
            })
        }
    }
}
