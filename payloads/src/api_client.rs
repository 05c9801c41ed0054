use crate::{AuthOutcome, AuthResponse, Credentials};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// The two authentication endpoints. They accept the same body and return
/// the same response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthEndpoint {
    Login,
    Signup,
}

impl AuthEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }
}

/// An API client for interfacing with the authentication backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Post credentials to one of the authentication endpoints.
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn authenticate(
        &self,
        endpoint: AuthEndpoint,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ClientError> {
        let response = self.post(endpoint.path(), credentials).await?;
        auth_body(response).await
    }

    pub async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ClientError> {
        self.authenticate(AuthEndpoint::Login, credentials).await
    }

    pub async fn signup(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ClientError> {
        self.authenticate(AuthEndpoint::Signup, credentials).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Server reported success but did not issue a session token.")]
    MissingToken,
}

/// Interpret an authentication response.
///
/// Backends commonly answer a refused login with a 4xx status and an
/// `AuthResponse` body, so the body is tried first whatever the status.
pub async fn auth_body(
    response: reqwest::Response,
) -> Result<AuthOutcome, ClientError> {
    let status = response.status();
    let text = response.text().await?;
    match serde_json::from_str::<AuthResponse>(&text) {
        Ok(body) => body.outcome().ok_or(ClientError::MissingToken),
        Err(_) if !status.is_success() => {
            Err(ClientError::APIError(status, text))
        }
        Err(e) => Err(ClientError::Decode(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slash() {
        let client = APIClient::new("http://localhost:5000/");
        assert_eq!(client.format_url("login"), "http://localhost:5000/login");
        let client = APIClient::new("http://localhost:5000");
        assert_eq!(
            client.format_url(AuthEndpoint::Signup.path()),
            "http://localhost:5000/signup"
        );
    }

    #[test]
    fn api_error_displays_response_text() {
        let e = ClientError::APIError(
            StatusCode::BAD_GATEWAY,
            "upstream down".into(),
        );
        assert_eq!(e.to_string(), "upstream down");
    }
}
