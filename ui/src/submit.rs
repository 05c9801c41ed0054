//! Submitting the form and applying the result.
//!
//! Each submission goes `Idle -> Sending -> Succeeded | Failed`. On success
//! the token is stored and the page is replaced with the storefront root; on
//! any failure the user gets a blocking alert and nothing is stored.

use payloads::{APIClient, AuthEndpoint, AuthOutcome, ClientError, Credentials};

use crate::form::{FormState, Mode};
use crate::session::SessionStore;

/// Where a freshly authenticated user lands.
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    /// Holds the message that was shown to the user.
    Failed(String),
}

impl SubmitStatus {
    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Something that can exchange credentials for a session token.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn authenticate(
        &self,
        endpoint: AuthEndpoint,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ClientError>;
}

impl AuthService for APIClient {
    async fn authenticate(
        &self,
        endpoint: AuthEndpoint,
        credentials: &Credentials,
    ) -> Result<AuthOutcome, ClientError> {
        APIClient::authenticate(self, endpoint, credentials).await
    }
}

/// Page-level side effects of a submission.
pub trait Browser {
    /// Show a blocking notice.
    fn alert(&self, message: &str);
    /// Navigate away, replacing the current history entry.
    fn replace_location(&self, path: &str);
}

/// [`Browser`] backed by the real `window`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WebBrowser;

impl Browser for WebBrowser {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(message, "no window to alert");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::error!("alert failed: {e:?}");
        }
    }

    fn replace_location(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(path, "no window to navigate");
            return;
        };
        if let Err(e) = window.location().replace(path) {
            tracing::error!("navigation to {path} failed: {e:?}");
        }
    }
}

/// Send the form for `mode` and apply the outcome. Returns the terminal
/// status, never `Idle` or `Sending`.
pub async fn submit(
    client: &impl AuthService,
    session: &impl SessionStore,
    browser: &impl Browser,
    mode: Mode,
    form: &FormState,
) -> SubmitStatus {
    let credentials = form.credentials(mode);
    tracing::debug!(%mode, email = %credentials.email, "submitting credentials");

    match client.authenticate(mode.endpoint(), &credentials).await {
        Ok(AuthOutcome::Authenticated { token }) => {
            if let Err(e) = session.set_token(&token) {
                tracing::error!("storing session token failed: {e}");
                return fail(browser, e.to_string());
            }
            tracing::info!(%mode, "authenticated");
            browser.replace_location(HOME_PATH);
            SubmitStatus::Succeeded
        }
        Ok(AuthOutcome::Rejected { errors }) => {
            tracing::info!(%mode, "credentials rejected");
            fail(browser, errors)
        }
        Err(e) => {
            tracing::error!("{mode} request failed: {e}");
            fail(browser, e.to_string())
        }
    }
}

fn fail(browser: &impl Browser, message: String) -> SubmitStatus {
    browser.alert(&message);
    SubmitStatus::Failed(message)
}
