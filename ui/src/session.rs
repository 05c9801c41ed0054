//! Persistence of the session token issued on login or sign up.
//!
//! The rest of the application decides whether the user is signed in by
//! looking for [`AUTH_TOKEN_KEY`] in browser storage, so the key is fixed.

use std::cell::RefCell;
use std::rc::Rc;

pub const AUTH_TOKEN_KEY: &str = "auth-token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Browser storage is not available.")]
    Unavailable,
    #[error("Could not save your session: {0}")]
    Storage(String),
}

/// Get/set/clear access to the stored session token.
pub trait SessionStore {
    fn token(&self) -> Result<Option<String>, SessionError>;
    fn set_token(&self, token: &str) -> Result<(), SessionError>;
    fn clear_token(&self) -> Result<(), SessionError>;
}

/// Session token kept in `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or(SessionError::Unavailable)?
            .local_storage()
            .map_err(|e| SessionError::Storage(format!("{e:?}")))?
            .ok_or(SessionError::Unavailable)
    }
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Result<Option<String>, SessionError> {
        Self::storage()?
            .get_item(AUTH_TOKEN_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(AUTH_TOKEN_KEY)
            .map_err(|e| SessionError::Storage(format!("{e:?}")))
    }
}

/// In-memory session for tests and non-browser targets. Clones share the
/// same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    token: Rc<RefCell<Option<String>>>,
}

impl SessionStore for MemorySession {
    fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.borrow().clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        self.token.borrow_mut().take();
        Ok(())
    }
}
