use yewdux::prelude::*;

#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub enum AuthState {
    /// The session store has not been read yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn,
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn)
    }

    pub fn load_token(&mut self, token: Option<&str>) {
        self.auth_state = match token {
            Some(token) if !token.is_empty() => AuthState::LoggedIn,
            _ => AuthState::LoggedOut,
        };
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_decides_auth_state() {
        let mut state = State::default();
        assert_eq!(state.auth_state, AuthState::Unknown);
        assert!(!state.is_authenticated());

        state.load_token(Some("abc"));
        assert!(state.is_authenticated());

        state.load_token(Some(""));
        assert_eq!(state.auth_state, AuthState::LoggedOut);

        state.load_token(Some("abc"));
        state.logout();
        assert!(!state.is_authenticated());

        state.load_token(None);
        assert_eq!(state.auth_state, AuthState::LoggedOut);
    }
}
