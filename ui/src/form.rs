//! Form state for the login / sign up screen.

use payloads::{AuthEndpoint, Credentials};
use std::rc::Rc;
use yew::Reducible;

use crate::submit::SubmitStatus;

/// Which variant of the form is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum Mode {
    #[default]
    #[display("Login")]
    Login,
    #[display("Sign Up")]
    SignUp,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::SignUp,
            Self::SignUp => Self::Login,
        }
    }

    pub fn endpoint(self) -> AuthEndpoint {
        match self {
            Self::Login => AuthEndpoint::Login,
            Self::SignUp => AuthEndpoint::Signup,
        }
    }

    /// The username field is only collected when creating an account.
    pub fn shows_username(self) -> bool {
        matches!(self, Self::SignUp)
    }
}

/// A named input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(Self::Username),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Merge a change event from the input called `name`. Returns false and
    /// leaves the state untouched when no field has that name.
    pub fn apply_change(&mut self, name: &str, value: String) -> bool {
        match Field::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => {
                tracing::warn!(name, "change event for unknown form field");
                false
            }
        }
    }

    /// Build the request body for `mode`. Login never sends a username, even
    /// if one was typed before switching modes.
    pub fn credentials(&self, mode: Mode) -> Credentials {
        Credentials {
            username: mode.shows_username().then(|| self.username.clone()),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Everything the form component tracks. Updated only through
/// [`FormAction`], so each event applies to the latest state rather than to
/// whatever was current when the component last rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    pub mode: Mode,
    pub form: FormState,
    pub status: SubmitStatus,
    /// Bumped each time a submission is accepted.
    pub submissions: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Change { name: String, value: String },
    ToggleMode,
    /// Ignored while a request is already in flight.
    Submit,
    Finished(SubmitStatus),
}

impl FormModel {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Change { name, value } => {
                if !next.form.apply_change(&name, value) {
                    return self;
                }
            }
            FormAction::ToggleMode => next.mode = next.mode.toggled(),
            FormAction::Submit => {
                if next.status.is_sending() {
                    return self;
                }
                next.status = SubmitStatus::Sending;
                next.submissions += 1;
            }
            FormAction::Finished(status) => next.status = status,
        }
        Rc::new(next)
    }
}
