use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::components::AuthForm;
use crate::form::Mode;
use crate::state::State;

/// Query string of `/login`. A bare `?signup` key opens the form in sign up
/// mode.
#[derive(Debug, Default, PartialEq, Deserialize)]
struct LoginQuery {
    signup: Option<String>,
}

impl LoginQuery {
    fn mode(&self) -> Mode {
        match self.signup {
            Some(_) => Mode::SignUp,
            None => Mode::Login,
        }
    }
}

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator();
    let (state, _) = use_store::<State>();
    let location = use_location();
    let initial_mode = location
        .and_then(|location| location.query::<LoginQuery>().ok())
        .unwrap_or_default()
        .mode();

    // Redirect to home if already logged in
    {
        let is_authenticated = state.is_authenticated();

        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth && let Some(navigator) = navigator {
                navigator.push(&Route::Home);
            }
        });
    }

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <AuthForm initial_mode={initial_mode} />
        </div>
    }
}
