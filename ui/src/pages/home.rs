use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::Route;
use crate::hooks::use_logout;
use crate::state::{AuthState, State};

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    let body = match state.auth_state {
        AuthState::Unknown => html! {
            <p class="text-neutral-600 dark:text-neutral-400">{"Loading..."}</p>
        },
        AuthState::LoggedIn => html! {
            <>
                <p class="mb-4">{"You are signed in."}</p>
                <button
                    onclick={logout}
                    class="py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800"
                >
                    {"Log out"}
                </button>
            </>
        },
        AuthState::LoggedOut => html! {
            <p>
                <Link<Route> to={Route::Login} classes="font-medium underline">
                    {"Login or create an account"}
                </Link<Route>>
            </p>
        },
    };

    html! {
        <div class="text-center space-y-4">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">{"Storefront"}</h1>
            {body}
        </div>
    }
}
