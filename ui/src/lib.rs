use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod form;
mod hooks;
pub mod logs;
mod pages;
pub mod session;
pub mod state;
pub mod submit;

pub use state::{AuthState, State};

use pages::{HomePage, LoginPage, NotFoundPage};

/// Used when no `BACKEND_URL` is given at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

// Global API client - configurable via environment at build time
pub fn get_api_client() -> APIClient {
    APIClient::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

#[function_component]
pub fn App() -> Html {
    hooks::use_session();

    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
