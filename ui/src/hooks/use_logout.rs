use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::session::{LocalStorageSession, SessionStore};
use crate::{Route, State};

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator();

    Callback::from(move |_| {
        if let Err(e) = LocalStorageSession.clear_token() {
            tracing::error!("clearing session token failed: {e}");
        }

        dispatch.reduce_mut(|state| state.logout());

        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    })
}
