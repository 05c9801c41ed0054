use yew::prelude::*;
use yewdux::prelude::*;

use crate::State;
use crate::session::{LocalStorageSession, SessionStore};

/// Hook to read the stored session token once on startup
#[hook]
pub fn use_session() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        let token = match LocalStorageSession.token() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("could not read session token: {e}");
                None
            }
        };
        dispatch.reduce_mut(|state| state.load_token(token.as_deref()));
    });
}
