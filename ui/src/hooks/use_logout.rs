use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::state::State;
use crate::{Route, actions};

/// Callback that ends the session and returns to the login page.
#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let navigator = use_navigator().unwrap();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();

        yew::platform::spawn_local(async move {
            actions::auth::logout(dispatch).await;
            navigator.push(&Route::Login);
        });
    })
}
