use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions;
use crate::state::State;

/// Hook to probe the session cookie once on app startup. A dead or
/// missing session lands in the logged-out state without surfacing an
/// error.
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(actions::auth::fetch_current_user(
            dispatch,
        ));
    });
}
