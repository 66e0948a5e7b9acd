//! User roster actions (admin only).

use payloads::{requests, responses};
use yewdux::prelude::*;

use crate::contexts::toast::ToastHandle;
use crate::state::State;
use crate::{get_api_client, lifecycle};

/// Replace the roster with the server's list.
pub async fn fetch_all(dispatch: Dispatch<State>) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.users,
        "Failed to fetch users",
        || async move { client.list_users().await },
        |state, response: responses::Users| {
            state.users.data = response.users;
        },
    )
    .await;
}

/// Create another admin account. The avatar travels as a multipart file
/// part.
pub async fn add_new_admin(
    dispatch: Dispatch<State>,
    toast: ToastHandle,
    details: requests::AddNewAdmin,
) {
    let client = get_api_client();
    let result = lifecycle::run(
        &dispatch,
        |state| &mut state.users,
        "Failed to add new admin",
        || async move { client.add_new_admin(&details).await },
        |state, response: responses::SuccessMessage| {
            state.users.message = Some(response.message);
        },
    )
    .await;

    if let Ok(response) = result {
        toast.success(response.message);
        dispatch.reduce_mut(|state| state.popups.add_admin = false);
    }
}

/// Clear the slice's transient error/message once shown.
pub fn reset(dispatch: &Dispatch<State>) {
    dispatch.reduce_mut(|state| state.users.reset());
}
