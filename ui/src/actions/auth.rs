//! Authentication actions.

use payloads::{requests, responses};
use yewdux::prelude::*;

use crate::state::State;
use crate::{get_api_client, lifecycle};

/// Create an account. The server mails a one-time code; verification
/// happens in [`verify_otp`].
pub async fn register(dispatch: Dispatch<State>, details: requests::Register) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "Registration failed",
        || async move { client.register(&details).await },
        |state, response: responses::SuccessMessage| {
            state.auth.session.message = Some(response.message);
        },
    )
    .await;
}

/// Verify the mailed one-time code; succeeding signs the user in.
pub async fn verify_otp(
    dispatch: Dispatch<State>,
    details: requests::VerifyOtp,
) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "OTP verification failed",
        || async move { client.verify_otp(&details).await },
        |state, response: responses::Authenticated| {
            state.auth.session.message = Some(response.message);
            state.set_session(response.user);
        },
    )
    .await;
}

pub async fn login(dispatch: Dispatch<State>, details: requests::Login) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "Login failed",
        || async move { client.login(&details).await },
        |state, response: responses::Authenticated| {
            state.auth.session.message = Some(response.message);
            state.set_session(response.user);
        },
    )
    .await;
}

/// End the session. Success clears the whole user-scoped tree, then
/// resets the slice so no stale banner survives into the login page.
pub async fn logout(dispatch: Dispatch<State>) {
    let client = get_api_client();
    let result = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "Logout failed",
        || async move { client.logout().await },
        |state, response: responses::SuccessMessage| {
            state.auth.session.message = Some(response.message);
            state.clear_session();
        },
    )
    .await;

    if result.is_ok() {
        reset(&dispatch);
    }
}

/// Probe `/auth/me` for a live session. Absence of a session is an
/// expected state, not an error: the failure path stores nothing the UI
/// would render as a banner.
pub async fn fetch_current_user(dispatch: Dispatch<State>) {
    dispatch.reduce_mut(|state| state.auth.session.begin());

    let client = get_api_client();
    match client.current_user().await {
        Ok(response) => dispatch.reduce_mut(|state| {
            state.auth.session.loading = false;
            state.set_session(response.user);
        }),
        Err(err) => {
            tracing::debug!("no live session: {err}");
            dispatch.reduce_mut(|state| {
                state.auth.session.loading = false;
                state.auth.session.data = None;
                state.auth.is_authenticated = false;
                state.auth.session_checked = true;
            });
        }
    }
}

pub async fn forgot_password(
    dispatch: Dispatch<State>,
    details: requests::ForgotPassword,
) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "Forgot password failed",
        || async move { client.forgot_password(&details).await },
        |state, response: responses::SuccessMessage| {
            state.auth.session.message = Some(response.message);
        },
    )
    .await;
}

/// Set a new password with the token from the reset email; succeeding
/// signs the user in with the returned account.
pub async fn reset_password(
    dispatch: Dispatch<State>,
    token: String,
    details: requests::ResetPassword,
) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "Reset password failed",
        || async move { client.reset_password(&token, &details).await },
        |state, response: responses::Authenticated| {
            state.auth.session.message = Some(response.message);
            state.set_session(response.user);
        },
    )
    .await;
}

pub async fn update_password(
    dispatch: Dispatch<State>,
    details: requests::UpdatePassword,
) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.auth.session,
        "Update password failed",
        || async move { client.update_password(&details).await },
        |state, response: responses::SuccessMessage| {
            state.auth.session.message = Some(response.message);
        },
    )
    .await;
}

/// Clear the slice's transient error/message once shown.
pub fn reset(dispatch: &Dispatch<State>) {
    dispatch.reduce_mut(|state| state.auth.session.reset());
}
