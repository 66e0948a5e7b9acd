//! Book catalog actions.

use payloads::{requests, responses};
use yewdux::prelude::*;

use crate::contexts::toast::ToastHandle;
use crate::state::State;
use crate::{get_api_client, lifecycle};

/// Replace the catalog with the server's list.
pub async fn fetch_all(dispatch: Dispatch<State>) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.books,
        "Failed to fetch books",
        || async move { client.list_books().await },
        |state, response: responses::Books| {
            state.books.data = response.books;
        },
    )
    .await;
}

/// Add a book (admin only), then refetch the catalog so the new entry
/// shows up.
pub async fn add(
    dispatch: Dispatch<State>,
    toast: ToastHandle,
    details: requests::AddBook,
) {
    let client = get_api_client();
    let result = lifecycle::run(
        &dispatch,
        |state| &mut state.books,
        "Failed to add book",
        || async move { client.add_book(&details).await },
        |state, response: responses::SuccessMessage| {
            state.books.message = Some(response.message);
        },
    )
    .await;

    if let Ok(response) = result {
        toast.success(response.message);
        dispatch.reduce_mut(|state| state.popups.add_book = false);
        fetch_all(dispatch).await;
    }
}

/// Clear the slice's transient error/message once shown.
pub fn reset(dispatch: &Dispatch<State>) {
    dispatch.reduce_mut(|state| state.books.reset());
}
