//! Borrow record actions.

use payloads::{BookId, requests, responses};
use yewdux::prelude::*;

use crate::state::State;
use crate::{get_api_client, lifecycle};

/// Replace the calling user's own borrowals.
pub async fn fetch_mine(dispatch: Dispatch<State>) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.borrows,
        "Failed to fetch your borrowed books",
        || async move { client.my_borrowed_books().await },
        |state, response: responses::BorrowedBooks| {
            state.borrows.data.mine = response.borrowed_books;
        },
    )
    .await;
}

/// Replace the admin view of every user's borrowals.
pub async fn fetch_all(dispatch: Dispatch<State>) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.borrows,
        "Failed to fetch borrowed books",
        || async move { client.borrowed_books_by_users().await },
        |state, response: responses::BorrowedBooks| {
            state.borrows.data.all = response.borrowed_books;
        },
    )
    .await;
}

/// Record that the user identified by `email` took out a book
/// (admin only).
pub async fn record(
    dispatch: Dispatch<State>,
    book_id: BookId,
    email: String,
) {
    let client = get_api_client();
    let result = lifecycle::run(
        &dispatch,
        |state| &mut state.borrows,
        "Failed to record the borrowed book",
        || async move {
            client
                .record_borrow(&book_id, &requests::BorrowBook { email })
                .await
        },
        |state, response: responses::SuccessMessage| {
            state.borrows.message = Some(response.message);
        },
    )
    .await;

    if result.is_ok() {
        dispatch.reduce_mut(|state| state.popups.record_borrow = false);
    }
}

/// Mark a borrowal returned (admin only).
pub async fn return_book(
    dispatch: Dispatch<State>,
    book_id: BookId,
    email: String,
) {
    let client = get_api_client();
    let _ = lifecycle::run(
        &dispatch,
        |state| &mut state.borrows,
        "Failed to return the book",
        || async move {
            client
                .return_borrowed_book(&book_id, &requests::BorrowBook { email })
                .await
        },
        |state, response: responses::SuccessMessage| {
            state.borrows.message = Some(response.message);
        },
    )
    .await;
}

/// Clear the slice's transient error/message once shown.
pub fn reset(dispatch: &Dispatch<State>) {
    dispatch.reduce_mut(|state| state.borrows.reset());
}
