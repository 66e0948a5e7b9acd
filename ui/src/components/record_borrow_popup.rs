use payloads::{Book, BookId};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions;
use crate::components::{Banner, BannerKind, Modal};
use crate::state::State;

#[derive(Properties, PartialEq)]
pub struct RecordBorrowPopupProps {
    pub book: Book,
}

/// Admin form for recording that a user (by email) took out a book.
#[function_component]
pub fn RecordBorrowPopup(props: &RecordBorrowPopupProps) -> Html {
    let (state, dispatch) = use_store::<State>();
    let email = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let on_close: Callback<()> = dispatch
        .reduce_mut_callback(|state| state.popups.record_borrow = false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let local_error = local_error.clone();
        let dispatch = dispatch.clone();
        let book_id: BookId = props.book.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() {
                local_error
                    .set(Some("Please enter the borrower's email".to_string()));
                return;
            }
            local_error.set(None);

            yew::platform::spawn_local(actions::borrows::record(
                dispatch.clone(),
                book_id.clone(),
                (*email).clone(),
            ));
        })
    };

    html! {
        <Modal title={format!("Record borrowal of \"{}\"", props.book.title)} {on_close}>
            <form class="space-y-4" onsubmit={on_submit}>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">
                        {"Borrower's email"}
                    </label>
                    <input
                        type="email"
                        class="mt-1 block w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm"
                        value={(*email).clone()}
                        onchange={on_email}
                        disabled={state.borrows.loading}
                    />
                </div>

                if let Some(error) = &*local_error {
                    <Banner kind={BannerKind::Error} text={error.clone()} />
                }
                if let Some(error) = &state.borrows.error {
                    <Banner kind={BannerKind::Error} text={error.clone()} />
                }

                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                    disabled={state.borrows.loading}
                >
                    { if state.borrows.loading { "Recording..." } else { "Record borrowal" } }
                </button>
            </form>
        </Modal>
    }
}
