use payloads::BorrowRecord;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions;
use crate::components::Modal;
use crate::state::State;

#[derive(Properties, PartialEq)]
pub struct ReturnBorrowPopupProps {
    pub record: BorrowRecord,
}

/// Admin confirmation for marking a borrowal returned. The dialog
/// closes as soon as the return is dispatched; the outcome surfaces
/// through the borrow slice's message/error.
#[function_component]
pub fn ReturnBorrowPopup(props: &ReturnBorrowPopupProps) -> Html {
    let (state, dispatch) = use_store::<State>();

    let on_close: Callback<()> = dispatch
        .reduce_mut_callback(|state| state.popups.return_borrow = false);

    let on_confirm = {
        let dispatch = dispatch.clone();
        let record = props.record.clone();

        Callback::from(move |_: MouseEvent| {
            yew::platform::spawn_local(actions::borrows::return_book(
                dispatch.clone(),
                record.book.clone(),
                record.email.clone(),
            ));
            dispatch.reduce_mut(|state| state.popups.return_borrow = false);
        })
    };

    html! {
        <Modal title="Return book" on_close={on_close.clone()}>
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!(
                    "Mark \"{}\" as returned by {}?",
                    props.record.book_title, props.record.user_name
                )}
            </p>
            <div class="flex gap-3 justify-end">
                <button
                    onclick={on_close.reform(|_: MouseEvent| ())}
                    class="py-2 px-4 rounded-md text-sm font-medium border border-neutral-300 dark:border-neutral-600 text-neutral-700 dark:text-neutral-300"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm}
                    class="py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                    disabled={state.borrows.loading}
                >
                    {"Confirm return"}
                </button>
            </div>
        </Modal>
    }
}
