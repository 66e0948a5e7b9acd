use payloads::Book;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{AddBookPopup, RecordBorrowPopup};
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

/// The catalog. Admins can add books and record borrowals from here.
#[function_component]
pub fn BooksPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    // Which book the record-borrow popup is for.
    let selected = use_state(|| None::<Book>);

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(actions::books::fetch_all(dispatch));
        }
    });

    // Fetch errors surface as a toast, then clear for the retry.
    {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        use_effect_with(state.books.error.clone(), move |error| {
            if let Some(error) = error {
                toast.error(error.clone());
                actions::books::reset(&dispatch);
            }
        });
    }

    // Recording a borrowal happens from this page; consume the borrow
    // slice's confirmation here.
    {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        use_effect_with(state.borrows.message.clone(), move |message| {
            if let Some(message) = message {
                toast.success(message.clone());
                actions::borrows::reset(&dispatch);
            }
        });
    }

    if state.auth.session_checked && !state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let open_add_book =
        dispatch.reduce_mut_callback(|state| state.popups.add_book = true);

    let rows = state.books.data.iter().map(|book| {
        let record = {
            let dispatch = dispatch.clone();
            let selected = selected.clone();
            let book = book.clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(Some(book.clone()));
                dispatch
                    .reduce_mut(|state| state.popups.record_borrow = true);
            })
        };

        html! {
            <tr key={book.id.to_string()} class="border-b border-neutral-200 dark:border-neutral-700">
                <td class="px-4 py-3 font-medium">{&book.title}</td>
                <td class="px-4 py-3">{&book.author}</td>
                <td class="px-4 py-3">{format!("${}", book.price)}</td>
                <td class="px-4 py-3">{book.quantity}</td>
                <td class="px-4 py-3">
                    if book.availability {
                        <span class="text-green-600 dark:text-green-400">{"Available"}</span>
                    } else {
                        <span class="text-red-600 dark:text-red-400">{"Out"}</span>
                    }
                </td>
                if state.is_admin() {
                    <td class="px-4 py-3 text-right">
                        <button onclick={record} class="text-sm font-medium underline">
                            {"Record borrowal"}
                        </button>
                    </td>
                }
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Books"}
                </h1>
                if state.is_admin() {
                    <button
                        onclick={open_add_book}
                        class="py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900"
                    >
                        {"Add book"}
                    </button>
                }
            </div>

            if state.books.loading && state.books.data.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading books..."}</p>
            } else if state.books.data.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400">{"No books in the library yet."}</p>
            } else {
                <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full text-sm text-left">
                        <thead class="text-neutral-600 dark:text-neutral-400">
                            <tr>
                                <th class="px-4 py-3">{"Title"}</th>
                                <th class="px-4 py-3">{"Author"}</th>
                                <th class="px-4 py-3">{"Price"}</th>
                                <th class="px-4 py-3">{"Quantity"}</th>
                                <th class="px-4 py-3">{"Availability"}</th>
                                if state.is_admin() {
                                    <th class="px-4 py-3"></th>
                                }
                            </tr>
                        </thead>
                        <tbody>
                            { for rows }
                        </tbody>
                    </table>
                </div>
            }

            if state.popups.add_book {
                <AddBookPopup />
            }
            if state.popups.record_borrow {
                if let Some(book) = (*selected).clone() {
                    <RecordBorrowPopup {book} />
                }
            }
        </div>
    }
}
