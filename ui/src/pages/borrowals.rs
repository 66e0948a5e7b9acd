use payloads::BorrowRecord;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::ReturnBorrowPopup;
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Out,
    Returned,
}

/// Borrow records. Admins see everyone's and can mark returns; users
/// see their own.
#[function_component]
pub fn BorrowalsPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let tab = use_state(|| Tab::Out);
    // Which record the return popup is for.
    let selected = use_state(|| None::<BorrowRecord>);

    let is_admin = state.is_admin();

    // Admins read the all-users list; everyone else their own. Re-run
    // when the role becomes known.
    use_effect_with(is_admin, {
        let dispatch = dispatch.clone();
        move |is_admin| {
            if *is_admin {
                yew::platform::spawn_local(actions::borrows::fetch_all(
                    dispatch,
                ));
            } else {
                yew::platform::spawn_local(actions::borrows::fetch_mine(
                    dispatch,
                ));
            }
        }
    });

    // A return confirmation lands in the slice message; toast it, clear
    // it, and refresh the list it changed.
    {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        use_effect_with(state.borrows.message.clone(), move |message| {
            if let Some(message) = message {
                toast.success(message.clone());
                actions::borrows::reset(&dispatch);
                yew::platform::spawn_local(actions::borrows::fetch_all(
                    dispatch,
                ));
            }
        });
    }

    {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        use_effect_with(state.borrows.error.clone(), move |error| {
            if let Some(error) = error {
                toast.error(error.clone());
                actions::borrows::reset(&dispatch);
            }
        });
    }

    if state.auth.session_checked && !state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    let records = if is_admin {
        &state.borrows.data.all
    } else {
        &state.borrows.data.mine
    };
    let shown: Vec<&BorrowRecord> = records
        .iter()
        .filter(|record| match *tab {
            Tab::Out => record.return_date.is_none(),
            Tab::Returned => record.return_date.is_some(),
        })
        .collect();

    let tab_button = |this: Tab, label: &str| {
        let tab = tab.clone();
        let active = *tab == this;
        let classes = if active {
            "py-2 px-4 text-sm font-medium border-b-2 border-neutral-900 dark:border-neutral-100"
        } else {
            "py-2 px-4 text-sm font-medium text-neutral-500"
        };
        let onclick = Callback::from(move |_: MouseEvent| tab.set(this));
        html! { <button {onclick} class={classes}>{label}</button> }
    };

    let rows = shown.iter().map(|record| {
        let open_return = {
            let dispatch = dispatch.clone();
            let selected = selected.clone();
            let record = (*record).clone();
            Callback::from(move |_: MouseEvent| {
                selected.set(Some(record.clone()));
                dispatch
                    .reduce_mut(|state| state.popups.return_borrow = true);
            })
        };

        html! {
            <tr key={record.id.to_string()} class="border-b border-neutral-200 dark:border-neutral-700">
                <td class="px-4 py-3 font-medium">{&record.book_title}</td>
                if is_admin {
                    <td class="px-4 py-3">{&record.user_name}</td>
                    <td class="px-4 py-3">{&record.email}</td>
                }
                <td class="px-4 py-3">
                    {record.due_date.strftime("%Y-%m-%d").to_string()}
                </td>
                <td class="px-4 py-3">
                    if let Some(returned) = record.return_date {
                        {returned.strftime("%Y-%m-%d").to_string()}
                    } else {
                        <span class="text-neutral-500">{"—"}</span>
                    }
                </td>
                if is_admin && record.return_date.is_none() {
                    <td class="px-4 py-3 text-right">
                        <button onclick={open_return} class="text-sm font-medium underline">
                            {"Return"}
                        </button>
                    </td>
                }
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                { if is_admin { "Borrowed books" } else { "Your borrowed books" } }
            </h1>

            <div class="flex border-b border-neutral-200 dark:border-neutral-700">
                {tab_button(Tab::Out, "Out")}
                {tab_button(Tab::Returned, "Returned")}
            </div>

            if state.borrows.loading && shown.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading borrowals..."}</p>
            } else if shown.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400">{"Nothing here."}</p>
            } else {
                <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full text-sm text-left">
                        <thead class="text-neutral-600 dark:text-neutral-400">
                            <tr>
                                <th class="px-4 py-3">{"Book"}</th>
                                if is_admin {
                                    <th class="px-4 py-3">{"Borrower"}</th>
                                    <th class="px-4 py-3">{"Email"}</th>
                                }
                                <th class="px-4 py-3">{"Due"}</th>
                                <th class="px-4 py-3">{"Returned"}</th>
                                if is_admin {
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

            if state.popups.return_borrow {
                if let Some(record) = (*selected).clone() {
                    <ReturnBorrowPopup {record} />
                }
            }
        </div>
    }
}
