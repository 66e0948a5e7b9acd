use payloads::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::AddAdminPopup;
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

/// Registered accounts (admin only).
#[function_component]
pub fn UsersPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(actions::users::fetch_all(dispatch));
        }
    });

    {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        use_effect_with(state.users.error.clone(), move |error| {
            if let Some(error) = error {
                toast.error(error.clone());
                actions::users::reset(&dispatch);
            }
        });
    }

    if state.auth.session_checked && !state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }
    if state.auth.session_checked && !state.is_admin() {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }

    let open_add_admin =
        dispatch.reduce_mut_callback(|state| state.popups.add_admin = true);

    let rows = state.users.data.iter().map(|user| {
        html! {
            <tr key={user.id.to_string()} class="border-b border-neutral-200 dark:border-neutral-700">
                <td class="px-4 py-3 font-medium">{&user.name}</td>
                <td class="px-4 py-3">{&user.email}</td>
                <td class="px-4 py-3">
                    if user.role == Role::Admin {
                        <span class="text-xs font-semibold px-2 py-1 rounded bg-neutral-900 text-white dark:bg-neutral-100 dark:text-neutral-900">
                            {"Admin"}
                        </span>
                    } else {
                        <span class="text-xs px-2 py-1 rounded bg-neutral-200 dark:bg-neutral-700">
                            {"User"}
                        </span>
                    }
                </td>
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                    {"Users"}
                </h1>
                <button
                    onclick={open_add_admin}
                    class="py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900"
                >
                    {"Add admin"}
                </button>
            </div>

            if state.users.loading && state.users.data.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400">{"Loading users..."}</p>
            } else if state.users.data.is_empty() {
                <p class="text-neutral-600 dark:text-neutral-400">{"No registered users."}</p>
            } else {
                <div class="overflow-x-auto bg-white dark:bg-neutral-800 rounded-lg border border-neutral-200 dark:border-neutral-700">
                    <table class="min-w-full text-sm text-left">
                        <thead class="text-neutral-600 dark:text-neutral-400">
                            <tr>
                                <th class="px-4 py-3">{"Name"}</th>
                                <th class="px-4 py-3">{"Email"}</th>
                                <th class="px-4 py-3">{"Role"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for rows }
                        </tbody>
                    </table>
                </div>
            }

            if state.popups.add_admin {
                <AddAdminPopup />
            }
        </div>
    }
}
