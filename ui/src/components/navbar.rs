use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::SettingsPopup;
use crate::hooks::use_logout;
use crate::state::State;
use crate::Route;

/// Top navigation bar. Shows the section links for the signed-in user's
/// role, plus settings and logout.
#[function_component]
pub fn Navbar() -> Html {
    let (state, dispatch) = use_store::<State>();
    let on_logout = use_logout();

    let open_settings = dispatch
        .reduce_mut_callback(|state| state.popups.settings = true);

    let link_classes = "text-sm font-medium text-neutral-600 \
                        dark:text-neutral-300 hover:text-neutral-900 \
                        dark:hover:text-white";

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-8">
                        <Link<Route> to={Route::Home} classes="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"BookWorm"}
                        </Link<Route>>
                        if state.is_authenticated() {
                            <nav class="flex gap-6">
                                <Link<Route> to={Route::Books} classes={link_classes}>
                                    {"Books"}
                                </Link<Route>>
                                <Link<Route> to={Route::Borrowals} classes={link_classes}>
                                    {"Borrowals"}
                                </Link<Route>>
                                if state.is_admin() {
                                    <Link<Route> to={Route::Users} classes={link_classes}>
                                        {"Users"}
                                    </Link<Route>>
                                }
                            </nav>
                        }
                    </div>
                    if let Some(user) = state.current_user() {
                        <div class="flex items-center gap-4">
                            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                                {&user.name}
                            </span>
                            <button onclick={open_settings} class={link_classes}>
                                {"Settings"}
                            </button>
                            <button onclick={on_logout} class={link_classes}>
                                {"Log out"}
                            </button>
                        </div>
                    }
                </div>
            </div>
            if state.popups.settings {
                <SettingsPopup />
            }
        </header>
    }
}
