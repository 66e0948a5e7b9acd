use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::StatCard;
use crate::pages::dashboard::AdminDashboard;
use crate::state::State;
use crate::{Route, actions};

#[function_component]
pub fn HomePage() -> Html {
    let (state, _) = use_store::<State>();

    if !state.auth.session_checked {
        return html! {
            <div class="text-center space-y-4 py-12">
                <div class="inline-block animate-spin rounded-full h-8 w-8 border-b-2 border-neutral-900 dark:border-neutral-100"></div>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Checking authentication..."}
                </p>
            </div>
        };
    }

    if !state.is_authenticated() {
        return html! { <Redirect<Route> to={Route::Login} /> };
    }

    if state.is_admin() {
        html! { <AdminDashboard /> }
    } else {
        html! { <UserHome /> }
    }
}

/// Landing view for non-admin users: their own borrowals at a glance.
#[function_component]
fn UserHome() -> Html {
    let (state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(actions::borrows::fetch_mine(
                dispatch,
            ));
        }
    });

    let name = state
        .current_user()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let mine = &state.borrows.data.mine;
    let out = mine.iter().filter(|r| r.return_date.is_none()).count();

    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {format!("Welcome back, {name}!")}
            </h1>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 max-w-xl">
                <StatCard label="Books out" value={out} />
                <StatCard label="Books returned" value={mine.len() - out} />
            </div>
            <Link<Route> to={Route::Borrowals} classes="text-sm font-medium underline text-neutral-900 dark:text-neutral-100">
                {"See your borrowed books"}
            </Link<Route>>
        </div>
    }
}
