use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::StatCard;
use crate::state::State;
use crate::stats::LibraryStats;
use crate::actions;

/// Admin landing page: the aggregate numbers, recomputed from the
/// authoritative lists on every store change.
#[function_component]
pub fn AdminDashboard() -> Html {
    let (state, dispatch) = use_store::<State>();

    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            yew::platform::spawn_local(actions::users::fetch_all(
                dispatch.clone(),
            ));
            yew::platform::spawn_local(actions::books::fetch_all(
                dispatch.clone(),
            ));
            yew::platform::spawn_local(actions::borrows::fetch_all(dispatch));
        }
    });

    let stats = LibraryStats::derive(
        &state.users.data,
        &state.books.data,
        &state.borrows.data.all,
    );
    let circulating = stats.total_borrowed + stats.total_returned;
    let returned_share = if circulating == 0 {
        0
    } else {
        stats.total_returned * 100 / circulating
    };

    let name = state
        .current_user()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                    {format!("Welcome back, {name}!")}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                    {"Here is how the library is doing."}
                </p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-3 gap-7">
                <StatCard label="Total user base" value={stats.total_users} />
                <StatCard label="Total book count" value={stats.total_books} />
                <StatCard label="Total admin count" value={stats.total_admins} />
                <StatCard label="Borrowed books" value={stats.total_borrowed} />
                <StatCard label="Returned books" value={stats.total_returned} />
            </div>

            <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md
                        border border-neutral-200 dark:border-neutral-700 space-y-3">
                <h2 class="text-sm font-medium text-neutral-600 dark:text-neutral-400">
                    {"Returned share of all borrowals"}
                </h2>
                <div class="w-full h-3 rounded-full bg-neutral-200 dark:bg-neutral-700 overflow-hidden">
                    <div
                        class="h-full bg-neutral-900 dark:bg-neutral-100"
                        style={format!("width: {returned_share}%")}
                    ></div>
                </div>
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!(
                        "{} of {} borrowals returned",
                        stats.total_returned, circulating
                    )}
                </p>
            </div>
        </div>
    }
}
