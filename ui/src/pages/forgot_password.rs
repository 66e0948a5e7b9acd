use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Banner, BannerKind};
use crate::state::State;
use crate::{Route, actions};

#[function_component]
pub fn ForgotPasswordPage() -> Html {
    let (state, dispatch) = use_store::<State>();
    let email = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    // Leave no stale banner behind when the user navigates away.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            move || actions::auth::reset(&dispatch)
        });
    }

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

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() {
                local_error
                    .set(Some("Please enter your email address".to_string()));
                return;
            }
            local_error.set(None);

            let details = requests::ForgotPassword {
                email: (*email).clone(),
            };
            yew::platform::spawn_local(actions::auth::forgot_password(
                dispatch.clone(),
                details,
            ));
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-neutral-900 dark:text-white">
                        {"Reset your password"}
                    </h2>
                    <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                        {"Remember your password? "}
                        <Link<Route> to={Route::Login} classes="font-medium underline text-neutral-900 dark:text-neutral-100">
                            {"Sign in"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Email address"}</label>
                        <input
                            type="email"
                            class="mt-1 block w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm"
                            value={(*email).clone()}
                            onchange={on_email}
                            disabled={state.auth.session.loading}
                        />
                    </div>

                    if let Some(error) = &*local_error {
                        <Banner kind={BannerKind::Error} text={error.clone()} />
                    }
                    if let Some(error) = &state.auth.session.error {
                        <Banner kind={BannerKind::Error} text={error.clone()} />
                    }
                    if let Some(message) = &state.auth.session.message {
                        <Banner kind={BannerKind::Success} text={message.clone()} />
                    }

                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                        disabled={state.auth.session.loading}
                    >
                        { if state.auth.session.loading { "Sending..." } else { "Send reset link" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
