use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Banner, BannerKind};
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

#[derive(Default, Clone, PartialEq)]
struct LoginForm {
    email: String,
    password: String,
    error: Option<String>,
}

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-neutral-300 dark:border-neutral-600 rounded-md bg-white \
    dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm";

#[function_component]
pub fn LoginPage() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let form = use_state(LoginForm::default);

    // Redirect to home once authenticated (also covers arriving here
    // with a live session).
    {
        let navigator = navigator.clone();
        use_effect_with(state.is_authenticated(), move |is_auth| {
            if *is_auth {
                navigator.push(&Route::Home);
            }
        });
    }

    // Surface slice errors as a toast, then clear them for the retry.
    {
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        use_effect_with(state.auth.session.error.clone(), move |error| {
            if let Some(error) = error {
                toast.error(error.clone());
                actions::auth::reset(&dispatch);
            }
        });
    }

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.password = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.email.is_empty() || form_data.password.is_empty() {
                let mut next = form_data;
                next.error = Some("Please fill in all fields".to_string());
                form.set(next);
                return;
            }

            let details = requests::Login {
                email: form_data.email.clone(),
                password: form_data.password.clone(),
            };
            {
                let mut next = form_data;
                next.error = None;
                form.set(next);
            }

            yew::platform::spawn_local(actions::auth::login(
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
                        {"Sign in to BookWorm"}
                    </h2>
                    <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                        {"Or "}
                        <Link<Route> to={Route::Register} classes="font-medium underline text-neutral-900 dark:text-neutral-100">
                            {"create a new account"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Email"}</label>
                        <input type="email" class={INPUT_CLASSES} value={form.email.clone()} onchange={on_email} disabled={state.auth.session.loading} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Password"}</label>
                        <input type="password" class={INPUT_CLASSES} value={form.password.clone()} onchange={on_password} disabled={state.auth.session.loading} />
                    </div>

                    if let Some(error) = &form.error {
                        <Banner kind={BannerKind::Error} text={error.clone()} />
                    }

                    <div class="flex justify-end">
                        <Link<Route> to={Route::ForgotPassword} classes="text-sm underline text-neutral-600 dark:text-neutral-400">
                            {"Forgot your password?"}
                        </Link<Route>>
                    </div>

                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                        disabled={state.auth.session.loading}
                    >
                        { if state.auth.session.loading { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
