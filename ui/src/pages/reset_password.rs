use payloads::requests::{self, validate_password};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Banner, BannerKind};
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    /// Token from the reset email's link, carried in the route.
    pub token: String,
}

#[derive(Default, Clone, PartialEq)]
struct ResetPasswordForm {
    password: String,
    confirm_password: String,
    error: Option<String>,
}

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-neutral-300 dark:border-neutral-600 rounded-md bg-white \
    dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm";

#[function_component]
pub fn ResetPasswordPage(props: &ResetPasswordPageProps) -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let form = use_state(ResetPasswordForm::default);

    // A successful reset re-authenticates with the returned account.
    {
        let navigator = navigator.clone();
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        let message = state.auth.session.message.clone();
        use_effect_with(state.is_authenticated(), move |is_auth| {
            if *is_auth {
                if let Some(message) = message {
                    toast.success(message);
                }
                actions::auth::reset(&dispatch);
                navigator.push(&Route::Home);
            }
        });
    }

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

    let edit = |apply: fn(&mut ResetPasswordForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_password = edit(|f, v| f.password = v);
    let on_confirm = edit(|f, v| f.confirm_password = v);

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let token = props.token.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.password != form_data.confirm_password {
                let mut next = form_data;
                next.error = Some("Passwords do not match".to_string());
                form.set(next);
                return;
            }
            if let Some(problem) =
                validate_password(&form_data.password).error_message()
            {
                let mut next = form_data;
                next.error = Some(problem.to_string());
                form.set(next);
                return;
            }

            let details = requests::ResetPassword {
                password: form_data.password.clone(),
                confirm_password: form_data.confirm_password.clone(),
            };
            {
                let mut next = form_data;
                next.error = None;
                form.set(next);
            }

            yew::platform::spawn_local(actions::auth::reset_password(
                dispatch.clone(),
                token.clone(),
                details,
            ));
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-6">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold text-neutral-900 dark:text-white">
                        {"Choose a new password"}
                    </h2>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"New password"}</label>
                        <input type="password" class={INPUT_CLASSES} value={form.password.clone()} onchange={on_password} disabled={state.auth.session.loading} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Confirm new password"}</label>
                        <input type="password" class={INPUT_CLASSES} value={form.confirm_password.clone()} onchange={on_confirm} disabled={state.auth.session.loading} />
                    </div>

                    if let Some(error) = &form.error {
                        <Banner kind={BannerKind::Error} text={error.clone()} />
                    }

                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                        disabled={state.auth.session.loading}
                    >
                        { if state.auth.session.loading { "Resetting password..." } else { "Reset password" } }
                    </button>
                </form>
                <p class="text-center text-sm text-neutral-600 dark:text-neutral-400">
                    <Link<Route> to={Route::Login} classes="underline">
                        {"Back to sign in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
