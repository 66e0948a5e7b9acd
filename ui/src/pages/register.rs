use payloads::requests::{self, validate_password};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Banner, BannerKind};
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

#[derive(Default, Clone, PartialEq)]
struct RegisterForm {
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    error: Option<String>,
}

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-neutral-300 dark:border-neutral-600 rounded-md bg-white \
    dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm";

#[function_component]
pub fn RegisterPage() -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let form = use_state(RegisterForm::default);

    // Registration success is a message without a session; move on to
    // OTP entry for the registered address.
    {
        let navigator = navigator.clone();
        let toast = toast.clone();
        let dispatch = dispatch.clone();
        let email = form.email.clone();
        use_effect_with(
            (
                state.auth.session.message.clone(),
                state.is_authenticated(),
            ),
            move |(message, is_auth)| {
                if let Some(message) = message
                    && !*is_auth
                {
                    toast.success(message.clone());
                    actions::auth::reset(&dispatch);
                    navigator.push(&Route::VerifyOtp { email });
                }
            },
        );
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

    let edit = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = edit(|f, v| f.name = v);
    let on_email = edit(|f, v| f.email = v);
    let on_password = edit(|f, v| f.password = v);
    let on_confirm = edit(|f, v| f.confirm_password = v);

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.name.is_empty() || form_data.email.is_empty() {
                let mut next = form_data;
                next.error = Some("Please fill in all fields".to_string());
                form.set(next);
                return;
            }
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

            let details = requests::Register {
                name: form_data.name.clone(),
                email: form_data.email.clone(),
                password: form_data.password.clone(),
            };
            {
                let mut next = form_data;
                next.error = None;
                form.set(next);
            }

            yew::platform::spawn_local(actions::auth::register(
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
                        {"Create your account"}
                    </h2>
                    <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                        {"Or "}
                        <Link<Route> to={Route::Login} classes="font-medium underline text-neutral-900 dark:text-neutral-100">
                            {"sign in to your existing account"}
                        </Link<Route>>
                    </p>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Name"}</label>
                        <input class={INPUT_CLASSES} value={form.name.clone()} onchange={on_name} disabled={state.auth.session.loading} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Email"}</label>
                        <input type="email" class={INPUT_CLASSES} value={form.email.clone()} onchange={on_email} disabled={state.auth.session.loading} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Password"}</label>
                        <input type="password" class={INPUT_CLASSES} value={form.password.clone()} onchange={on_password} disabled={state.auth.session.loading} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Confirm password"}</label>
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
                        { if state.auth.session.loading { "Creating account..." } else { "Create account" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
