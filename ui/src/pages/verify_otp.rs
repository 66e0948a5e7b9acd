use payloads::requests;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::{Banner, BannerKind};
use crate::contexts::toast::use_toast;
use crate::state::State;
use crate::{Route, actions};

#[derive(Properties, PartialEq)]
pub struct VerifyOtpPageProps {
    /// The address the code was mailed to, carried in the route.
    pub email: String,
}

#[function_component]
pub fn VerifyOtpPage(props: &VerifyOtpPageProps) -> Html {
    let navigator = use_navigator().unwrap();
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let otp = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    // Verification signs the user in; hand them to the dashboard.
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

    let on_otp = {
        let otp = otp.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            otp.set(input.value());
        })
    };

    let on_submit = {
        let otp = otp.clone();
        let local_error = local_error.clone();
        let dispatch = dispatch.clone();
        let email = props.email.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if otp.len() != requests::OTP_LEN {
                local_error.set(Some(format!(
                    "The code is {} digits",
                    requests::OTP_LEN
                )));
                return;
            }
            local_error.set(None);

            let details = requests::VerifyOtp {
                email: email.clone(),
                otp: (*otp).clone(),
            };
            yew::platform::spawn_local(actions::auth::verify_otp(
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
                        {"Check your email"}
                    </h2>
                    <p class="mt-2 text-sm text-neutral-600 dark:text-neutral-400">
                        {format!("We sent a verification code to {}.", props.email)}
                    </p>
                </div>
                <form class="space-y-4" onsubmit={on_submit}>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Verification code"}</label>
                        <input
                            inputmode="numeric"
                            class="mt-1 block w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm tracking-widest text-center"
                            value={(*otp).clone()}
                            onchange={on_otp}
                            disabled={state.auth.session.loading}
                        />
                    </div>

                    if let Some(error) = &*local_error {
                        <Banner kind={BannerKind::Error} text={error.clone()} />
                    }

                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                        disabled={state.auth.session.loading}
                    >
                        { if state.auth.session.loading { "Verifying..." } else { "Verify" } }
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
