use payloads::requests::{self, validate_password};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions;
use crate::components::{Banner, BannerKind, Modal};
use crate::state::State;

#[derive(Default, Clone, PartialEq)]
struct UpdatePasswordForm {
    current_password: String,
    new_password: String,
    confirm_new_password: String,
    error: Option<String>,
}

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-neutral-300 dark:border-neutral-600 rounded-md bg-white \
    dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm";

/// Change-password dialog, reachable from the navbar. Closing it clears
/// whatever banner the auth slice still holds.
#[function_component]
pub fn SettingsPopup() -> Html {
    let (state, dispatch) = use_store::<State>();
    let form = use_state(UpdatePasswordForm::default);

    let on_close: Callback<()> = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|state| state.popups.settings = false);
            actions::auth::reset(&dispatch);
        })
    };

    let edit = |apply: fn(&mut UpdatePasswordForm, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_current = edit(|f, v| f.current_password = v);
    let on_new = edit(|f, v| f.new_password = v);
    let on_confirm = edit(|f, v| f.confirm_new_password = v);

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.new_password != form_data.confirm_new_password {
                let mut next = form_data;
                next.error = Some("Passwords do not match".to_string());
                form.set(next);
                return;
            }
            if let Some(problem) =
                validate_password(&form_data.new_password).error_message()
            {
                let mut next = form_data;
                next.error = Some(problem.to_string());
                form.set(next);
                return;
            }

            let details = requests::UpdatePassword {
                current_password: form_data.current_password.clone(),
                new_password: form_data.new_password.clone(),
                confirm_new_password: form_data.confirm_new_password.clone(),
            };

            {
                let mut next = form_data;
                next.error = None;
                form.set(next);
            }

            yew::platform::spawn_local(actions::auth::update_password(
                dispatch.clone(),
                details,
            ));
        })
    };

    html! {
        <Modal title="Update password" {on_close}>
            <form class="space-y-4" onsubmit={on_submit}>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Current password"}</label>
                    <input type="password" class={INPUT_CLASSES} value={form.current_password.clone()} onchange={on_current} disabled={state.auth.session.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"New password"}</label>
                    <input type="password" class={INPUT_CLASSES} value={form.new_password.clone()} onchange={on_new} disabled={state.auth.session.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Confirm new password"}</label>
                    <input type="password" class={INPUT_CLASSES} value={form.confirm_new_password.clone()} onchange={on_confirm} disabled={state.auth.session.loading} />
                </div>

                if let Some(error) = &form.error {
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
                    { if state.auth.session.loading { "Updating..." } else { "Update password" } }
                </button>
            </form>
        </Modal>
    }
}
