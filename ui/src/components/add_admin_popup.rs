use payloads::requests::{self, validate_password};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions;
use crate::components::{Banner, BannerKind, Modal};
use crate::contexts::toast::use_toast;
use crate::state::State;

#[derive(Default, Clone, PartialEq)]
struct AddAdminForm {
    name: String,
    email: String,
    password: String,
    avatar: Option<requests::AvatarUpload>,
    error: Option<String>,
}

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-neutral-300 dark:border-neutral-600 rounded-md bg-white \
    dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm";

/// Admin form for creating another admin account, avatar included.
#[function_component]
pub fn AddAdminPopup() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let form = use_state(AddAdminForm::default);

    let on_close: Callback<()> =
        dispatch.reduce_mut_callback(|state| state.popups.add_admin = false);

    let edit = |apply: fn(&mut AddAdminForm, String)| {
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

    // The file part is read asynchronously; the form keeps the bytes so
    // submission stays synchronous.
    let on_avatar = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0))
            else {
                return;
            };
            let form = form.clone();
            yew::platform::spawn_local(async move {
                let file_name = file.name();
                match wasm_bindgen_futures::JsFuture::from(file.array_buffer())
                    .await
                {
                    Ok(buffer) => {
                        let bytes =
                            js_sys::Uint8Array::new(&buffer).to_vec();
                        let mut next = (*form).clone();
                        next.avatar = Some(requests::AvatarUpload {
                            file_name,
                            bytes,
                        });
                        form.set(next);
                    }
                    Err(err) => {
                        tracing::warn!("failed to read avatar file: {err:?}");
                    }
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.name.is_empty() || form_data.email.is_empty() {
                let mut next = form_data;
                next.error = Some("Name and email are required".to_string());
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

            let details = requests::AddNewAdmin {
                name: form_data.name.clone(),
                email: form_data.email.clone(),
                password: form_data.password.clone(),
                avatar: form_data.avatar.clone(),
            };

            {
                let mut next = form_data;
                next.error = None;
                form.set(next);
            }

            yew::platform::spawn_local(actions::users::add_new_admin(
                dispatch.clone(),
                toast.clone(),
                details,
            ));
        })
    };

    html! {
        <Modal title="Add new admin" {on_close}>
            <form class="space-y-4" onsubmit={on_submit}>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Name"}</label>
                    <input class={INPUT_CLASSES} value={form.name.clone()} onchange={on_name} disabled={state.users.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Email"}</label>
                    <input type="email" class={INPUT_CLASSES} value={form.email.clone()} onchange={on_email} disabled={state.users.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Password"}</label>
                    <input type="password" class={INPUT_CLASSES} value={form.password.clone()} onchange={on_password} disabled={state.users.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Avatar"}</label>
                    <input type="file" accept="image/*" class={INPUT_CLASSES} onchange={on_avatar} disabled={state.users.loading} />
                </div>

                if let Some(error) = &form.error {
                    <Banner kind={BannerKind::Error} text={error.clone()} />
                }
                if let Some(error) = &state.users.error {
                    <Banner kind={BannerKind::Error} text={error.clone()} />
                }

                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                    disabled={state.users.loading}
                >
                    { if state.users.loading { "Adding..." } else { "Add admin" } }
                </button>
            </form>
        </Modal>
    }
}
