use std::str::FromStr;

use payloads::requests;
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::actions;
use crate::components::{Banner, BannerKind, Modal};
use crate::contexts::toast::use_toast;
use crate::state::State;

#[derive(Default, Clone, PartialEq)]
struct AddBookForm {
    title: String,
    author: String,
    description: String,
    price: String,
    quantity: String,
    error: Option<String>,
}

fn edit(
    form: &UseStateHandle<AddBookForm>,
    apply: impl Fn(&mut AddBookForm, String) + 'static,
) -> Callback<Event> {
    let form = form.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

const INPUT_CLASSES: &str = "mt-1 block w-full px-3 py-2 border \
    border-neutral-300 dark:border-neutral-600 rounded-md bg-white \
    dark:bg-neutral-700 text-neutral-900 dark:text-white sm:text-sm";

/// Admin form for adding a book to the catalog.
#[function_component]
pub fn AddBookPopup() -> Html {
    let (state, dispatch) = use_store::<State>();
    let toast = use_toast();
    let form = use_state(AddBookForm::default);

    let on_close: Callback<()> =
        dispatch.reduce_mut_callback(|state| state.popups.add_book = false);

    let on_title = edit(&form, |f, v| f.title = v);
    let on_author = edit(&form, |f, v| f.author = v);
    let on_price = edit(&form, |f, v| f.price = v);
    let on_quantity = edit(&form, |f, v| f.quantity = v);
    let on_description = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        let toast = toast.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form_data = (*form).clone();
            if form_data.title.is_empty() || form_data.author.is_empty() {
                let mut next = form_data;
                next.error = Some("Title and author are required".to_string());
                form.set(next);
                return;
            }
            let Ok(price) = Decimal::from_str(&form_data.price) else {
                let mut next = form_data;
                next.error = Some("Price must be a number".to_string());
                form.set(next);
                return;
            };
            let Ok(quantity) = form_data.quantity.parse::<u32>() else {
                let mut next = form_data;
                next.error =
                    Some("Quantity must be a whole number".to_string());
                form.set(next);
                return;
            };

            let details = requests::AddBook {
                title: form_data.title.clone(),
                author: form_data.author.clone(),
                description: form_data.description.clone(),
                price,
                quantity,
            };

            {
                let mut next = form_data;
                next.error = None;
                form.set(next);
            }

            yew::platform::spawn_local(actions::books::add(
                dispatch.clone(),
                toast.clone(),
                details,
            ));
        })
    };

    html! {
        <Modal title="Add a book" {on_close}>
            <form class="space-y-4" onsubmit={on_submit}>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Title"}</label>
                    <input class={INPUT_CLASSES} value={form.title.clone()} onchange={on_title} disabled={state.books.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Author"}</label>
                    <input class={INPUT_CLASSES} value={form.author.clone()} onchange={on_author} disabled={state.books.loading} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Description"}</label>
                    <textarea class={INPUT_CLASSES} rows="3" value={form.description.clone()} onchange={on_description} disabled={state.books.loading} />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Price"}</label>
                        <input class={INPUT_CLASSES} inputmode="decimal" value={form.price.clone()} onchange={on_price} disabled={state.books.loading} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300">{"Quantity"}</label>
                        <input class={INPUT_CLASSES} inputmode="numeric" value={form.quantity.clone()} onchange={on_quantity} disabled={state.books.loading} />
                    </div>
                </div>

                if let Some(error) = &form.error {
                    <Banner kind={BannerKind::Error} text={error.clone()} />
                }

                <button
                    type="submit"
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-700 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                    disabled={state.books.loading}
                >
                    { if state.books.loading { "Adding..." } else { "Add book" } }
                </button>
            </form>
        </Modal>
    }
}
