use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    /// Called when the user clicks the backdrop or the close button.
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Overlay dialog used by the popup forms. Clicking the dimmed backdrop
/// closes it; clicks inside the panel do not.
#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();

        Callback::from(move |e: MouseEvent| {
            let backdrop = backdrop_ref.cast::<web_sys::Element>();
            let target = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            if backdrop.is_some() && backdrop == target {
                on_close.emit(());
            }
        })
    };

    let on_close_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            ref={backdrop_ref.clone()}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-black bg-opacity-50 z-40 flex
                   items-center justify-center p-4"
        >
            <div class="bg-white dark:bg-neutral-800 rounded-lg shadow-xl
                        w-full max-w-md p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {props.title.clone()}
                    </h3>
                    <button
                        onclick={on_close_click}
                        aria-label="Close"
                        class="text-neutral-400 hover:text-neutral-600 dark:hover:text-neutral-200"
                    >
                        {"✕"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
