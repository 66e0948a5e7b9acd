use yew::prelude::*;

use crate::contexts::toast::{ToastAction, ToastContext, ToastKind};

/// Fixed stack of active notifications, newest at the bottom. Clicking
/// one dismisses it early.
#[function_component]
pub fn ToastContainer() -> Html {
    let context = use_context::<ToastContext>()
        .expect("ToastContainer must be used within a ToastProvider");

    html! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            { for context.toasts.iter().map(|toast| {
                let classes = match toast.kind {
                    ToastKind::Success => {
                        "bg-green-600 text-white px-4 py-3 rounded shadow-lg cursor-pointer"
                    }
                    ToastKind::Error => {
                        "bg-red-600 text-white px-4 py-3 rounded shadow-lg cursor-pointer"
                    }
                };
                let onclick = {
                    let context = context.clone();
                    let id = toast.id;
                    Callback::from(move |_| {
                        context.dispatch(ToastAction::Dismiss(id));
                    })
                };
                html! {
                    <div key={toast.id.to_string()} class={classes} {onclick}>
                        {&toast.message}
                    </div>
                }
            }) }
        </div>
    }
}
