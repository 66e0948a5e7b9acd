use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub kind: BannerKind,
    pub text: AttrValue,
}

/// Inline status banner for a slice's `error` or `message` field.
#[function_component]
pub fn Banner(props: &BannerProps) -> Html {
    let classes = match props.kind {
        BannerKind::Error => {
            "bg-red-50 dark:bg-red-900/20 border border-red-200 \
             dark:border-red-800 text-red-600 dark:text-red-400 \
             px-4 py-3 rounded"
        }
        BannerKind::Success => {
            "bg-green-50 dark:bg-green-900/20 border border-green-200 \
             dark:border-green-800 text-green-600 dark:text-green-400 \
             px-4 py-3 rounded"
        }
    };

    html! {
        <div class={classes} role="status">
            {props.text.clone()}
        </div>
    }
}
