use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: usize,
}

/// One dashboard number with its label.
#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md
                    border border-neutral-200 dark:border-neutral-700">
            <p class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {props.value}
            </p>
            <p class="text-sm text-neutral-600 dark:text-neutral-400 mt-1">
                {props.label.clone()}
            </p>
        </div>
    }
}
