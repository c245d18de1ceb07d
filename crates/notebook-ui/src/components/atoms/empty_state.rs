//! Placeholder shown when a view has nothing to render.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <section class="flex flex-col items-center gap-2 py-12 text-center" role="status">
            <h3 class="text-lg font-semibold">{props.title.clone()}</h3>
            {if props.description.is_empty() {
                html! {}
            } else {
                html! { <p class="text-base-content/70">{props.description.clone()}</p> }
            }}
            { for props.children.iter() }
        </section>
    }
}
