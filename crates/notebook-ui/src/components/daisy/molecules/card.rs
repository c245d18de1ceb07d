use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let classes = classes!("card", "shadow", "bg-base-200");
    html! {
        <div class={classes}>
            {props.title.clone().map(|title| html! {
                <div class="card-title px-6 pt-6">
                    <h2 class="text-lg font-bold">{title}</h2>
                </div>
            }).unwrap_or_default()}
            <div class="card-body">
                { for props.children.iter() }
            </div>
            {props.actions.clone().map(|actions| html! {
                <div class="card-actions justify-end px-6 pb-4">{actions}</div>
            }).unwrap_or_default()}
        </div>
    }
}
