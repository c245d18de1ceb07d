//! Controlled modal dialog.
//!
//! # Design
//! - Visibility is owned by the parent through `open`.
//! - The header close button and the backdrop both emit `on_close`.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub close_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let classes = classes!(
        "modal",
        props.open.then_some("modal-open")
    );

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true" aria-hidden={(!props.open).to_string()}>
            <div class="modal-box">
                <div class="modal-header flex items-center justify-between mb-4">
                    {props.title.clone().map(|title| html! { <h3 class="text-lg font-bold">{title}</h3> }).unwrap_or_default()}
                    <button
                        type="button"
                        class="btn btn-sm btn-circle btn-ghost"
                        aria-label={props.close_label.clone().unwrap_or_else(|| AttrValue::from("Close"))}
                        onclick={on_close.clone()}
                    >{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
            <button type="button" class="modal-backdrop" aria-hidden="true" tabindex="-1" onclick={on_close}></button>
        </div>
    }
}
