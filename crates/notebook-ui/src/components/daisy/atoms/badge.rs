//! Inline label chip.

use crate::components::daisy::foundations::{DaisyColor, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    pub children: Children,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", tone_class("badge", props.tone))}>
            { for props.children.iter() }
        </span>
    }
}
