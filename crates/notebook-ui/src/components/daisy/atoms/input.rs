//! Single-line text input.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Marks the field with the error tone and `aria-invalid`.
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub class: Classes,
    pub oninput: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let oninput = props.oninput.reform(|event: InputEvent| {
        event
            .target_unchecked_into::<web_sys::HtmlInputElement>()
            .value()
    });
    html! {
        <input
            type="text"
            class={classes!(
                "input",
                "w-full",
                props.invalid.then_some("input-error"),
                props.class.clone()
            )}
            id={props.id.clone()}
            placeholder={props.placeholder.clone()}
            aria-label={props.aria_label.clone()}
            aria-invalid={props.invalid.then_some("true")}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}
