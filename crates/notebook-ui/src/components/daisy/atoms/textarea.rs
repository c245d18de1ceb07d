//! Multi-line text input for note bodies.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextareaProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or(8)]
    pub rows: u32,
    pub oninput: Callback<String>,
}

#[function_component(Textarea)]
pub(crate) fn textarea(props: &TextareaProps) -> Html {
    let oninput = props.oninput.reform(|event: InputEvent| {
        event
            .target_unchecked_into::<web_sys::HtmlTextAreaElement>()
            .value()
    });
    html! {
        <textarea
            class="textarea w-full"
            id={props.id.clone()}
            rows={props.rows.to_string()}
            value={props.value.clone()}
            oninput={oninput}
        />
    }
}
