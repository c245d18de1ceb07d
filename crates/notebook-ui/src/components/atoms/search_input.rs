//! Title search field.
//!
//! # Design
//! - Typing updates the field immediately; the query is reported once typing
//!   pauses for `SEARCH_DEBOUNCE_MS`.
//! - A newer keystroke replaces the pending timer, which cancels it.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    pub id: AttrValue,
    pub value: AttrValue,
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let text = use_state(|| props.value.to_string());
    let pending = use_mut_ref(|| None::<Timeout>);

    {
        let pending = pending.clone();
        use_effect_with_deps(move |_| move || drop(pending.borrow_mut().take()), ());
    }

    let oninput = {
        let text = text.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |event: InputEvent| {
            let query = event
                .target_unchecked_into::<web_sys::HtmlInputElement>()
                .value();
            text.set(query.clone());
            let on_search = on_search.clone();
            *pending.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                on_search.emit(query);
            }));
        })
    };

    html! {
        <input
            type="search"
            class="input w-full"
            id={props.id.clone()}
            value={AttrValue::from((*text).clone())}
            oninput={oninput}
        />
    }
}
