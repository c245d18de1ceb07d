//! Multi-select over the available tags.
//!
//! # Design
//! - Options are `(tag id, current label)`, so renamed tags show their new label.
//! - The change event is parsed back into ids of tags that still exist.

use crate::features::notes::state::{parse_tag_selection, tag_options};
use notebook_models::Tag;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TagSelectProps {
    pub id: AttrValue,
    pub tags: Vec<Tag>,
    pub selected: Vec<Uuid>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    pub onchange: Callback<Vec<Uuid>>,
}

#[function_component(TagSelect)]
pub(crate) fn tag_select(props: &TagSelectProps) -> Html {
    let onchange = {
        let tags = props.tags.clone();
        props.onchange.reform(move |event: Event| {
            let select = event.target_unchecked_into::<web_sys::HtmlSelectElement>();
            let picked = select.selected_options();
            let values: Vec<String> = (0..picked.length())
                .filter_map(|index| picked.item(index))
                .filter_map(|option| option.get_attribute("value"))
                .collect();
            parse_tag_selection(values, &tags)
        })
    };

    html! {
        <select
            class="select select-multiple w-full"
            id={props.id.clone()}
            multiple={true}
            onchange={onchange}
        >
            {props.placeholder.clone().map(|text| html! {
                <option disabled={true} value="">{text}</option>
            }).unwrap_or_default()}
            {for tag_options(&props.tags).into_iter().map(|(value, label)| {
                let selected = props.selected.iter().any(|id| id.to_string() == value);
                html! {
                    <option key={value.clone()} value={value} selected={selected}>{label}</option>
                }
            })}
        </select>
    }
}
