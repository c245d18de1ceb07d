//! Edit-tags modal.
//!
//! # Design
//! - Rows are controlled by the tag list passed in; every keystroke emits a rename.
//! - The modal never mutates tags itself.

use crate::components::daisy::{Button, DaisyColor, DaisySize, DaisyVariant, Input, Modal};
use crate::features::tags::actions::TagCallbacks;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use notebook_models::Tag;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EditTagsModalProps {
    pub open: bool,
    pub tags: Vec<Tag>,
    pub on_close: Callback<()>,
    pub callbacks: TagCallbacks,
}

#[function_component(EditTagsModal)]
pub(crate) fn edit_tags_modal(props: &EditTagsModalProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);

    let body = if props.tags.is_empty() {
        html! { <p class="muted">{t("tags.empty", "No tags yet.")}</p> }
    } else {
        html! {
            <div class="flex flex-col gap-2">
                {for props.tags.iter().map(|tag| render_row(tag, &props.callbacks, &bundle))}
            </div>
        }
    };

    html! {
        <Modal
            open={props.open}
            title={Some(AttrValue::from(t("tags.modal_title", "Edit Tags")))}
            close_label={Some(AttrValue::from(t("tags.close", "Close")))}
            on_close={props.on_close.clone()}
        >
            {body}
        </Modal>
    }
}

fn render_row(tag: &Tag, callbacks: &TagCallbacks, bundle: &TranslationBundle) -> Html {
    let id = tag.id;
    let row = callbacks.row(id);
    // One click, one `on_delete` for this tag.
    let on_delete = row.delete.reform(|_: MouseEvent| ());
    html! {
        <div key={id.to_string()} class="flex items-center gap-2">
            <Input
                class="flex-1"
                value={AttrValue::from(tag.label.clone())}
                aria_label={Some(AttrValue::from(bundle.text("tags.label_aria", "Tag label")))}
                oninput={row.rename}
            />
            <Button
                tone={Some(DaisyColor::Error)}
                variant={DaisyVariant::Outline}
                size={DaisySize::Sm}
                aria_label={Some(AttrValue::from(bundle.text("tags.delete", "Delete")))}
                onclick={on_delete}
            >
                {"×"}
            </Button>
        </div>
    }
}
