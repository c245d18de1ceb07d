//! New-note page.
//!
//! # Design
//! - Form inputs live in local state until save.
//! - Inline tag creation goes through the store so the new tag is immediately selectable.
//! - Validation errors render next to the form instead of aborting.

use crate::app::Route;
use crate::components::atoms::TagSelect;
use crate::components::daisy::{Button, Card, DaisyColor, DaisyVariant, Input, Textarea};
use crate::core::store::{AppStore, app_dispatch, create_note, create_tag, select_tags};
use crate::features::editor::state::NoteFormState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use notebook_models::Tag;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

#[function_component(NewNotePage)]
pub(crate) fn new_note_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let navigator = use_navigator();
    let dispatch = app_dispatch();
    let tags = use_selector(select_tags);
    let form = use_state(NoteFormState::default);
    let error = use_state(|| None::<String>);

    {
        let form = form.clone();
        use_effect_with_deps(
            move |tags: &Vec<Tag>| {
                if form.tag_ids.iter().any(|id| !tags.iter().any(|tag| &tag.id == id)) {
                    update_form_state(&form, |next| next.retain_available(tags));
                }
                || ()
            },
            (*tags).clone(),
        );
    }

    let on_title = {
        let form = form.clone();
        Callback::from(move |value: String| update_form_state(&form, |next| next.title = value))
    };
    let on_body = {
        let form = form.clone();
        Callback::from(move |value: String| update_form_state(&form, |next| next.body = value))
    };
    let on_new_tag = {
        let form = form.clone();
        Callback::from(move |value: String| update_form_state(&form, |next| next.new_tag = value))
    };
    let on_tags = {
        let form = form.clone();
        Callback::from(move |ids: Vec<Uuid>| update_form_state(&form, |next| next.tag_ids = ids))
    };
    let on_add_tag = {
        let form = form.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let Some(label) = form.pending_tag().map(ToString::to_string) else {
                return;
            };
            let mut outcome = None;
            dispatch.reduce_mut(|store: &mut AppStore| {
                outcome = Some(create_tag(store, &label));
            });
            match outcome {
                Some(Ok(tag)) => update_form_state(&form, |next| {
                    next.attach_tag(tag.id);
                    next.new_tag.clear();
                }),
                Some(Err(err)) => console::warn!("tag create failed", err.to_string()),
                None => {}
            }
        })
    };
    let on_save = {
        let form = form.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let draft = match form.to_draft() {
                Ok(draft) => draft,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };
            let mut outcome = None;
            dispatch.reduce_mut(|store: &mut AppStore| {
                outcome = Some(create_note(store, draft.clone()));
            });
            match outcome {
                Some(Ok(note)) => {
                    error.set(None);
                    if let Some(navigator) = navigator.as_ref() {
                        navigator.push(&Route::NoteDetail {
                            id: note.id.to_string(),
                        });
                    }
                }
                Some(Err(err)) => error.set(Some(err.to_string())),
                None => {}
            }
        })
    };
    let on_cancel = Callback::from(move |_| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::NoteList);
        }
    });

    let actions = html! {
        <div class="flex gap-2">
            <Button variant={DaisyVariant::Ghost} onclick={on_cancel}>
                {t("editor.cancel", "Cancel")}
            </Button>
            <Button tone={Some(DaisyColor::Primary)} onclick={on_save}>
                {t("editor.save", "Save")}
            </Button>
        </div>
    };

    html! {
        <Card title={Some(AttrValue::from(t("editor.title", "New Note")))} actions={Some(actions)}>
            <form class="flex flex-col gap-4" onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
                <label class="stack" for="note-form-title">
                    <span>{t("editor.title_label", "Title")}</span>
                    <Input
                        id={Some(AttrValue::from("note-form-title"))}
                        value={AttrValue::from(form.title.clone())}
                        invalid={error.is_some()}
                        oninput={on_title}
                    />
                </label>
                {error.as_ref().map(|message| html! {
                    <p class="text-error text-sm" role="alert">{message.clone()}</p>
                }).unwrap_or_default()}
                <label class="stack" for="note-form-tags">
                    <span>{t("editor.tags_label", "Tags")}</span>
                    <TagSelect
                        id="note-form-tags"
                        tags={(*tags).clone()}
                        selected={form.tag_ids.clone()}
                        onchange={on_tags}
                    />
                </label>
                <div class="flex items-center gap-2">
                    <Input
                        class="flex-1"
                        value={AttrValue::from(form.new_tag.clone())}
                        placeholder={Some(AttrValue::from(t("editor.new_tag_placeholder", "New tag")))}
                        oninput={on_new_tag}
                    />
                    <Button
                        tone={Some(DaisyColor::Secondary)}
                        variant={DaisyVariant::Outline}
                        disabled={form.pending_tag().is_none()}
                        onclick={on_add_tag}
                    >
                        {t("editor.add_tag", "Add tag")}
                    </Button>
                </div>
                <label class="stack" for="note-form-body">
                    <span>{t("editor.body_label", "Body")}</span>
                    <Textarea
                        id={Some(AttrValue::from("note-form-body"))}
                        value={AttrValue::from(form.body.clone())}
                        rows={12}
                        oninput={on_body}
                    />
                </label>
            </form>
        </Card>
    }
}

fn update_form_state(state: &UseStateHandle<NoteFormState>, update: impl FnOnce(&mut NoteFormState)) {
    let mut next = (**state).clone();
    update(&mut next);
    state.set(next);
}
