//! Note list views.
//!
//! # Design
//! - `NoteList` is prop-driven: notes, tags, and tag callbacks come from the caller.
//! - `NoteListPage` adapts the shared store to those props.
//! - Search inputs and modal visibility stay in local component state.

mod card;
mod detail;

pub(crate) use detail::NoteDetailPage;

use crate::app::Route;
use crate::components::atoms::{EmptyState, SearchInput, TagSelect};
use crate::components::daisy::{Button, DaisyColor, DaisyVariant};
use crate::core::store::{
    AppStore, app_dispatch, delete_tag, rename_tag, select_summaries, select_tags,
};
use crate::features::notes::actions::NoteListAction;
use crate::features::notes::logic::filter_notes;
use crate::features::notes::state::NoteListState;
use crate::features::tags::actions::TagCallbacks;
use crate::features::tags::view::EditTagsModal;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use card::NoteCard;
use gloo::console;
use notebook_models::{NoteSummary, Tag};
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

#[function_component(NoteListPage)]
pub(crate) fn note_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let hydrated = use_selector(|store: &AppStore| store.notebook.hydrated);
    let notes = use_selector(select_summaries);
    let tags = use_selector(select_tags);
    let dispatch = app_dispatch();

    let on_update_tag = {
        let dispatch = dispatch.clone();
        Callback::from(move |(id, label): (Uuid, String)| {
            let mut outcome = None;
            dispatch.reduce_mut(|store| outcome = Some(rename_tag(store, id, label.clone())));
            if let Some(Err(err)) = outcome {
                console::warn!("tag rename ignored", err.to_string());
            }
        })
    };
    let on_delete_tag = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: Uuid| {
            let mut outcome = None;
            dispatch.reduce_mut(|store| outcome = Some(delete_tag(store, id)));
            match outcome {
                Some(Ok(tag)) => console::log!("tag deleted", tag.label),
                Some(Err(err)) => console::warn!("tag delete ignored", err.to_string()),
                None => {}
            }
        })
    };

    if !*hydrated {
        return html! {
            <p class="muted">{bundle.text("notes.loading", "Loading notes…")}</p>
        };
    }

    html! {
        <NoteList
            available_tags={(*tags).clone()}
            notes={(*notes).clone()}
            on_update_tag={on_update_tag}
            on_delete_tag={on_delete_tag}
        />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NoteListProps {
    pub available_tags: Vec<Tag>,
    pub notes: Vec<NoteSummary>,
    pub on_update_tag: Callback<(Uuid, String)>,
    pub on_delete_tag: Callback<Uuid>,
}

#[function_component(NoteList)]
pub(crate) fn note_list(props: &NoteListProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let navigator = use_navigator();
    let state = use_state(NoteListState::default);

    let on_action = {
        let state = state.clone();
        Callback::from(move |action: NoteListAction| {
            update_list_state(&state, |next| next.apply(action));
        })
    };

    {
        let on_action = on_action.clone();
        use_effect_with_deps(
            move |tags: &Vec<Tag>| {
                on_action.emit(NoteListAction::SyncAvailableTags(
                    tags.iter().map(|tag| tag.id).collect(),
                ));
                || ()
            },
            props.available_tags.clone(),
        );
    }

    let filtered = use_memo(
        |(notes, filters)| filter_notes(notes, filters),
        (props.notes.clone(), state.filters.clone()),
    );

    let on_create = Callback::from(move |_| {
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::NewNote);
        }
    });
    let on_edit_tags = {
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(NoteListAction::OpenTagEditor))
    };
    let on_close_tags = {
        let on_action = on_action.clone();
        Callback::from(move |()| on_action.emit(NoteListAction::CloseTagEditor))
    };
    let on_title = {
        let on_action = on_action.clone();
        Callback::from(move |title: String| on_action.emit(NoteListAction::SetTitle(title)))
    };
    let on_tags = {
        let on_action = on_action.clone();
        Callback::from(move |ids: Vec<Uuid>| on_action.emit(NoteListAction::SetTags(ids)))
    };
    let callbacks = TagCallbacks {
        on_update: props.on_update_tag.clone(),
        on_delete: props.on_delete_tag.clone(),
    };

    html! {
        <>
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-3xl font-bold">{t("notes.title", "Notes")}</h1>
                <div class="flex gap-2">
                    <Button tone={Some(DaisyColor::Primary)} onclick={on_create}>
                        {t("notes.create", "Create")}
                    </Button>
                    <Button
                        tone={Some(DaisyColor::Secondary)}
                        variant={DaisyVariant::Outline}
                        onclick={on_edit_tags}
                    >
                        {t("notes.edit_tags", "Edit Tags")}
                    </Button>
                </div>
            </div>
            <div class="border border-base-300 rounded-box p-6 h-full">
                <form class="grid gap-4 mb-6 md:grid-cols-[auto_1fr_1fr] items-end" onsubmit={Callback::from(|event: SubmitEvent| event.prevent_default())}>
                    <h2 class="text-xl font-semibold">{t("notes.search", "Search")}</h2>
                    <label class="stack" for="note-title">
                        <span>{t("notes.title_label", "Title")}</span>
                        <SearchInput
                            id="note-title"
                            value={AttrValue::from(state.filters.title.clone())}
                            on_search={on_title}
                        />
                    </label>
                    <label class="stack" for="note-tags">
                        <span>{t("notes.tags_label", "Tags")}</span>
                        <TagSelect
                            id="note-tags"
                            tags={props.available_tags.clone()}
                            selected={state.filters.tag_ids.clone()}
                            placeholder={Some(AttrValue::from(t("notes.tags_placeholder", "Select tags")))}
                            onchange={on_tags}
                        />
                    </label>
                </form>
                {if filtered.is_empty() {
                    html! {
                        <EmptyState
                            title={AttrValue::from(t("notes.empty", "No notes found"))}
                            description={AttrValue::from(t("notes.empty_body", ""))}
                        />
                    }
                } else {
                    html! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-3">
                            {for filtered.iter().map(|note| html! {
                                <NoteCard key={note.id.to_string()} note={note.clone()} />
                            })}
                        </div>
                    }
                }}
            </div>
            <EditTagsModal
                open={state.tag_editor_open}
                tags={props.available_tags.clone()}
                on_close={on_close_tags}
                callbacks={callbacks}
            />
        </>
    }
}

fn update_list_state(
    state: &UseStateHandle<NoteListState>,
    update: impl FnOnce(&mut NoteListState),
) {
    let mut next = (**state).clone();
    update(&mut next);
    state.set(next);
}
