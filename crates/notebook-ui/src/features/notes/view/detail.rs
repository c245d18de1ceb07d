//! Single-note view.

use crate::app::Route;
use crate::components::atoms::EmptyState;
use crate::components::daisy::{Badge, Card, DaisyColor};
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use notebook_models::{NoteSummary, StoredNote};
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct NoteDetailProps {
    pub id: Uuid,
}

#[function_component(NoteDetailPage)]
pub(crate) fn note_detail_page(props: &NoteDetailProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);
    let notebook = use_selector(|store: &AppStore| store.notebook.data.clone());

    let back = html! {
        <Link<Route> to={Route::NoteList} classes="btn btn-ghost btn-sm">
            {t("detail.back", "Back")}
        </Link<Route>>
    };

    match notebook.note(&props.id) {
        Some((note, summary)) => render_note(note, &summary, back, &bundle),
        None => html! {
            <EmptyState
                title={AttrValue::from(t("detail.missing", "Note not found"))}
                description={AttrValue::from(t("detail.missing_body", ""))}
            >
                {back}
            </EmptyState>
        },
    }
}

fn render_note(
    note: &StoredNote,
    summary: &NoteSummary,
    back: Html,
    bundle: &TranslationBundle,
) -> Html {
    let body = if note.body.trim().is_empty() {
        html! { <p class="muted">{bundle.text("detail.empty_body", "")}</p> }
    } else {
        html! { <p class="whitespace-pre-wrap">{note.body.clone()}</p> }
    };
    html! {
        <Card title={Some(AttrValue::from(summary.title.clone()))} actions={Some(back)}>
            <div class="flex flex-wrap gap-1">
                {for summary.tags.iter().map(|tag| html! {
                    <Badge key={tag.id.to_string()} tone={Some(DaisyColor::Secondary)}>
                        {tag.label.clone()}
                    </Badge>
                })}
            </div>
            {body}
        </Card>
    }
}
