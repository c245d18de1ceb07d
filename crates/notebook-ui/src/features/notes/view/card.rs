//! Note summary card shown in the list grid.

use crate::app::Route;
use crate::components::daisy::{Badge, DaisyColor};
use notebook_models::NoteSummary;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub(crate) struct NoteCardProps {
    pub note: NoteSummary,
}

#[function_component(NoteCard)]
pub(crate) fn note_card(props: &NoteCardProps) -> Html {
    let note = &props.note;
    html! {
        <Link<Route>
            to={Route::NoteDetail { id: note.id.to_string() }}
            classes="card bg-base-100 border border-base-300 h-full transition hover:-translate-y-1 hover:shadow-md"
        >
            <div class="card-body items-center justify-center gap-2 text-center">
                <span class="text-lg font-semibold">{note.title.clone()}</span>
                {if note.tags.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="flex flex-wrap justify-center gap-1">
                            {for note.tags.iter().map(|tag| html! {
                                <Badge key={tag.id.to_string()} tone={Some(DaisyColor::Primary)}>
                                    {tag.label.clone()}
                                </Badge>
                            })}
                        </div>
                    }
                }}
            </div>
        </Link<Route>>
    }
}
