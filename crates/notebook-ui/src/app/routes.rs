//! Routing definitions for the Notebook UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    NoteList,
    #[at("/new")]
    NewNote,
    #[at("/:id")]
    NoteDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
