//! Note list actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use uuid::Uuid;

/// High-level note list actions from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteListAction {
    /// Replace the title query.
    SetTitle(String),
    /// Replace the selected tag ids.
    SetTags(Vec<Uuid>),
    /// Show the tag editor modal.
    OpenTagEditor,
    /// Hide the tag editor modal.
    CloseTagEditor,
    /// Available tags changed; drop selections that no longer exist.
    SyncAvailableTags(Vec<Uuid>),
}
