//! Note list feature state.
//!
//! # Design
//! - Keep the search query as typed; matching decides how to fold case.
//! - Store selected tags by id and resolve labels from the available tags.
//! - Modal visibility is local to the list page.

use crate::features::notes::actions::NoteListAction;
use notebook_models::Tag;
use uuid::Uuid;

/// Active search inputs for the note list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NoteFilters {
    /// Title query; empty matches every note.
    pub title: String,
    /// Tags a note must all carry; empty matches every note.
    pub tag_ids: Vec<Uuid>,
}

impl NoteFilters {
    /// Whether no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.tag_ids.is_empty()
    }
}

/// Local state of the note list page.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NoteListState {
    /// Current search inputs.
    pub filters: NoteFilters,
    /// Whether the tag editor modal is visible.
    pub tag_editor_open: bool,
}

impl NoteListState {
    /// Apply a list action.
    pub fn apply(&mut self, action: NoteListAction) {
        match action {
            NoteListAction::SetTitle(title) => self.filters.title = title,
            NoteListAction::SetTags(tag_ids) => {
                let mut unique = Vec::with_capacity(tag_ids.len());
                for id in tag_ids {
                    if !unique.contains(&id) {
                        unique.push(id);
                    }
                }
                self.filters.tag_ids = unique;
            }
            NoteListAction::OpenTagEditor => self.tag_editor_open = true,
            NoteListAction::CloseTagEditor => self.tag_editor_open = false,
            NoteListAction::SyncAvailableTags(available) => {
                self.filters.tag_ids.retain(|id| available.contains(id));
            }
        }
    }
}

/// Select options for the tag filter as `(value, label)` pairs.
#[must_use]
pub fn tag_options(tags: &[Tag]) -> Vec<(String, String)> {
    tags.iter()
        .map(|tag| (tag.id.to_string(), tag.label.clone()))
        .collect()
}

/// Parse select values back into tag ids, skipping values that are not
/// available tags.
#[must_use]
pub fn parse_tag_selection<I, S>(values: I, available: &[Tag]) -> Vec<Uuid>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .filter_map(|value| Uuid::parse_str(value.as_ref().trim()).ok())
        .filter(|id| available.iter().any(|tag| &tag.id == id))
        .collect()
}
