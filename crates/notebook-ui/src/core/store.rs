//! App-wide yewdux store slices.
//!
//! # Design
//! - The notebook slice is the single data owner behind the list and modal.
//! - Reducers are plain functions over `&mut AppStore` so they test without a DOM.
//! - Persistence waits for the first successful mutation after hydration, so a
//!   snapshot that failed to load is never overwritten by the empty fallback.

use notebook_models::{NoteDraft, NoteSummary, Notebook, NotebookResult, StoredNote, Tag};
use uuid::Uuid;
#[cfg(target_arch = "wasm32")]
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Notes and tags owned by the app.
    pub notebook: NotebookSlice,
}

/// Notebook snapshot plus hydration status.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NotebookSlice {
    /// Current notes and tags.
    pub data: Notebook,
    /// Set once the snapshot has been loaded from storage.
    pub hydrated: bool,
    /// Set by any successful mutation since hydration.
    pub dirty: bool,
}

impl NotebookSlice {
    /// Whether the current data should be written back to storage.
    #[must_use]
    pub const fn should_persist(&self) -> bool {
        self.hydrated && self.dirty
    }
}

/// Replace the notebook with a loaded snapshot.
pub fn hydrate(store: &mut AppStore, notebook: Notebook) {
    store.notebook.data = notebook;
    store.notebook.hydrated = true;
    store.notebook.dirty = false;
}

fn mutate<T>(
    store: &mut AppStore,
    change: impl FnOnce(&mut Notebook) -> NotebookResult<T>,
) -> NotebookResult<T> {
    let result = change(&mut store.notebook.data);
    if result.is_ok() {
        store.notebook.dirty = true;
    }
    result
}

/// Rename a tag in place.
///
/// # Errors
/// Propagates [`notebook_models::NotebookError::UnknownTag`].
pub fn rename_tag(store: &mut AppStore, id: Uuid, label: String) -> NotebookResult<()> {
    mutate(store, |notebook| notebook.rename_tag(id, label))
}

/// Delete a tag and drop it from every note.
///
/// # Errors
/// Propagates [`notebook_models::NotebookError::UnknownTag`].
pub fn delete_tag(store: &mut AppStore, id: Uuid) -> NotebookResult<Tag> {
    mutate(store, |notebook| notebook.delete_tag(id))
}

/// Create a tag from the editor's inline input.
///
/// # Errors
/// Propagates [`notebook_models::NotebookError::EmptyLabel`].
pub fn create_tag(store: &mut AppStore, label: &str) -> NotebookResult<Tag> {
    mutate(store, |notebook| notebook.create_tag(label))
}

/// Create a note from a validated draft.
///
/// # Errors
/// Propagates title and tag validation failures from the notebook.
pub fn create_note(store: &mut AppStore, draft: NoteDraft) -> NotebookResult<StoredNote> {
    mutate(store, |notebook| notebook.create_note(draft))
}

/// Simplified notes for the list page.
#[must_use]
pub fn select_summaries(store: &AppStore) -> Vec<NoteSummary> {
    store.notebook.data.summaries()
}

/// Available tags in display order.
#[must_use]
pub fn select_tags(store: &AppStore) -> Vec<Tag> {
    store.notebook.data.tags.clone()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::<AppStore>::new()
}
