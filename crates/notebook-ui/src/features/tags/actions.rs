//! Tag editor actions.
//!
//! # Design
//! - Rows emit typed intents; the owner of the notebook performs the mutation.
//! - Each intent maps to exactly one callback invocation.

use uuid::Uuid;
use yew::Callback;

/// Edits requested from the tag editor modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagAction {
    /// Replace the label of a tag.
    Rename {
        /// Tag being edited.
        id: Uuid,
        /// New label as typed.
        label: String,
    },
    /// Remove a tag.
    Delete(Uuid),
}

/// Callbacks provided by the notebook owner.
#[derive(Clone, PartialEq)]
pub struct TagCallbacks {
    /// Receives `(tag id, new label)`.
    pub on_update: Callback<(Uuid, String)>,
    /// Receives the id of the tag to delete.
    pub on_delete: Callback<Uuid>,
}

impl TagCallbacks {
    /// Forward an action to the matching callback.
    pub fn dispatch(&self, action: TagAction) {
        match action {
            TagAction::Rename { id, label } => self.on_update.emit((id, label)),
            TagAction::Delete(id) => self.on_delete.emit(id),
        }
    }

    /// Callbacks for one editor row bound to `id`.
    ///
    /// The label callback emits one rename per edit; the delete callback emits
    /// exactly one `on_delete` with `id` per activation.
    #[must_use]
    pub fn row(&self, id: Uuid) -> TagRowCallbacks {
        let rename = {
            let callbacks = self.clone();
            Callback::from(move |label: String| callbacks.dispatch(TagAction::Rename { id, label }))
        };
        let delete = {
            let callbacks = self.clone();
            Callback::from(move |()| callbacks.dispatch(TagAction::Delete(id)))
        };
        TagRowCallbacks { rename, delete }
    }
}

/// Per-row callbacks for the tag editor.
#[derive(Clone, PartialEq)]
pub struct TagRowCallbacks {
    /// Receives the label as typed.
    pub rename: Callback<String>,
    /// Fired by the row's delete control.
    pub delete: Callback<()>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{AppStore, delete_tag, hydrate, rename_tag, select_tags};
    use notebook_models::{Notebook, Tag};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Calls<T> = Rc<RefCell<Vec<T>>>;

    fn recording() -> (TagCallbacks, Calls<(Uuid, String)>, Calls<Uuid>) {
        let updates: Calls<(Uuid, String)> = Rc::default();
        let deletes: Calls<Uuid> = Rc::default();
        let callbacks = TagCallbacks {
            on_update: {
                let updates = updates.clone();
                Callback::from(move |call: (Uuid, String)| updates.borrow_mut().push(call))
            },
            on_delete: {
                let deletes = deletes.clone();
                Callback::from(move |id: Uuid| deletes.borrow_mut().push(id))
            },
        };
        (callbacks, updates, deletes)
    }

    #[test]
    fn delete_emits_exactly_one_delete_call() {
        let (callbacks, updates, deletes) = recording();
        let id = Uuid::new_v4();
        callbacks.dispatch(TagAction::Delete(id));
        assert_eq!(*deletes.borrow(), vec![id]);
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn rename_forwards_id_and_label() {
        let (callbacks, updates, deletes) = recording();
        let id = Uuid::new_v4();
        callbacks.dispatch(TagAction::Rename {
            id,
            label: "office".to_string(),
        });
        assert_eq!(*updates.borrow(), vec![(id, "office".to_string())]);
        assert!(deletes.borrow().is_empty());
    }

    #[test]
    fn row_delete_fires_one_delete_for_its_tag() {
        let (callbacks, updates, deletes) = recording();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let row = callbacks.row(second);
        let _other = callbacks.row(first);

        row.delete.emit(());

        assert_eq!(*deletes.borrow(), vec![second]);
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn row_rename_emits_per_edit() {
        let (callbacks, updates, deletes) = recording();
        let id = Uuid::new_v4();
        let row = callbacks.row(id);

        row.rename.emit("of".to_string());
        row.rename.emit("office".to_string());

        assert_eq!(
            *updates.borrow(),
            vec![(id, "of".to_string()), (id, "office".to_string())]
        );
        assert!(deletes.borrow().is_empty());
    }

    #[test]
    fn deleting_through_callbacks_keeps_other_labels() {
        let work = Tag::new("work");
        let home = Tag::new("home");
        let store = Rc::new(RefCell::new(AppStore::default()));
        hydrate(
            &mut store.borrow_mut(),
            Notebook {
                notes: Vec::new(),
                tags: vec![work.clone(), home.clone()],
            },
        );
        let callbacks = TagCallbacks {
            on_update: {
                let store = store.clone();
                Callback::from(move |(id, label): (Uuid, String)| {
                    rename_tag(&mut store.borrow_mut(), id, label).expect("rename");
                })
            },
            on_delete: {
                let store = store.clone();
                Callback::from(move |id: Uuid| {
                    delete_tag(&mut store.borrow_mut(), id).expect("delete");
                })
            },
        };

        callbacks.dispatch(TagAction::Delete(work.id));

        assert_eq!(select_tags(&store.borrow()), vec![home]);
    }
}
