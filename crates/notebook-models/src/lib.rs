#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared note and tag model for the Notebook UI.
//!
//! The [`Notebook`] snapshot is the single owner of notes and tags. Views only
//! read [`NoteSummary`] projections and forward rename/delete intents back to
//! the notebook, which keeps the "notes only reference existing tags"
//! invariant intact.

mod error;

pub use error::{NotebookError, NotebookResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User-defined label attachable to notes. Identity is the `id`; the label is
/// free display text and may be edited at any time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Stable tag identifier.
    pub id: Uuid,
    /// Display label.
    pub label: String,
}

impl Tag {
    /// Build a tag with a fresh identifier.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }
}

/// Persisted note shape. Tags are referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredNote {
    /// Stable note identifier.
    pub id: Uuid,
    /// Note title shown on cards.
    pub title: String,
    /// Free-form body text.
    #[serde(default)]
    pub body: String,
    /// Identifiers of the tags attached to this note.
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

impl StoredNote {
    /// Resolve the note's tag ids against `tags`.
    ///
    /// The resolved list follows the order of `tags`; ids without a matching
    /// tag are skipped.
    #[must_use]
    pub fn summary(&self, tags: &[Tag]) -> NoteSummary {
        NoteSummary {
            id: self.id,
            title: self.title.clone(),
            tags: tags
                .iter()
                .filter(|tag| self.tag_ids.contains(&tag.id))
                .cloned()
                .collect(),
        }
    }
}

/// Simplified note view consumed by the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    /// Note identifier, used for navigation.
    pub id: Uuid,
    /// Note title.
    pub title: String,
    /// Tags resolved from the available tag collection.
    pub tags: Vec<Tag>,
}

impl NoteSummary {
    /// Whether the note carries a tag with the given id.
    #[must_use]
    pub fn has_tag(&self, id: &Uuid) -> bool {
        self.tags.iter().any(|tag| &tag.id == id)
    }
}

/// Input for creating a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    /// Title; surrounding whitespace is trimmed on create.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Tags to attach. Every id must already exist.
    pub tag_ids: Vec<Uuid>,
}

/// Snapshot of every note and tag owned by the data layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Notes in creation order.
    #[serde(default)]
    pub notes: Vec<StoredNote>,
    /// Available tags in creation order.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Notebook {
    /// Look up a tag by id.
    #[must_use]
    pub fn tag(&self, id: &Uuid) -> Option<&Tag> {
        self.tags.iter().find(|tag| &tag.id == id)
    }

    /// Resolve a single note for detail views.
    #[must_use]
    pub fn note(&self, id: &Uuid) -> Option<(&StoredNote, NoteSummary)> {
        self.notes
            .iter()
            .find(|note| &note.id == id)
            .map(|note| (note, note.summary(&self.tags)))
    }

    /// Resolve every note against the current tags, preserving note order.
    #[must_use]
    pub fn summaries(&self) -> Vec<NoteSummary> {
        self.notes
            .iter()
            .map(|note| note.summary(&self.tags))
            .collect()
    }

    /// Replace a tag's label. Labels are not validated so edits can pass
    /// through intermediate states such as an empty field.
    ///
    /// # Errors
    /// Returns [`NotebookError::UnknownTag`] when no tag has the given id.
    pub fn rename_tag(&mut self, id: Uuid, label: impl Into<String>) -> NotebookResult<()> {
        let tag = self
            .tags
            .iter_mut()
            .find(|tag| tag.id == id)
            .ok_or(NotebookError::UnknownTag { id })?;
        tag.label = label.into();
        Ok(())
    }

    /// Remove a tag and strip its id from every note.
    ///
    /// # Errors
    /// Returns [`NotebookError::UnknownTag`] when no tag has the given id.
    pub fn delete_tag(&mut self, id: Uuid) -> NotebookResult<Tag> {
        let index = self
            .tags
            .iter()
            .position(|tag| tag.id == id)
            .ok_or(NotebookError::UnknownTag { id })?;
        let removed = self.tags.remove(index);
        for note in &mut self.notes {
            note.tag_ids.retain(|tag_id| *tag_id != id);
        }
        Ok(removed)
    }

    /// Create a tag with a fresh id.
    ///
    /// # Errors
    /// Returns [`NotebookError::EmptyLabel`] when the trimmed label is empty.
    pub fn create_tag(&mut self, label: &str) -> NotebookResult<Tag> {
        let label = label.trim();
        if label.is_empty() {
            return Err(NotebookError::EmptyLabel);
        }
        let tag = Tag::new(label);
        self.tags.push(tag.clone());
        Ok(tag)
    }

    /// Create a note from a draft.
    ///
    /// # Errors
    /// Returns [`NotebookError::EmptyTitle`] for a blank title and
    /// [`NotebookError::UnknownTag`] when the draft references a missing tag.
    pub fn create_note(&mut self, draft: NoteDraft) -> NotebookResult<StoredNote> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(NotebookError::EmptyTitle);
        }
        if let Some(id) = draft.tag_ids.iter().find(|id| self.tag(id).is_none()) {
            return Err(NotebookError::UnknownTag { id: *id });
        }
        let mut tag_ids = Vec::with_capacity(draft.tag_ids.len());
        for id in draft.tag_ids {
            if !tag_ids.contains(&id) {
                tag_ids.push(id);
            }
        }
        let note = StoredNote {
            id: Uuid::new_v4(),
            title: title.to_string(),
            body: draft.body,
            tag_ids,
        };
        self.notes.push(note.clone());
        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Notebook, Tag, Tag) {
        let work = Tag::new("work");
        let home = Tag::new("home");
        let notebook = Notebook {
            notes: vec![
                StoredNote {
                    id: Uuid::new_v4(),
                    title: "Groceries".to_string(),
                    body: String::new(),
                    tag_ids: vec![home.id],
                },
                StoredNote {
                    id: Uuid::new_v4(),
                    title: "Work plan".to_string(),
                    body: "Q3 goals".to_string(),
                    tag_ids: vec![work.id, home.id],
                },
            ],
            tags: vec![work.clone(), home.clone()],
        };
        (notebook, work, home)
    }

    #[test]
    fn summary_follows_available_tag_order_and_skips_missing_ids() {
        let (notebook, work, home) = sample();
        let note = StoredNote {
            id: Uuid::new_v4(),
            title: "Mixed".to_string(),
            body: String::new(),
            tag_ids: vec![home.id, Uuid::new_v4(), work.id],
        };
        let summary = note.summary(&notebook.tags);
        assert_eq!(summary.tags, vec![work, home]);
    }

    #[test]
    fn rename_tag_updates_only_the_target_label() {
        let (mut notebook, work, home) = sample();
        notebook.rename_tag(work.id, "office").expect("rename");
        assert_eq!(notebook.tag(&work.id).map(|t| t.label.as_str()), Some("office"));
        assert_eq!(notebook.tag(&home.id).map(|t| t.label.as_str()), Some("home"));
        let summaries = notebook.summaries();
        assert_eq!(summaries[1].tags[0].label, "office");
    }

    #[test]
    fn rename_tag_accepts_empty_labels() {
        let (mut notebook, work, _) = sample();
        notebook.rename_tag(work.id, "").expect("rename");
        assert_eq!(notebook.tag(&work.id).map(|t| t.label.as_str()), Some(""));
    }

    #[test]
    fn rename_unknown_tag_errors() {
        let (mut notebook, _, _) = sample();
        let id = Uuid::new_v4();
        let err = notebook.rename_tag(id, "x").expect_err("unknown tag");
        assert_eq!(err, NotebookError::UnknownTag { id });
    }

    #[test]
    fn delete_tag_strips_references_and_keeps_other_tags() {
        let (mut notebook, work, home) = sample();
        let removed = notebook.delete_tag(home.id).expect("delete");
        assert_eq!(removed.id, home.id);
        assert_eq!(notebook.tags, vec![work.clone()]);
        assert!(notebook.notes.iter().all(|note| !note.tag_ids.contains(&home.id)));
        assert_eq!(notebook.notes[1].tag_ids, vec![work.id]);
        assert!(notebook.delete_tag(home.id).is_err());
    }

    #[test]
    fn create_note_trims_title_and_dedupes_tags() {
        let (mut notebook, work, _) = sample();
        let note = notebook
            .create_note(NoteDraft {
                title: "  Standup  ".to_string(),
                body: "notes".to_string(),
                tag_ids: vec![work.id, work.id],
            })
            .expect("create");
        assert_eq!(note.title, "Standup");
        assert_eq!(note.tag_ids, vec![work.id]);
        assert_eq!(notebook.notes.len(), 3);
        assert!(notebook.note(&note.id).is_some());
    }

    #[test]
    fn create_note_rejects_blank_title_and_unknown_tags() {
        let (mut notebook, _, _) = sample();
        let blank = notebook.create_note(NoteDraft {
            title: "   ".to_string(),
            ..NoteDraft::default()
        });
        assert_eq!(blank, Err(NotebookError::EmptyTitle));

        let missing = Uuid::new_v4();
        let unknown = notebook.create_note(NoteDraft {
            title: "Plan".to_string(),
            tag_ids: vec![missing],
            ..NoteDraft::default()
        });
        assert_eq!(unknown, Err(NotebookError::UnknownTag { id: missing }));
        assert_eq!(notebook.notes.len(), 2);
    }

    #[test]
    fn create_tag_requires_label() {
        let mut notebook = Notebook::default();
        assert_eq!(notebook.create_tag("  "), Err(NotebookError::EmptyLabel));
        let tag = notebook.create_tag(" ideas ").expect("create");
        assert_eq!(tag.label, "ideas");
        assert_eq!(notebook.tags.len(), 1);
    }

    #[test]
    fn snapshot_tolerates_missing_optional_fields() {
        let id = Uuid::new_v4();
        let raw = format!(r#"{{"notes":[{{"id":"{id}","title":"Loose"}}]}}"#);
        let notebook: Notebook = serde_json::from_str(&raw).expect("parse");
        assert_eq!(notebook.notes[0].id, id);
        assert!(notebook.notes[0].tag_ids.is_empty());
        assert!(notebook.tags.is_empty());
    }
}
