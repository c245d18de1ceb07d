//! New-note form state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to a model draft only on save.

use notebook_models::{NoteDraft, Tag};
use uuid::Uuid;

/// Mutable new-note form state.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct NoteFormState {
    /// Title entered in the editor.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Tags picked in the multi-select.
    pub tag_ids: Vec<Uuid>,
    /// Pending label for an inline tag creation.
    pub new_tag: String,
}

impl NoteFormState {
    /// Attach a tag, ignoring duplicates.
    pub fn attach_tag(&mut self, id: Uuid) {
        if !self.tag_ids.contains(&id) {
            self.tag_ids.push(id);
        }
    }

    /// Drop selections that are no longer available.
    pub fn retain_available(&mut self, available: &[Tag]) {
        self.tag_ids
            .retain(|id| available.iter().any(|tag| &tag.id == id));
    }

    /// Convert the form into a note draft.
    ///
    /// # Errors
    /// Returns an error message when the title is blank.
    pub fn to_draft(&self) -> Result<NoteDraft, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        Ok(NoteDraft {
            title: title.to_string(),
            body: self.body.clone(),
            tag_ids: self.tag_ids.clone(),
        })
    }

    /// Pending tag label, trimmed, or `None` when blank.
    #[must_use]
    pub fn pending_tag(&self) -> Option<&str> {
        let label = self.new_tag.trim();
        (!label.is_empty()).then_some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_draft_requires_title() {
        let form = NoteFormState {
            title: "   ".to_string(),
            ..NoteFormState::default()
        };
        let err = form.to_draft().expect_err("title required");
        assert!(err.contains("Title"));
    }

    #[test]
    fn to_draft_carries_body_and_tags() {
        let id = Uuid::new_v4();
        let mut form = NoteFormState {
            title: " Plan ".to_string(),
            body: "line one\nline two".to_string(),
            ..NoteFormState::default()
        };
        form.attach_tag(id);
        form.attach_tag(id);
        let draft = form.to_draft().expect("draft");
        assert_eq!(draft.title, "Plan");
        assert_eq!(draft.body, "line one\nline two");
        assert_eq!(draft.tag_ids, vec![id]);
    }

    #[test]
    fn retain_available_drops_deleted_tags() {
        let kept = Tag::new("kept");
        let mut form = NoteFormState::default();
        form.attach_tag(kept.id);
        form.attach_tag(Uuid::new_v4());
        form.retain_available(&[kept.clone()]);
        assert_eq!(form.tag_ids, vec![kept.id]);
    }

    #[test]
    fn pending_tag_ignores_whitespace() {
        let mut form = NoteFormState::default();
        assert_eq!(form.pending_tag(), None);
        form.new_tag = "  ideas ".to_string();
        assert_eq!(form.pending_tag(), Some("ideas"));
    }
}
