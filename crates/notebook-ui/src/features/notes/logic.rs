//! Note filtering.
//!
//! # Design
//! - A note matches when the title query and the tag selection both match.
//! - Empty inputs are permissive; input order is preserved.

use crate::features::notes::state::NoteFilters;
use notebook_models::NoteSummary;
use uuid::Uuid;

/// Case-insensitive substring match. The query is not trimmed.
#[must_use]
pub fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Whether `note` carries every selected tag.
#[must_use]
pub fn tags_match(note: &NoteSummary, selected: &[Uuid]) -> bool {
    selected.iter().all(|id| note.has_tag(id))
}

/// Apply `filters` to `notes`, keeping the input order.
#[must_use]
pub fn filter_notes(notes: &[NoteSummary], filters: &NoteFilters) -> Vec<NoteSummary> {
    if filters.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| {
            title_matches(&note.title, &filters.title) && tags_match(note, &filters.tag_ids)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_models::Tag;

    fn note(title: &str, tags: &[Tag]) -> NoteSummary {
        NoteSummary {
            id: Uuid::new_v4(),
            title: title.to_string(),
            tags: tags.to_vec(),
        }
    }

    fn titles(notes: &[NoteSummary]) -> Vec<&str> {
        notes.iter().map(|note| note.title.as_str()).collect()
    }

    #[test]
    fn title_query_is_case_insensitive_substring() {
        let work = Tag::new("work");
        let notes = vec![note("Groceries", &[]), note("Work plan", &[work])];
        let filters = NoteFilters {
            title: "work".to_string(),
            tag_ids: Vec::new(),
        };
        assert_eq!(titles(&filter_notes(&notes, &filters)), vec!["Work plan"]);
        assert!(title_matches("Work plan", "PLAN"));
        assert!(!title_matches("Groceries", "work"));
    }

    #[test]
    fn selected_tags_must_all_be_present() {
        let work = Tag::new("work");
        let urgent = Tag::new("urgent");
        let notes = vec![
            note("Groceries", &[]),
            note("Work plan", &[work.clone()]),
            note("Deadline", &[work.clone(), urgent.clone()]),
        ];
        let only_work = NoteFilters {
            title: String::new(),
            tag_ids: vec![work.id],
        };
        assert_eq!(
            titles(&filter_notes(&notes, &only_work)),
            vec!["Work plan", "Deadline"]
        );
        let both = NoteFilters {
            title: String::new(),
            tag_ids: vec![work.id, urgent.id],
        };
        assert_eq!(titles(&filter_notes(&notes, &both)), vec!["Deadline"]);
    }

    #[test]
    fn empty_filters_keep_every_note_in_order() {
        let notes = vec![note("b", &[]), note("a", &[]), note("c", &[])];
        assert_eq!(
            titles(&filter_notes(&notes, &NoteFilters::default())),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn whitespace_query_is_not_trimmed() {
        let notes = vec![note("Groceries", &[]), note("Work plan", &[])];
        let filters = NoteFilters {
            title: " ".to_string(),
            tag_ids: Vec::new(),
        };
        assert_eq!(titles(&filter_notes(&notes, &filters)), vec!["Work plan"]);
    }

    #[test]
    fn unknown_selected_tag_matches_nothing() {
        let notes = vec![note("Groceries", &[Tag::new("home")])];
        let filters = NoteFilters {
            title: String::new(),
            tag_ids: vec![Uuid::new_v4()],
        };
        assert!(filter_notes(&notes, &filters).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let work = Tag::new("work");
        let notes = vec![
            note("Work plan", &[work.clone()]),
            note("Workout", &[]),
            note("Weekend", &[work.clone()]),
        ];
        let filters = NoteFilters {
            title: "WORK".to_string(),
            tag_ids: vec![work.id],
        };
        let once = filter_notes(&notes, &filters);
        let twice = filter_notes(&once, &filters);
        assert_eq!(once, twice);
        assert_eq!(titles(&once), vec!["Work plan"]);
    }

    #[test]
    fn unicode_titles_fold_case() {
        let notes = vec![note("ÜBER Notes", &[]), note("Groceries", &[])];
        let filters = NoteFilters {
            title: "über".to_string(),
            tag_ids: Vec::new(),
        };
        assert_eq!(titles(&filter_notes(&notes, &filters)), vec!["ÜBER Notes"]);
    }

    #[test]
    fn predicate_helpers_agree_with_filter() {
        let work = Tag::new("work");
        let notes = vec![
            note("Alpha", &[work.clone()]),
            note("alphabet", &[]),
            note("Beta", &[work.clone()]),
        ];
        let filters = NoteFilters {
            title: "ALPHA".to_string(),
            tag_ids: vec![work.id],
        };
        let expected: Vec<NoteSummary> = notes
            .iter()
            .filter(|n| title_matches(&n.title, &filters.title) && tags_match(n, &filters.tag_ids))
            .cloned()
            .collect();
        assert_eq!(filter_notes(&notes, &filters), expected);
    }
}
