//! Decoding of the stored notebook snapshot.
//!
//! # Design
//! - A missing key is a fresh install.
//! - Text that does not parse is kept verbatim so the caller can back it up
//!   before anything else is written under the snapshot key.

use notebook_models::Notebook;

/// Outcome of reading the notebook key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotLoad {
    /// Nothing stored yet.
    Missing,
    /// Snapshot parsed successfully.
    Loaded(Notebook),
    /// Stored text that could not be parsed.
    Corrupt {
        /// Raw stored text.
        raw: String,
        /// Parser error message.
        reason: String,
    },
}

impl SnapshotLoad {
    /// Raw text worth preserving before the key is overwritten.
    #[must_use]
    pub fn backup(&self) -> Option<&str> {
        match self {
            Self::Corrupt { raw, .. } => Some(raw),
            Self::Missing | Self::Loaded(_) => None,
        }
    }

    /// Notebook to start the session with; unreadable data yields an empty one.
    #[must_use]
    pub fn into_notebook(self) -> Notebook {
        match self {
            Self::Loaded(notebook) => notebook,
            Self::Missing | Self::Corrupt { .. } => Notebook::default(),
        }
    }
}

/// Decode the raw value stored under the notebook key.
#[must_use]
pub fn decode_snapshot(raw: Option<String>) -> SnapshotLoad {
    let Some(raw) = raw else {
        return SnapshotLoad::Missing;
    };
    match serde_json::from_str::<Notebook>(&raw) {
        Ok(notebook) => SnapshotLoad::Loaded(notebook),
        Err(err) => SnapshotLoad::Corrupt {
            raw,
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebook_models::Tag;

    #[test]
    fn missing_key_starts_empty() {
        let load = decode_snapshot(None);
        assert_eq!(load, SnapshotLoad::Missing);
        assert_eq!(load.backup(), None);
        assert_eq!(load.into_notebook(), Notebook::default());
    }

    #[test]
    fn stored_snapshot_round_trips() {
        let notebook = Notebook {
            notes: Vec::new(),
            tags: vec![Tag::new("work")],
        };
        let raw = serde_json::to_string(&notebook).expect("serialize");
        let load = decode_snapshot(Some(raw));
        assert_eq!(load.backup(), None);
        assert_eq!(load.into_notebook(), notebook);
    }

    #[test]
    fn unparseable_snapshot_keeps_raw_text_for_backup() {
        let load = decode_snapshot(Some("{\"notes\": [".to_string()));
        assert_eq!(load.backup(), Some("{\"notes\": ["));
        assert!(matches!(&load, SnapshotLoad::Corrupt { reason, .. } if !reason.is_empty()));
        assert_eq!(load.into_notebook(), Notebook::default());
    }
}
