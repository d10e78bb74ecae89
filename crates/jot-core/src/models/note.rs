//! Note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix that marks a note ID as a local draft the server has never seen
pub const DRAFT_ID_PREFIX: &str = "temp_";

/// Identifier for a note
///
/// Server-issued identifiers are treated as opaque strings. Draft
/// identifiers are minted locally by [`NoteId::new_draft`] and carry the
/// `temp_` prefix until the first successful save replaces them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Create a fresh draft ID using UUID v7 (time-sortable)
    #[must_use]
    pub fn new_draft() -> Self {
        Self(format!("{DRAFT_ID_PREFIX}{}", Uuid::now_v7()))
    }

    /// Whether this ID belongs to an unsaved local draft
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_core::models::NoteId;
    ///
    /// assert!(NoteId::new_draft().is_draft());
    /// assert!(!NoteId::from("42").is_draft());
    /// ```
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.0.starts_with(DRAFT_ID_PREFIX)
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A note as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Note title
    #[serde(default)]
    pub title: String,
    /// Note body
    #[serde(default)]
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create an empty local draft stamped with `now`
    #[must_use]
    pub fn draft(now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::new_draft(),
            title: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this note has never been persisted to the server
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.id.is_draft()
    }

    /// Title for display, substituting a placeholder when blank
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }
}

/// The editable fields submitted when creating or updating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteFields {
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
}

impl NoteFields {
    /// Build fields from raw editor input, trimming surrounding whitespace
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
            content: content.into().trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_id_unique() {
        let id1 = NoteId::new_draft();
        let id2 = NoteId::new_draft();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_draft_id_prefix() {
        let id = NoteId::new_draft();
        assert!(id.as_str().starts_with(DRAFT_ID_PREFIX));
        assert!(id.is_draft());
        assert!(!NoteId::from("8f2c1a").is_draft());
    }

    #[test]
    fn test_note_draft() {
        let now = Utc::now();
        let note = Note::draft(now);
        assert!(note.is_draft());
        assert!(note.title.is_empty());
        assert!(note.content.is_empty());
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn test_display_title() {
        let now = Utc::now();
        let mut note = Note::draft(now);
        assert_eq!(note.display_title(), "Untitled");

        note.title = "   ".to_string();
        assert_eq!(note.display_title(), "Untitled");

        note.title = "Groceries".to_string();
        assert_eq!(note.display_title(), "Groceries");
    }

    #[test]
    fn test_note_fields_trim() {
        let fields = NoteFields::new("  Title  ", "\n\nbody text\n");
        assert_eq!(fields.title, "Title");
        assert_eq!(fields.content, "body text");
    }
}
