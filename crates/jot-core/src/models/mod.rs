//! Data models for Jot

mod note;

pub use note::{Note, NoteFields, NoteId, DRAFT_ID_PREFIX};
