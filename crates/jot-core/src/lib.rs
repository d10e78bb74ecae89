//! jot-core - Core library for Jot
//!
//! This crate contains the note models, the REST API client, and the
//! controller that owns application state for the desktop interface.

pub mod api;
pub mod controller;
pub mod demo;
pub mod error;
pub mod format;
pub mod models;
pub mod util;
pub mod validate;

pub use controller::{AppState, NotesController};
pub use error::{Error, Result};
pub use models::{Note, NoteFields, NoteId};
