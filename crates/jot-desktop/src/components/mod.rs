//! UI Components
//!
//! Reusable UI components for the desktop application.

mod icons;
mod note_card;
mod note_editor;
mod note_list;
mod search_bar;
mod sidebar;

pub use icons::{FileTextIcon, PlusIcon, SaveIcon, SearchIcon, TrashIcon};
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
