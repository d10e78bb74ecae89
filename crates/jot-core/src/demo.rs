//! Built-in demo notes shown when the backend is unreachable.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Note, NoteId};

/// Banner text shown while the app is running on demo data.
pub const DEMO_MODE_WARNING: &str =
    "Backend not available - using demo mode. Your changes will not be saved.";

/// Build the demo dataset, stamped relative to `now`.
///
/// The first note is dated `now` and the others one and two days earlier,
/// so the sidebar shows the usual spread of date labels.
#[must_use]
pub fn demo_notes(now: DateTime<Utc>) -> Vec<Note> {
    let yesterday = now - Duration::days(1);
    let two_days_ago = now - Duration::days(2);
    vec![
        Note {
            id: NoteId::from("demo1"),
            title: "Welcome to Notes App".to_string(),
            content: "This is a demo note. The backend is not currently available, so this is \
                      running in demo mode.\n\nYou can still explore the interface and see how \
                      the app works!\n\nFeatures:\n- Create and edit notes\n- Search through \
                      notes\n- Modern, clean interface\n- Responsive design"
                .to_string(),
            created_at: now,
            updated_at: now,
        },
        Note {
            id: NoteId::from("demo2"),
            title: "Getting Started".to_string(),
            content: "To use this notes app:\n\n1. Click \"New Note\" to create a note\n2. Type \
                      your title and content\n3. Use Ctrl+S to save (when backend is \
                      available)\n4. Use the search box to find notes\n5. Click on any note in \
                      the sidebar to edit it\n\nThis demo shows the full interface without a \
                      backend connection."
                .to_string(),
            created_at: yesterday,
            updated_at: yesterday,
        },
        Note {
            id: NoteId::from("demo3"),
            title: "Features Overview".to_string(),
            content: "This notes application includes:\n\n\u{2705} Clean, modern design\n\u{2705} \
                      Real-time search\n\u{2705} Responsive layout\n\u{2705} Keyboard \
                      shortcuts\n\u{2705} Auto-save functionality\n\u{2705} Note preview in \
                      sidebar\n\u{2705} Date formatting\n\nThe app is built with Rust and \
                      Dioxus for a fast native experience."
                .to_string(),
            created_at: two_days_ago,
            updated_at: two_days_ago,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_dataset_has_three_persisted_notes() {
        let notes = demo_notes(Utc::now());
        assert_eq!(notes.len(), 3);
        assert!(notes.iter().all(|note| !note.is_draft()));
        assert_eq!(notes[0].title, "Welcome to Notes App");
        assert_eq!(notes[1].title, "Getting Started");
        assert_eq!(notes[2].title, "Features Overview");
    }

    #[test]
    fn demo_notes_are_dated_relative_to_now() {
        let now = Utc::now();
        let notes = demo_notes(now);
        assert_eq!(notes[0].updated_at, now);
        assert_eq!(notes[1].updated_at, now - Duration::days(1));
        assert_eq!(notes[2].updated_at, now - Duration::days(2));
    }
}
