//! The notes controller: canonical app state plus the operations that move it.

use std::cell::{Cell, RefCell};

use chrono::Utc;

use crate::api::NotesApi;
use crate::demo::{demo_notes, DEMO_MODE_WARNING};
use crate::models::{Note, NoteFields, NoteId};
use crate::validate::validate_note;

/// Snapshot of everything the UI renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Notes shown in the sidebar, newest first
    pub notes: Vec<Note>,
    /// The note open in the editor
    pub selected: Option<Note>,
    /// Query whose results the list currently shows
    pub search_query: String,
    /// A list load or search is in flight
    pub loading: bool,
    /// A save is in flight
    pub saving: bool,
    /// A delete is in flight
    pub deleting: bool,
    /// Last failure, shown until the next operation replaces or clears it
    pub error: Option<String>,
}

/// Owns the canonical [`AppState`] and pushes a fresh snapshot to the UI
/// after every change.
///
/// All operations take `&self`; state sits behind a `RefCell` and borrows
/// are never held across an await, so overlapping operations interleave the
/// way the UI actually drives them. Ticket counters decide which completion
/// still applies: whoever holds the newest ticket wins, and anything older
/// is dropped wholesale.
pub struct NotesController<A> {
    api: A,
    state: RefCell<AppState>,
    on_change: Box<dyn Fn(&AppState)>,
    list_ticket: Cell<u64>,
    select_ticket: Cell<u64>,
}

impl<A: NotesApi> NotesController<A> {
    /// Create a controller over `api`. `on_change` runs with the new
    /// snapshot after every state change.
    pub fn new(api: A, on_change: impl Fn(&AppState) + 'static) -> Self {
        Self {
            api,
            state: RefCell::new(AppState::default()),
            on_change: Box::new(on_change),
            list_ticket: Cell::new(0),
            select_ticket: Cell::new(0),
        }
    }

    /// Clone the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        (self.on_change)(&snapshot);
    }

    fn issue_list_ticket(&self) -> u64 {
        let ticket = self.list_ticket.get() + 1;
        self.list_ticket.set(ticket);
        ticket
    }

    fn list_ticket_is_current(&self, ticket: u64) -> bool {
        self.list_ticket.get() == ticket
    }

    fn issue_select_ticket(&self) -> u64 {
        let ticket = self.select_ticket.get() + 1;
        self.select_ticket.set(ticket);
        ticket
    }

    fn select_ticket_is_current(&self, ticket: u64) -> bool {
        self.select_ticket.get() == ticket
    }

    /// First load after startup.
    pub async fn initialize(&self) {
        tracing::debug!("Initializing notes controller");
        self.load_all().await;
    }

    /// Reload the full notes list.
    ///
    /// An unreachable backend swaps in the demo dataset instead of an
    /// error; any other failure clears the list and surfaces a message.
    /// If nothing is selected afterwards, the first note is.
    pub async fn load_all(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.error = None;
        }
        self.publish();

        let ticket = self.issue_list_ticket();
        let result = self.api.list().await;
        if !self.list_ticket_is_current(ticket) {
            tracing::debug!("Dropping superseded notes list response");
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(notes) => {
                    tracing::info!("Loaded {} notes", notes.len());
                    state.notes = notes;
                }
                Err(error) if error.is_unreachable() => {
                    tracing::warn!("Backend unreachable, switching to demo data: {error}");
                    state.notes = demo_notes(Utc::now());
                    state.error = Some(DEMO_MODE_WARNING.to_string());
                }
                Err(error) => {
                    tracing::error!("Failed to load notes: {error}");
                    state.notes.clear();
                    state.error = Some(error.user_message());
                }
            }
            if state.selected.is_none() {
                state.selected = state.notes.first().cloned();
            }
            state.loading = false;
        }
        self.publish();
    }

    /// Run a search and replace the list with its results.
    ///
    /// A query that is empty after trimming reloads the full list instead.
    /// A selection missing from the results is cleared; results are never
    /// auto-selected.
    pub async fn search(&self, query: String) {
        {
            let mut state = self.state.borrow_mut();
            state.search_query = query.clone();
            state.loading = true;
            state.error = None;
        }
        self.publish();

        if query.trim().is_empty() {
            self.load_all().await;
            return;
        }

        let ticket = self.issue_list_ticket();
        let result = self.api.search(&query).await;
        if !self.list_ticket_is_current(ticket) {
            tracing::debug!("Dropping superseded search response for {query:?}");
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(notes) => {
                    tracing::debug!("Search {query:?} matched {} notes", notes.len());
                    state.notes = notes;
                    let selected_listed = state
                        .selected
                        .as_ref()
                        .is_some_and(|selected| state.notes.iter().any(|note| note.id == selected.id));
                    if !selected_listed {
                        state.selected = None;
                    }
                }
                Err(error) => {
                    tracing::error!("Search failed for {query:?}: {error}");
                    state.notes.clear();
                    state.error = Some(error.user_message());
                }
            }
            state.loading = false;
        }
        self.publish();
    }

    /// Open a note in the editor.
    ///
    /// Prefers the copy already in the list and only fetches when the note
    /// is not listed. A fetch that loses to a newer selection is dropped.
    pub async fn select(&self, id: NoteId) {
        let local = self
            .state
            .borrow()
            .notes
            .iter()
            .find(|note| note.id == id)
            .cloned();
        if let Some(note) = local {
            // invalidate any fetch still in flight
            self.issue_select_ticket();
            {
                let mut state = self.state.borrow_mut();
                state.selected = Some(note);
                state.error = None;
            }
            self.publish();
            return;
        }

        let ticket = self.issue_select_ticket();
        let result = self.api.get(&id).await;
        if !self.select_ticket_is_current(ticket) {
            tracing::debug!("Dropping superseded fetch for note {id}");
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(note) => {
                    state.selected = Some(note);
                    state.error = None;
                }
                Err(error) => {
                    tracing::error!("Failed to open note {id}: {error}");
                    state.error = Some(error.user_message());
                }
            }
        }
        self.publish();
    }

    /// Open a fresh, unsaved draft in the editor.
    ///
    /// The draft stays out of the list until its first save.
    pub fn create_draft(&self) {
        self.issue_select_ticket();
        {
            let mut state = self.state.borrow_mut();
            state.selected = Some(Note::draft(Utc::now()));
            state.error = None;
        }
        self.publish();
    }

    /// Persist the selected note with `fields`.
    ///
    /// Invalid fields surface as an error without touching the network. A
    /// draft goes through create and lands at the top of the list; an
    /// existing note goes through update and is replaced in place. The
    /// server's copy becomes the selection either way.
    pub async fn save(&self, fields: NoteFields) {
        let selected = self.state.borrow().selected.clone();
        let Some(selected) = selected else {
            return;
        };

        let problems = validate_note(&fields.title, &fields.content);
        if !problems.is_empty() {
            {
                let mut state = self.state.borrow_mut();
                state.error = Some(problems.join("\n"));
            }
            self.publish();
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            state.saving = true;
            state.error = None;
        }
        self.publish();

        let was_draft = selected.id.is_draft();
        let result = if was_draft {
            self.api.create(&fields).await
        } else {
            self.api.update(&selected.id, &fields).await
        };

        {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(saved) => {
                    if was_draft {
                        state.notes.insert(0, saved.clone());
                    } else if let Some(position) =
                        state.notes.iter().position(|note| note.id == saved.id)
                    {
                        state.notes[position] = saved.clone();
                    }
                    state.selected = Some(saved);
                    state.error = None;
                    tracing::info!("Note saved successfully");
                }
                Err(error) => {
                    tracing::error!("Failed to save note: {error}");
                    state.error = Some(error.user_message());
                }
            }
            state.saving = false;
        }
        self.publish();
    }

    /// Delete note `id` on the server and drop it from the list.
    ///
    /// When it was the selected note, selection falls to the first
    /// remaining note, or clears.
    pub async fn delete(&self, id: NoteId) {
        {
            let mut state = self.state.borrow_mut();
            state.deleting = true;
            state.error = None;
        }
        self.publish();

        let result = self.api.delete(&id).await;

        {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(()) => {
                    state.notes.retain(|note| note.id != id);
                    let was_selected = state.selected.as_ref().is_some_and(|note| note.id == id);
                    if was_selected {
                        state.selected = state.notes.first().cloned();
                    }
                    tracing::info!("Note deleted successfully");
                }
                Err(error) => {
                    tracing::error!("Failed to delete note {id}: {error}");
                    state.error = Some(error.user_message());
                }
            }
            state.deleting = false;
        }
        self.publish();
    }
}
