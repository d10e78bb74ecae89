//! Application state management
//!
//! Shared context accessible via Dioxus context providers.

use std::rc::Rc;

use dioxus::prelude::*;

use jot_core::api::NotesApiClient;
use jot_core::{AppState, NotesController};

/// Shared handle to the controller and its latest published snapshot.
///
/// The controller slot starts empty and is filled once startup wiring
/// succeeds; event handlers bail out quietly until then.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller owning the canonical application state
    pub controller: Signal<Option<Rc<NotesController<NotesApiClient>>>>,
    /// Latest snapshot published by the controller, read by the views
    pub state: Signal<AppState>,
}

impl AppContext {
    /// Clone the latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        (self.state)()
    }

    /// The controller, once startup wiring has produced one.
    #[must_use]
    pub fn controller(&self) -> Option<Rc<NotesController<NotesApiClient>>> {
        (self.controller)()
    }
}
