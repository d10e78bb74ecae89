//! Main application component

use std::rc::Rc;

use dioxus::prelude::*;

use jot_core::api::NotesApiClient;
use jot_core::{AppState, NotesController, Result};

use crate::components::{NoteEditor, Sidebar};
use crate::config::ApiConfig;
use crate::services::TokenStore;
use crate::state::AppContext;

/// Error shown when startup wiring fails before any request is made.
const INIT_FAILURE_MESSAGE: &str =
    "Failed to initialize the application. Please restart it.";

/// Root component wiring state, controller, and the two panes together.
#[component]
pub fn App() -> Element {
    let mut state = use_signal(AppState::default);
    let mut controller = use_signal(|| None::<Rc<NotesController<NotesApiClient>>>);
    let mut boot_started = use_signal(|| false);

    use_context_provider(|| AppContext { controller, state });

    // One-shot startup: build the API client, publish snapshots into the
    // state signal, and kick off the initial load.
    use_effect(move || {
        if boot_started() {
            return;
        }
        boot_started.set(true);

        match build_controller(state) {
            Ok(built) => {
                let built = Rc::new(built);
                controller.set(Some(built.clone()));
                spawn(async move {
                    built.initialize().await;
                });
            }
            Err(error) => {
                tracing::error!("Failed to initialize the API client: {error}");
                state.write().error = Some(INIT_FAILURE_MESSAGE.to_string());
            }
        }
    });

    rsx! {
        ErrorBoundary {
            handle_error: |_error: ErrorContext| rsx! {
                div {
                    class: "app-failure",
                    style: "
                        height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 8px;
                        font-family: system-ui, sans-serif;
                        color: #5f6368;
                    ",
                    h2 { "Error Loading Application" }
                    p { "There was an error loading the notes application. Please check the logs for details." }
                }
            },

            div {
                class: "app-container",
                style: "
                    display: flex;
                    height: 100vh;
                    font-family: system-ui, -apple-system, sans-serif;
                    background: #ffffff;
                ",
                Sidebar {}
                NoteEditor {}
            }
        }
    }
}

/// Build the controller from environment config and the keyring token.
///
/// A keyring failure is downgraded to anonymous access; a bad base URL is a
/// real error and surfaces as [`INIT_FAILURE_MESSAGE`].
fn build_controller(state: Signal<AppState>) -> Result<NotesController<NotesApiClient>> {
    let config = ApiConfig::from_env();
    let token = match TokenStore::default().load_token() {
        Ok(token) => token,
        Err(error) => {
            tracing::warn!("Could not read an API token from the keyring: {error}");
            None
        }
    };
    tracing::info!("Using notes API at {}", config.base_url());

    let client = NotesApiClient::new(config.base_url(), token)?;
    Ok(NotesController::new(client, move |snapshot| {
        let mut state = state;
        state.set(snapshot.clone());
    }))
}
