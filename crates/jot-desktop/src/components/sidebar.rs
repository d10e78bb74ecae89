//! Sidebar component
//!
//! Left pane holding the app header, search bar, new-note button, and the
//! notes list.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;

use super::{NoteList, PlusIcon, SearchBar};
use crate::state::AppContext;

/// Delay before focusing the title input of a fresh draft, so the editor has
/// rendered it by the time the script runs.
const FOCUS_DELAY_MS: u64 = 100;

const FOCUS_TITLE_SCRIPT: &str = r#"
(() => {
    const input = document.getElementById("note-title");
    if (input) { input.focus(); }
    return input !== null;
})()
"#;

#[component]
pub fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();

    let on_new_note = move |_| {
        let Some(controller) = ctx.controller() else {
            return;
        };
        controller.create_draft();
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(FOCUS_DELAY_MS)).await;
            let focused: Result<bool, _> = document::eval(FOCUS_TITLE_SCRIPT).join().await;
            if let Err(error) = focused {
                tracing::debug!("Focus script failed: {error}");
            }
        });
    };

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: 320px;
                height: 100%;
                display: flex;
                flex-direction: column;
                border-right: 1px solid #e4e6eb;
                background: #f8f9fa;
            ",

            div {
                class: "sidebar-header",
                style: " padding: 16px 16px 12px; ",

                h1 {
                    style: "font-size: 20px; font-weight: 600; color: #1c1e21; margin-bottom: 12px;",
                    "Notes"
                }
                SearchBar {}
                button {
                    class: "new-note-btn",
                    style: "
                        width: 100%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 6px;
                        padding: 8px 12px;
                        border: none;
                        border-radius: 6px;
                        background: #1a73e8;
                        color: #ffffff;
                        font-size: 14px;
                        cursor: pointer;
                    ",
                    onclick: on_new_note,
                    PlusIcon {}
                    "New Note"
                }
            }

            NoteList {}
        }
    }
}
