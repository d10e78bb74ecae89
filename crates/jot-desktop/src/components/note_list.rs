//! Note list component

use chrono::Local;
use dioxus::prelude::*;

use jot_core::format::{date_label, note_preview};

use super::NoteCard;
use crate::state::AppContext;

/// Longest preview shown under a note title.
const PREVIEW_MAX_CHARS: usize = 80;

/// Scrollable list of note cards, with loading and empty states.
#[component]
pub fn NoteList() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.snapshot();
    let selected_id = state.selected.as_ref().map(|note| note.id.clone());
    let notes = state.notes.clone();
    let now = Local::now();

    rsx! {
        div {
            class: "note-list",
            style: " flex: 1; overflow-y: auto; ",

            if state.loading {
                div {
                    class: "note-list-loading",
                    style: " padding: 24px; text-align: center; color: #9aa0a6; font-size: 13px; ",
                    "Loading notes..."
                }
            } else if notes.is_empty() {
                div {
                    class: "note-list-empty",
                    style: " padding: 32px 20px; text-align: center; ",
                    h3 {
                        style: "font-size: 15px; color: #1c1e21; margin-bottom: 8px;",
                        "No notes found"
                    }
                    p {
                        style: "font-size: 13px; color: #5f6368;",
                        if state.search_query.trim().is_empty() {
                            "Create your first note to get started."
                        } else {
                            "Try adjusting your search query."
                        }
                    }
                }
            } else {
                for note in notes {
                    {
                        let note_id = note.id.clone();
                        let click_id = note.id.clone();
                        let is_selected = selected_id.as_ref() == Some(&note.id);
                        let title = note.display_title().to_string();
                        let preview = note_preview(&note.content, PREVIEW_MAX_CHARS);
                        let date_text = date_label(&note.updated_at.with_timezone(&Local), &now);

                        rsx! {
                            NoteCard {
                                key: "{note_id}",
                                title,
                                preview,
                                date_label: date_text,
                                is_selected,
                                onclick: move |_| {
                                    let Some(controller) = ctx.controller() else {
                                        return;
                                    };
                                    let id = click_id.clone();
                                    spawn(async move {
                                        controller.select(id).await;
                                    });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
