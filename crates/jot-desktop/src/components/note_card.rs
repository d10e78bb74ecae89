//! Note card component

use dioxus::prelude::*;

/// A single row in the sidebar list.
///
/// Purely presentational: the parent supplies already-formatted text and
/// handles the click. Title and preview are rendered as text nodes, so note
/// content can never inject markup.
#[component]
pub fn NoteCard(
    title: String,
    preview: String,
    date_label: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let background = if is_selected { "#e8f0fe" } else { "transparent" };
    let accent = if is_selected {
        "3px solid #1a73e8"
    } else {
        "3px solid transparent"
    };

    rsx! {
        div {
            class: if is_selected { "note-card selected" } else { "note-card" },
            style: "
                padding: 12px 16px;
                border-bottom: 1px solid #eef0f2;
                border-left: {accent};
                background: {background};
                cursor: pointer;
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "note-card-title",
                style: "
                    font-weight: 500;
                    font-size: 14px;
                    color: #1c1e21;
                    margin-bottom: 4px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{title}"
            }
            div {
                class: "note-card-preview",
                style: "
                    font-size: 12px;
                    color: #5f6368;
                    margin-bottom: 4px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{preview}"
            }
            div {
                class: "note-card-date",
                style: "font-size: 11px; color: #9aa0a6;",
                "{date_label}"
            }
        }
    }
}
