//! Note editor component
//!
//! Right pane: title and content inputs for the selected note, save and
//! delete actions, and an inline error banner.

use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use jot_core::{NoteFields, NoteId};

use super::{FileTextIcon, SaveIcon, TrashIcon};
use crate::state::AppContext;

#[component]
pub fn NoteEditor() -> Element {
    let ctx = use_context::<AppContext>();
    let state = ctx.snapshot();

    // The inputs hold local copies of the selected note's fields so typing
    // never writes into the shared snapshot.
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut seeded_note_id = use_signal(|| None::<NoteId>);

    // Reseed the inputs whenever a different note becomes selected. A save
    // keeps the same id in place (drafts aside), so in-flight typing is not
    // clobbered by the publish that follows it.
    use_effect(move || {
        let selected = ctx.snapshot().selected;
        let selected_id = selected.as_ref().map(|note| note.id.clone());

        if selected_id != *seeded_note_id.read() {
            if let Some(note) = selected {
                title.set(note.title);
                content.set(note.content);
            } else {
                title.set(String::new());
                content.set(String::new());
            }
            seeded_note_id.set(selected_id);
        }
    });

    let perform_save = move || {
        let snapshot = ctx.snapshot();
        if snapshot.saving || snapshot.deleting {
            return;
        }
        let Some(controller) = ctx.controller() else {
            return;
        };
        let fields = NoteFields::new(title(), content());
        spawn(async move {
            controller.save(fields).await;
        });
    };

    let on_keydown = move |evt: Event<KeyboardData>| {
        // Ctrl+S / Cmd+S saves from either input
        if (evt.modifiers().ctrl() || evt.modifiers().meta())
            && evt.key() == Key::Character("s".to_string())
        {
            evt.prevent_default();
            perform_save();
        }
    };

    let Some(selected) = state.selected.clone() else {
        return rsx! {
            div {
                class: "editor-pane",
                style: "
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #ffffff;
                ",
                div {
                    class: "editor-empty",
                    style: " text-align: center; color: #9aa0a6; ",
                    FileTextIcon { size: 48 }
                    h2 {
                        style: "font-size: 18px; color: #5f6368; margin: 12px 0 4px;",
                        "Select a note to edit"
                    }
                    p {
                        style: "font-size: 13px;",
                        "Choose a note from the sidebar or create a new one to get started."
                    }
                }
            }
        };
    };

    let busy = state.saving || state.deleting;
    let is_draft = selected.id.is_draft();
    let delete_id = selected.id.clone();

    let on_delete = move |_| {
        let snapshot = ctx.snapshot();
        if snapshot.saving || snapshot.deleting {
            return;
        }
        let Some(controller) = ctx.controller() else {
            return;
        };
        let id = delete_id.clone();
        spawn(async move {
            let choice = AsyncMessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Delete note")
                .set_description(
                    "Are you sure you want to delete this note? This action cannot be undone.",
                )
                .set_buttons(MessageButtons::OkCancel)
                .show()
                .await;
            if choice == MessageDialogResult::Ok {
                controller.delete(id).await;
            }
        });
    };

    rsx! {
        div {
            class: "editor-pane",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                background: #ffffff;
            ",

            div {
                class: "editor-toolbar",
                style: "
                    display: flex;
                    justify-content: flex-end;
                    gap: 8px;
                    padding: 12px 16px;
                    border-bottom: 1px solid #eef0f2;
                ",

                button {
                    class: "save-btn",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 6px 14px;
                        border: none;
                        border-radius: 6px;
                        background: #1a73e8;
                        color: #ffffff;
                        font-size: 13px;
                        cursor: pointer;
                    ",
                    disabled: busy,
                    onclick: move |_| perform_save(),
                    SaveIcon {}
                    if state.saving { "Saving..." } else { "Save" }
                }
                if !is_draft {
                    button {
                        class: "delete-btn",
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 6px;
                            padding: 6px 14px;
                            border: 1px solid #d93025;
                            border-radius: 6px;
                            background: transparent;
                            color: #d93025;
                            font-size: 13px;
                            cursor: pointer;
                        ",
                        disabled: busy,
                        onclick: on_delete,
                        TrashIcon {}
                        if state.deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }

            if let Some(error) = state.error.clone() {
                div {
                    class: "editor-error",
                    style: "
                        margin: 12px 16px 0;
                        padding: 10px 12px;
                        border-radius: 6px;
                        background: #fdeded;
                        color: #5f2120;
                        font-size: 13px;
                        white-space: pre-line;
                    ",
                    "{error}"
                }
            }

            input {
                id: "note-title",
                r#type: "text",
                class: "editor-title",
                style: "
                    border: none;
                    outline: none;
                    padding: 16px 16px 8px;
                    font-size: 22px;
                    font-weight: 600;
                    color: #1c1e21;
                    background: transparent;
                ",
                placeholder: "Note title...",
                value: "{title}",
                disabled: busy,
                oninput: move |evt| title.set(evt.value()),
                onkeydown: on_keydown,
            }
            textarea {
                id: "note-content",
                class: "editor-content",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    resize: none;
                    padding: 8px 16px 16px;
                    font-family: inherit;
                    font-size: 14px;
                    line-height: 1.6;
                    color: #1c1e21;
                    background: transparent;
                ",
                placeholder: "Start writing your note...",
                value: "{content}",
                disabled: busy,
                oninput: move |evt| content.set(evt.value()),
                onkeydown: on_keydown,
            }
        }
    }
}
