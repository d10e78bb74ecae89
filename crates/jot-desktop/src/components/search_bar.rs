//! Search bar component

use std::time::Duration;

use dioxus::prelude::*;

use jot_core::util::CoalesceCounter;

use super::SearchIcon;
use crate::state::AppContext;

/// How long typing must pause before a search is dispatched.
const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Search input that drives the notes list.
///
/// The input echoes every keystroke, but queries are debounced: each
/// keystroke takes a ticket and sleeps, and only the ticket still current
/// after the quiet window reaches the controller.
#[component]
pub fn SearchBar() -> Element {
    let ctx = use_context::<AppContext>();
    let mut query = use_signal(String::new);
    let mut tickets = use_signal(CoalesceCounter::default);

    let on_input = move |evt: Event<FormData>| {
        let text = evt.value();
        query.set(text.clone());
        let ticket = tickets.write().bump();
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
            if !tickets().is_latest(ticket) {
                // a newer keystroke owns the window
                return;
            }
            let Some(controller) = ctx.controller() else {
                return;
            };
            controller.search(text).await;
        });
    };

    rsx! {
        div {
            class: "search-bar",
            style: " position: relative; margin-bottom: 12px; ",

            span {
                style: "
                    position: absolute;
                    left: 10px;
                    top: 50%;
                    transform: translateY(-50%);
                    display: flex;
                    color: #9aa0a6;
                    pointer-events: none;
                ",
                SearchIcon {}
            }
            input {
                r#type: "text",
                class: "search-input",
                placeholder: "Search notes...",
                value: "{query}",
                oninput: on_input,
                style: "
                    width: 100%;
                    padding: 8px 12px 8px 34px;
                    border: 1px solid #e4e6eb;
                    border-radius: 6px;
                    background: #ffffff;
                    font-size: 13px;
                    color: #1c1e21;
                    outline: none;
                ",
            }
        }
    }
}
