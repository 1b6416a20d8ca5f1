//! Sliding history drawer — one entry per analyzed article.

use std::collections::HashMap;

use dioxus::prelude::*;
use newslens_core::dom::{Element as _, MemElement};
use newslens_core::types::{HISTORY_DRAWER_ID, HISTORY_URL_ATTR};
use tracing::error;

use crate::state::use_page;

#[component]
pub fn HistoryDrawer() -> Element {
    let mut page = use_page();
    let (style, entries, placeholder) = {
        let page = page.read();
        let placeholder = page
            .drawer()
            .children()
            .into_iter()
            .find(|el| el.has_class("history-empty"))
            .map(|el| el.text());
        (page.drawer_style(), keyed_entries(page.history_entries()), placeholder)
    };

    rsx! {
        aside {
            id: HISTORY_DRAWER_ID,
            class: "history-drawer",
            style: "{style}",

            span { class: "history-label", "HISTORY" }

            if let Some(text) = placeholder {
                p { class: "history-empty", "{text}" }
            }

            for (key, url, entry) in entries {
                a {
                    key: "{key}",
                    class: "history-item",
                    title: "{url}",
                    onclick: {
                        let entry = entry.clone();
                        move |_| {
                            if let Err(e) = page.write().click_history_entry(&entry) {
                                error!(error = %e, "Could not load history entry");
                            }
                        }
                    },
                    span { class: "history-title", {entry.text()} }
                    span { class: "history-url", "{url}" }
                }
            }
        }
    }
}

/// Pair each entry with its URL and a diff key. The key is the URL, suffixed
/// with a repeat count when the same article was analyzed more than once.
fn keyed_entries(entries: Vec<MemElement>) -> Vec<(String, String, MemElement)> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    entries
        .into_iter()
        .map(|entry| {
            let url = entry.attribute(HISTORY_URL_ATTR).unwrap_or_default();
            let n = seen.entry(url.clone()).or_insert(0);
            let key = if *n == 0 { url.clone() } else { format!("{url}#{n}") };
            *n += 1;
            (key, url, entry)
        })
        .collect()
}
