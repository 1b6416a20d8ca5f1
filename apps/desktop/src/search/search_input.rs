//! Analyze search input, backed by the page model's `#analyze-search-input`.

use dioxus::prelude::*;
use newslens_core::dom::Element as _;
use newslens_core::types::SEARCH_INPUT_ID;
use tracing::error;

use crate::state::use_page;

#[component]
pub fn SearchInput() -> Element {
    let mut page = use_page();
    let value = page.read().search_input().map(|i| i.value()).unwrap_or_default();
    let has_value = !value.trim().is_empty();

    rsx! {
        div {
            class: if has_value { "search-field has-query" } else { "search-field" },

            span { class: "search-label", "ANALYZE" }

            div {
                class: "search-input-row",

                input {
                    id: SEARCH_INPUT_ID,
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Paste a news article URL...",
                    value: "{value}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        if let Err(err) = page.write().set_search_value(&e.value()) {
                            error!(error = %err, "Search input missing");
                        }
                    },
                }

                if has_value {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            if let Err(err) = page.write().set_search_value("") {
                                error!(error = %err, "Search input missing");
                            }
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
