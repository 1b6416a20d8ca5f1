//! Analyze panel — the search input history entries are loaded into.

mod search_input;

use dioxus::prelude::*;
use search_input::SearchInput;

/// Analyze panel filling the content area beside the drawer.
#[component]
pub fn AnalyzePanel() -> Element {
    rsx! {
        div {
            class: "analyze-panel",
            SearchInput {}
        }
    }
}
