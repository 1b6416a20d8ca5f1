//! Root application component — header, history drawer, analyze panel, status bar.

use dioxus::prelude::*;

use crate::search::AnalyzePanel;
use crate::sidebar::{HistoryDrawer, PageHeader};
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // One page per session; handlers reach it through context
    use_context_provider(|| Signal::new(initial_page()));

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            PageHeader {}

            div {
                class: "content-area",
                HistoryDrawer {}
                AnalyzePanel {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let page = use_page();
    let page = page.read();
    let state = page.state();
    let entries = page.history_entries().len();

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-drawer", "history {state}" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-entries", "{entries} entries" }
        }
    }
}
