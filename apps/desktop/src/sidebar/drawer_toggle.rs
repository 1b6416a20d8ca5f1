//! Page header holding the drawer button and its icon.
//!
//! The header and icon classes are read back from the page model, so they always
//! show what the last toggle wrote.

use dioxus::prelude::*;
use newslens_core::types::DRAWER_BUTTON_ID;
use tracing::error;

use crate::state::use_page;

#[component]
pub fn PageHeader() -> Element {
    let mut page = use_page();
    let (header_class, icon_class, icon_text) = {
        let page = page.read();
        let header = page.header().map(|h| h.class_name()).unwrap_or_default();
        let icon = page.drawer_icon();
        let icon_class = icon.as_ref().map(|i| i.class_name()).unwrap_or_default();
        let icon_text = icon.map(|i| i.text()).unwrap_or_default();
        (header, icon_class, icon_text)
    };
    let expanded = page.read().state().is_open().to_string();

    rsx! {
        header {
            class: "{header_class}",

            button {
                id: DRAWER_BUTTON_ID,
                class: "drawer-button",
                title: "Toggle history",
                aria_expanded: "{expanded}",
                onclick: move |_| {
                    if let Err(e) = page.write().click_drawer_button() {
                        error!(error = %e, "Drawer toggle failed");
                    }
                },
                svg {
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    line { x1: "3", y1: "6", x2: "21", y2: "6" }
                    line { x1: "3", y1: "12", x2: "21", y2: "12" }
                    line { x1: "3", y1: "18", x2: "21", y2: "18" }
                }
            }

            span { class: "{icon_class}", "{icon_text}" }

            span { class: "page-title", "NewsLens" }
        }
    }
}
