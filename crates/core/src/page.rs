//! The analyze page: builds the in-memory element tree the drawer controller
//! works on and wires the two click handlers to it.

use tracing::debug;

use crate::config::PageConfig;
use crate::controller::DrawerController;
use crate::dom::{Document, Element, MemElement, MemoryDom};
use crate::error::DrawerError;
use crate::history::NewsContent;
use crate::types::*;

/// Page model plus the controller that owns the drawer state.
#[derive(Debug)]
pub struct Page {
    dom: MemoryDom,
    controller: DrawerController<MemElement>,
}

impl Page {
    /// Build the page subtree for `history`, rendered in the configured initial state.
    ///
    /// ```text
    /// body
    /// ├─ header            bg-gray-800 | bg-transparent
    /// │  ├─ button#drawer-button
    /// │  └─ span           text-neutral-200 | text-neutral-800
    /// ├─ aside#history-drawer   transform: translateX(±W)
    /// │  └─ a[data-history-url]  (one per entry)
    /// └─ main
    ///    └─ input#analyze-search-input
    /// ```
    pub fn build(config: &PageConfig, history: &[NewsContent]) -> Self {
        let state = config.initial_state();
        let visuals = DrawerVisuals::for_state(state, &config.drawer_width);

        let body = MemElement::new("body");
        let header = body.append_child(
            MemElement::new("header").with_class("page-header").with_class(visuals.background_class),
        );
        header.append_child(
            MemElement::new("button").with_id(DRAWER_BUTTON_ID).with_class("drawer-button"),
        );
        header.append_child(
            MemElement::new("span")
                .with_class("drawer-icon")
                .with_class(visuals.icon_class)
                .with_text("History"),
        );

        let drawer = body.append_child(
            MemElement::new("aside")
                .with_id(HISTORY_DRAWER_ID)
                .with_class("history-drawer")
                .with_style("transform", &visuals.transform),
        );
        if history.is_empty() {
            drawer.append_child(
                MemElement::new("p").with_class("history-empty").with_text("No history yet"),
            );
        }
        for item in history {
            drawer.append_child(
                MemElement::new("a")
                    .with_class("history-item")
                    .with_attribute(HISTORY_URL_ATTR, &item.url)
                    .with_attribute("title", &item.url)
                    .with_text(&item.title),
            );
        }

        let main = body.append_child(MemElement::new("main").with_class("analyze-panel"));
        main.append_child(
            MemElement::new("input")
                .with_id(SEARCH_INPUT_ID)
                .with_class("analyze-search-input")
                .with_attribute("placeholder", "Paste a news article URL..."),
        );

        debug!(entries = history.len(), state = %state, "Built analyze page");
        let controller = DrawerController::with_width(drawer, config.drawer_width.clone())
            .with_initial_state(state);
        Page { dom: MemoryDom::new(body), controller }
    }

    pub fn dom(&self) -> &MemoryDom {
        &self.dom
    }

    pub fn controller(&self) -> &DrawerController<MemElement> {
        &self.controller
    }

    pub fn state(&self) -> DrawerState {
        self.controller.state()
    }

    fn well_known(&self, id: &str) -> Result<MemElement, DrawerError> {
        self.dom
            .element_by_id(id)
            .ok_or_else(|| DrawerError::MissingElement { id: id.to_string() })
    }

    pub fn drawer_button(&self) -> Result<MemElement, DrawerError> {
        self.well_known(DRAWER_BUTTON_ID)
    }

    pub fn search_input(&self) -> Result<MemElement, DrawerError> {
        self.well_known(SEARCH_INPUT_ID)
    }

    pub fn drawer(&self) -> &MemElement {
        self.controller.drawer()
    }

    /// Inline style for the drawer: the width variable the stylesheet sizes and
    /// positions the drawer with, plus the current transform.
    pub fn drawer_style(&self) -> String {
        let transform = self.drawer().style_property("transform").unwrap_or_default();
        format!("--drawer-width: {}; transform: {transform}", self.controller.width())
    }

    /// The icon sibling of the drawer button.
    pub fn drawer_icon(&self) -> Option<MemElement> {
        self.drawer_button().ok()?.next_element_sibling()
    }

    /// The container holding the drawer button.
    pub fn header(&self) -> Option<MemElement> {
        self.drawer_button().ok()?.parent_element()
    }

    /// Rendered history anchors, in display order.
    pub fn history_entries(&self) -> Vec<MemElement> {
        self.drawer()
            .children()
            .into_iter()
            .filter(|el| el.attribute(HISTORY_URL_ATTR).is_some())
            .collect()
    }

    /// Click on the drawer button.
    pub fn click_drawer_button(&mut self) -> Result<DrawerState, DrawerError> {
        let button = self.drawer_button()?;
        self.controller.toggle_drawer(&button)
    }

    /// Click on a history entry.
    pub fn click_history_entry(&mut self, entry: &MemElement) -> Result<DrawerState, DrawerError> {
        self.controller.load_history_entry(&self.dom, entry)
    }

    /// Typing into the analyze search input.
    pub fn set_search_value(&self, value: &str) -> Result<(), DrawerError> {
        self.search_input()?.set_value(value);
        Ok(())
    }
}
