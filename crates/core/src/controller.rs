//! History drawer controller — owns the open/closed state and keeps the drawer
//! transform, the toggle icon color and the header background in step with it.

use tracing::{debug, warn};

use crate::dom::{Document, Element};
use crate::error::DrawerError;
use crate::types::*;

/// The two elements a toggle recolors, resolved from the trigger control:
/// its next sibling (icon) and its parent (background container).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerBinding<E> {
    pub icon: E,
    pub background: E,
}

impl<E: Element> DrawerBinding<E> {
    pub fn resolve(trigger: &E) -> Result<Self, DrawerError> {
        let icon = trigger
            .next_element_sibling()
            .ok_or(DrawerError::StructuralReference { relation: "next element sibling" })?;
        let background = trigger
            .parent_element()
            .ok_or(DrawerError::StructuralReference { relation: "parent element" })?;
        Ok(DrawerBinding { icon, background })
    }
}

/// Drives one history drawer. Constructed once at page setup and handed to
/// the event handlers that need it.
#[derive(Debug)]
pub struct DrawerController<E> {
    drawer: E,
    state: DrawerState,
    width: String,
}

impl<E: Element> DrawerController<E> {
    /// Controller for a drawer that starts open with the default width.
    pub fn new(drawer: E) -> Self {
        Self::with_width(drawer, DEFAULT_DRAWER_WIDTH)
    }

    pub fn with_width(drawer: E, width: impl Into<String>) -> Self {
        DrawerController { drawer, state: DrawerState::Open, width: width.into() }
    }

    /// Set the state the page was rendered in. Does not touch any element.
    pub fn with_initial_state(mut self, state: DrawerState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn drawer(&self) -> &E {
        &self.drawer
    }

    /// Visuals matching the current state.
    pub fn visuals(&self) -> DrawerVisuals {
        DrawerVisuals::for_state(self.state, &self.width)
    }

    /// Slide the drawer to the other state, recoloring the trigger's icon
    /// sibling and background parent. Returns the new state.
    ///
    /// Fails with [`DrawerError::StructuralReference`] when the trigger has no
    /// sibling or parent; nothing is modified in that case.
    pub fn toggle_drawer(&mut self, trigger: &E) -> Result<DrawerState, DrawerError> {
        let binding = DrawerBinding::resolve(trigger)?;
        Ok(self.toggle_bound(&binding))
    }

    /// Toggle using dependents resolved earlier with [`DrawerBinding::resolve`].
    pub fn toggle_bound(&mut self, binding: &DrawerBinding<E>) -> DrawerState {
        let next = self.state.toggled();
        let target = DrawerVisuals::for_state(next, &self.width);
        let (icon_from, background_from) = target.replaced_classes();

        self.drawer.set_style_property("transform", &target.transform);
        if !binding.icon.replace_class(icon_from, target.icon_class) {
            warn!(class = icon_from, "Drawer icon is missing its color class");
        }
        if !binding.background.replace_class(background_from, target.background_class) {
            warn!(class = background_from, "Drawer container is missing its background class");
        }

        debug!(from = %self.state, to = %next, transform = %target.transform, "Toggled history drawer");
        self.state = next;
        next
    }

    /// Copy a history entry's URL into the analyze search input, then toggle
    /// the drawer through the canonical drawer button.
    ///
    /// All lookups happen before anything is written, so a failure leaves
    /// the input value and the drawer untouched.
    pub fn load_history_entry<D>(&mut self, document: &D, entry: &E) -> Result<DrawerState, DrawerError>
    where
        D: Document<Element = E>,
    {
        let input = document
            .element_by_id(SEARCH_INPUT_ID)
            .ok_or_else(|| DrawerError::MissingElement { id: SEARCH_INPUT_ID.to_string() })?;
        let url = entry
            .attribute(HISTORY_URL_ATTR)
            .ok_or_else(|| DrawerError::MissingAttribute { attribute: HISTORY_URL_ATTR.to_string() })?;
        let button = document
            .element_by_id(DRAWER_BUTTON_ID)
            .ok_or_else(|| DrawerError::MissingElement { id: DRAWER_BUTTON_ID.to_string() })?;
        let binding = DrawerBinding::resolve(&button)?;

        input.set_value(&url);
        debug!(url = %url, "Loaded history entry into search input");
        Ok(self.toggle_bound(&binding))
    }
}
