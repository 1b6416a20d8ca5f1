//! Core types shared across NewsLens: drawer state, the visual cues derived from
//! it, and the well-known element ids and class names the page is built from.

use std::fmt;

// ---------------------------------------------------------------------------
// Well-known identifiers
// ---------------------------------------------------------------------------

/// Id of the analyze search input that receives history URLs.
pub const SEARCH_INPUT_ID: &str = "analyze-search-input";

/// Id of the canonical drawer toggle control.
pub const DRAWER_BUTTON_ID: &str = "drawer-button";

/// Id of the history drawer root.
pub const HISTORY_DRAWER_ID: &str = "history-drawer";

/// Data attribute carrying a history entry's original URL.
pub const HISTORY_URL_ATTR: &str = "data-history-url";

/// Default drawer width, used as the transform offset magnitude.
pub const DEFAULT_DRAWER_WIDTH: &str = "20rem";

// Icon color classes
pub const ICON_LIGHT: &str = "text-neutral-200";
pub const ICON_DARK: &str = "text-neutral-800";

// Container background classes
pub const BG_FILLED: &str = "bg-gray-800";
pub const BG_TRANSPARENT: &str = "bg-transparent";

// ---------------------------------------------------------------------------
// Drawer state
// ---------------------------------------------------------------------------

/// Whether the history drawer is visually open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawerState {
    #[default]
    Open,
    Closed,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            DrawerState::Open => DrawerState::Closed,
            DrawerState::Closed => DrawerState::Open,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DrawerState::Open => "open",
            DrawerState::Closed => "closed",
        }
    }
}

impl fmt::Display for DrawerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Visual cues
// ---------------------------------------------------------------------------

/// The three visual values that must always agree with a [`DrawerState`]:
/// the drawer transform, the icon color class and the container background class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerVisuals {
    pub transform: String,
    pub icon_class: &'static str,
    pub background_class: &'static str,
}

impl DrawerVisuals {
    /// Visuals shown while the drawer is in `state`.
    pub fn for_state(state: DrawerState, width: &str) -> Self {
        match state {
            DrawerState::Open => DrawerVisuals {
                transform: translate_x(width, state),
                icon_class: ICON_LIGHT,
                background_class: BG_FILLED,
            },
            DrawerState::Closed => DrawerVisuals {
                transform: translate_x(width, state),
                icon_class: ICON_DARK,
                background_class: BG_TRANSPARENT,
            },
        }
    }

    /// The class each cue carries in the opposite state, i.e. the class a
    /// transition into `self` replaces.
    pub fn replaced_classes(&self) -> (&'static str, &'static str) {
        let icon = if self.icon_class == ICON_LIGHT { ICON_DARK } else { ICON_LIGHT };
        let background =
            if self.background_class == BG_FILLED { BG_TRANSPARENT } else { BG_FILLED };
        (icon, background)
    }
}

/// Drawer offset for `state`: `translateX(<width>)` when open,
/// `translateX(-<width>)` when closed.
pub fn translate_x(width: &str, state: DrawerState) -> String {
    match state {
        DrawerState::Open => format!("translateX({width})"),
        DrawerState::Closed => format!("translateX(-{width})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_starts_open() {
        assert_eq!(DrawerState::default(), DrawerState::Open);
        assert!(DrawerState::default().is_open());
    }

    #[test]
    fn toggled_twice_is_identity() {
        for state in [DrawerState::Open, DrawerState::Closed] {
            assert_eq!(state.toggled().toggled(), state);
            assert_ne!(state.toggled(), state);
        }
    }

    #[test]
    fn closed_visuals_use_negative_offset() {
        let v = DrawerVisuals::for_state(DrawerState::Closed, "20rem");
        assert_eq!(v.transform, "translateX(-20rem)");
        assert_eq!(v.icon_class, ICON_DARK);
        assert_eq!(v.background_class, BG_TRANSPARENT);
        assert_eq!(v.replaced_classes(), (ICON_LIGHT, BG_FILLED));
    }

    #[test]
    fn offset_sign_follows_state() {
        assert_eq!(translate_x("20rem", DrawerState::Open), "translateX(20rem)");
        assert_eq!(translate_x("20rem", DrawerState::Closed), "translateX(-20rem)");
    }

    #[test]
    fn open_visuals_use_positive_offset() {
        let v = DrawerVisuals::for_state(DrawerState::Open, "18px");
        assert_eq!(v.transform, "translateX(18px)");
        assert_eq!(v.icon_class, ICON_LIGHT);
        assert_eq!(v.background_class, BG_FILLED);
    }
}
