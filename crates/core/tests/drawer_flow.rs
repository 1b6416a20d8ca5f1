//! Page-level scenarios for the history drawer: toggling through the drawer
//! button and loading history entries into the analyze input.

mod helpers;

use helpers::TestHarness;
use newslens_core::dom::{Element, MemElement};
use newslens_core::types::*;
use newslens_core::{DrawerController, DrawerError};

// ---------------------------------------------------------------------------
// Toggle scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_page_starts_open() {
    let h = TestHarness::with_urls(&[]);
    assert_eq!(h.page.state(), DrawerState::Open);
    let (transform, icon, header) = h.visuals();
    assert_eq!(transform.as_deref(), Some("translateX(20rem)"));
    assert!(icon.contains(&ICON_LIGHT.to_string()));
    assert!(header.contains(&BG_FILLED.to_string()));
}

#[test]
fn test_closed_drawer_opens_on_button_click() {
    let mut h = TestHarness::from_files("start_closed = true\n", "null");
    assert_eq!(h.page.state(), DrawerState::Closed);

    assert_eq!(h.page.click_drawer_button(), Ok(DrawerState::Open));
    let (transform, icon, header) = h.visuals();
    assert_eq!(transform.as_deref(), Some("translateX(20rem)"));
    assert!(icon.contains(&ICON_LIGHT.to_string()) && !icon.contains(&ICON_DARK.to_string()));
    assert!(header.contains(&BG_FILLED.to_string()) && !header.contains(&BG_TRANSPARENT.to_string()));
}

#[test]
fn test_toggle_parity_over_many_clicks() {
    let mut h = TestHarness::with_urls(&[]);
    let initial = h.page.state().is_open();
    for n in 1..=10usize {
        h.page.click_drawer_button().unwrap();
        assert_eq!(h.page.state().is_open(), initial ^ (n % 2 == 1), "after {n} clicks");
    }
}

#[test]
fn test_double_toggle_is_identity() {
    let mut h = TestHarness::with_urls(&["https://a.example"]);
    let before = (h.page.state(), h.visuals());
    h.page.click_drawer_button().unwrap();
    h.page.click_drawer_button().unwrap();
    assert_eq!((h.page.state(), h.visuals()), before);
}

#[test]
fn test_configured_width_used_for_offset() {
    let mut h = TestHarness::from_files("drawer_width = \"24rem\"\n", "null");
    assert_eq!(h.visuals().0.as_deref(), Some("translateX(24rem)"));
    h.page.click_drawer_button().unwrap();
    assert_eq!(h.visuals().0.as_deref(), Some("translateX(-24rem)"));
}

// ---------------------------------------------------------------------------
// History entry scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_history_entry_fills_input_and_closes_drawer() {
    let mut h = TestHarness::with_urls(&["foo", "https://example.com/article/42"]);
    let entry = h.entry(0);

    assert_eq!(h.page.click_history_entry(&entry), Ok(DrawerState::Closed));
    assert_eq!(h.search_value(), "foo");
    let (transform, icon, header) = h.visuals();
    assert_eq!(transform.as_deref(), Some("translateX(-20rem)"));
    assert!(icon.contains(&ICON_DARK.to_string()));
    assert!(header.contains(&BG_TRANSPARENT.to_string()));
}

#[test]
fn test_history_entry_url_copied_exactly() {
    let mut h = TestHarness::with_urls(&["foo", "https://example.com/article/42"]);
    h.page.set_search_value("something typed earlier").unwrap();
    let entry = h.entry(1);
    h.page.click_history_entry(&entry).unwrap();
    assert_eq!(h.search_value(), "https://example.com/article/42");
}

#[test]
fn test_history_entry_flips_closed_drawer_open() {
    let mut h = TestHarness::with_urls(&["foo"]);
    h.page.click_drawer_button().unwrap();
    let entry = h.entry(0);
    assert_eq!(h.page.click_history_entry(&entry), Ok(DrawerState::Open));
    assert_eq!(h.search_value(), "foo");
}

#[test]
fn test_entry_without_url_leaves_page_untouched() {
    let mut h = TestHarness::with_urls(&["foo"]);
    let stray = h.page.drawer().append_child(MemElement::new("a").with_text("broken"));
    let before = (h.page.state(), h.visuals(), h.search_value());

    let err = h.page.click_history_entry(&stray).unwrap_err();
    assert_eq!(err, DrawerError::MissingAttribute { attribute: HISTORY_URL_ATTR.into() });
    assert_eq!((h.page.state(), h.visuals(), h.search_value()), before);
}

#[test]
fn test_broken_history_file_gives_empty_drawer() {
    let h = TestHarness::from_files("history_file = \"history.json\"\n", "{not json");
    assert!(h.page.history_entries().is_empty());
    assert!(h.page.state().is_open());
}

// ---------------------------------------------------------------------------
// Controller over a hand-built tree
// ---------------------------------------------------------------------------

#[test]
fn test_prebound_dependents_match_trigger_resolution() {
    let h = TestHarness::with_urls(&[]);
    let button = h.page.drawer_button().unwrap();
    let binding = newslens_core::DrawerBinding::resolve(&button).unwrap();
    assert_eq!(Some(binding.icon.clone()), h.page.drawer_icon());
    assert_eq!(Some(binding.background.clone()), h.page.header());

    let mut ctl = DrawerController::new(h.page.drawer().clone());
    assert_eq!(ctl.toggle_bound(&binding), DrawerState::Closed);
    assert!(binding.icon.has_class(ICON_DARK));
}
