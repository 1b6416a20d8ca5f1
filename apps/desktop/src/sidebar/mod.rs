//! History drawer components — the toggle header and the sliding drawer.

mod drawer_toggle;
mod history_drawer;

pub use drawer_toggle::PageHeader;
pub use history_drawer::HistoryDrawer;
