//! NewsLens core — the analyze page's history drawer.
//!
//! # Modules
//!
//! - [`types`] — Drawer state, derived visuals, well-known ids and class names
//! - [`dom`] — Element handle traits and the in-memory page model
//! - [`controller`] — `toggle_drawer` / `load_history_entry`
//! - [`page`] — Page construction and click wiring
//! - [`config`] — `.newslens.toml` loading
//! - [`history`] — News history model and JSON export loading
//! - [`error`] — Error types

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod history;
pub mod page;
pub mod types;

pub use controller::{DrawerBinding, DrawerController};
pub use error::{DrawerError, Error};
pub use page::Page;
pub use types::DrawerState;

use std::path::Path;

use tracing::warn;

/// Load config and history for the project at `root`.
///
/// A configured history file that fails to load is logged and treated as an
/// empty history; a broken config file is returned as an error.
pub fn load_project(root: &Path) -> error::Result<(config::PageConfig, Vec<history::NewsContent>)> {
    let config = config::load_config(root)?;
    let history = match &config.history_file {
        Some(file) => history::load_history(&root.join(file)).unwrap_or_else(|e| {
            warn!(error = %e, "Could not load history, starting with an empty drawer");
            Vec::new()
        }),
        None => Vec::new(),
    };
    Ok((config, history))
}
