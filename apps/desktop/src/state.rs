//! Application state: the startup snapshot and the page signal shared through context.

use dioxus::prelude::*;
use newslens_core::config::PageConfig;
use newslens_core::history::NewsContent;
use newslens_core::Page;

/// Config and history read from disk before the UI starts.
pub struct StartupState {
    pub config: PageConfig,
    pub history: Vec<NewsContent>,
}

impl StartupState {
    /// Load `.newslens.toml` (and its history file) from the current working directory.
    pub fn from_cwd() -> newslens_core::error::Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|source| newslens_core::Error::Io { path: ".".into(), source })?;
        let (config, history) = newslens_core::load_project(&cwd)?;
        Ok(StartupState { config, history })
    }

    pub fn into_page(self) -> Page {
        Page::build(&self.config, &self.history)
    }
}

/// Take the startup snapshot (once) and build the page from it.
pub fn initial_page() -> Page {
    let startup = crate::INITIAL_STATE
        .lock()
        .ok()
        .and_then(|mut s| s.take())
        .unwrap_or(StartupState { config: PageConfig::default(), history: vec![] });
    startup.into_page()
}

/// The page, provided by [`crate::app::App`] to every component below it.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}
