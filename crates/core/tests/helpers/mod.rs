//! Test harness for page-level drawer tests.
//!
//! Builds a `Page` from a config and history written to a temp dir, the same
//! way the desktop app does at startup.

use newslens_core::dom::{Element, MemElement};
use newslens_core::history::NewsContent;
use newslens_core::Page;
use tempfile::TempDir;

pub struct TestHarness {
    pub page: Page,
    _temp_dir: TempDir,
}

/// Visual state observed on the page: (transform, icon classes, header classes).
pub type Visuals = (Option<String>, Vec<String>, Vec<String>);

impl TestHarness {
    /// Create a harness from `.newslens.toml` contents and a history JSON document.
    pub fn from_files(config: &str, history_json: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        std::fs::write(root.join(".newslens.toml"), config).expect("Failed to write config");
        std::fs::write(root.join("history.json"), history_json).expect("Failed to write history");

        let (config, history) = newslens_core::load_project(root).expect("load_project failed");
        TestHarness { page: Page::build(&config, &history), _temp_dir: temp_dir }
    }

    /// Default page with one history entry per URL.
    pub fn with_urls(urls: &[&str]) -> Self {
        let history: Vec<NewsContent> = urls
            .iter()
            .enumerate()
            .map(|(i, url)| NewsContent {
                id: Some(format!("content-{i}")),
                title: format!("Article {i}"),
                content: None,
                authors: "Redaksi".into(),
                publication_date: None,
                url: url.to_string(),
                summary: None,
            })
            .collect();
        let json = serde_json::to_string(&history).expect("serialize history");
        Self::from_files("history_file = \"history.json\"\n", &json)
    }

    pub fn entry(&self, idx: usize) -> MemElement {
        self.page.history_entries()[idx].clone()
    }

    pub fn visuals(&self) -> Visuals {
        (
            self.page.drawer().style_property("transform"),
            self.page.drawer_icon().expect("icon").classes(),
            self.page.header().expect("header").classes(),
        )
    }

    pub fn search_value(&self) -> String {
        self.page.search_input().expect("search input").value()
    }
}
