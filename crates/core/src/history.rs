//! News history model and loading from a JSON export of the backend's
//! `users/{id}/history` response.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

pub type UserId = String;

/// One analyzed news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsContent {
    pub id: Option<UserId>,
    pub title: String,
    pub content: Option<String>,
    pub authors: String,
    pub publication_date: Option<String>,
    pub url: String,
    pub summary: Option<String>,
}

/// A user's analysis history. The backend sends `null` for a user with none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHistory(pub Option<Vec<NewsContent>>);

impl UserHistory {
    pub fn entries(&self) -> &[NewsContent] {
        self.0.as_deref().unwrap_or(&[])
    }

    pub fn into_entries(self) -> Vec<NewsContent> {
        self.0.unwrap_or_default()
    }
}

pub fn parse_history(json: &str) -> serde_json::Result<UserHistory> {
    serde_json::from_str(json)
}

/// Read a history export from disk.
pub fn load_history(path: &Path) -> Result<Vec<NewsContent>> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let history = parse_history(&content)
        .map_err(|source| Error::History { path: path.to_path_buf(), source })?;
    let entries = history.into_entries();
    info!(path = %path.display(), entries = entries.len(), "Loaded history");
    Ok(entries)
}
