//! `.newslens.toml` config loading.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{DrawerState, DEFAULT_DRAWER_WIDTH};

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = ".newslens.toml";

/// Known keys in `.newslens.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["drawer_width", "history_file", "start_closed"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// CSS length the drawer slides by.
    pub drawer_width: String,
    /// JSON history export to populate the drawer from, relative to the project root.
    pub history_file: Option<PathBuf>,
    pub start_closed: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            drawer_width: DEFAULT_DRAWER_WIDTH.to_string(),
            history_file: None,
            start_closed: false,
        }
    }
}

impl PageConfig {
    pub fn initial_state(&self) -> DrawerState {
        if self.start_closed {
            DrawerState::Closed
        } else {
            DrawerState::Open
        }
    }
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn css_length_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d+)?(rem|em|px)$").expect("static regex"))
}

/// Whether `width` is a plain positive CSS length such as `20rem` or `320px`.
pub fn is_css_length(width: &str) -> bool {
    css_length_re().is_match(width)
}

/// Load page configuration from `.newslens.toml` in the given project root.
///
/// A missing file yields defaults. Unknown keys trigger a warning with a typo
/// suggestion. An unreadable or malformed file, or a bad value, is an error.
pub fn load_config(project_root: &Path) -> Result<PageConfig> {
    let config_path = project_root.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No config file, using defaults");
        return Ok(PageConfig::default());
    }

    debug!("Loading {CONFIG_FILE}");
    let content = std::fs::read_to_string(&config_path)
        .map_err(|source| Error::Io { path: config_path.clone(), source })?;
    parse_config(&content).map_err(|e| match e {
        Error::Toml { source, .. } => Error::Toml { path: config_path, source },
        other => other,
    })
}

/// Parse the contents of a `.newslens.toml` file.
pub fn parse_config(content: &str) -> Result<PageConfig> {
    let table: toml::Table = content
        .parse()
        .map_err(|source| Error::Toml { path: PathBuf::from(CONFIG_FILE), source })?;
    let mut config = PageConfig::default();

    // Validate keys — warn on unknown
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS.iter().min_by_key(|k| edit_distance(key, k));
        match suggestion {
            Some(s) if edit_distance(key, s) <= 3 => warn!(
                key = key.as_str(),
                suggestion = *s,
                "Unknown key in {CONFIG_FILE} — did you mean '{s}'?"
            ),
            _ => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(value) = table.get("drawer_width") {
        let width = value.as_str().ok_or_else(|| Error::InvalidConfig {
            key: "drawer_width",
            message: "expected a string".into(),
        })?;
        if !is_css_length(width) {
            return Err(Error::InvalidConfig {
                key: "drawer_width",
                message: format!("'{width}' is not a CSS length like 20rem or 320px"),
            });
        }
        config.drawer_width = width.to_string();
    }

    if let Some(value) = table.get("history_file") {
        let path = value.as_str().ok_or_else(|| Error::InvalidConfig {
            key: "history_file",
            message: "expected a path string".into(),
        })?;
        config.history_file = Some(PathBuf::from(path));
    }

    if let Some(value) = table.get("start_closed") {
        config.start_closed = value.as_bool().ok_or_else(|| Error::InvalidConfig {
            key: "start_closed",
            message: "expected true or false".into(),
        })?;
    }

    Ok(config)
}
