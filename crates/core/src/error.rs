//! Error types for the drawer controller and for config/history loading.

use std::path::PathBuf;

use thiserror::Error;

/// Structural failures of a drawer operation. None of them are recoverable
/// locally; the page is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawerError {
    /// The trigger lacks the sibling or parent the toggle updates.
    #[error("trigger control has no {relation}")]
    StructuralReference { relation: &'static str },

    /// A well-known element could not be found in the document.
    #[error("element #{id} not found")]
    MissingElement { id: String },

    /// An element lacks a data attribute the operation reads.
    #[error("element has no '{attribute}' attribute")]
    MissingAttribute { attribute: String },
}

/// Errors loading `.newslens.toml` or a history export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{key}': {message}")]
    InvalidConfig { key: &'static str, message: String },

    #[error("could not parse history {}: {source}", path.display())]
    History {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
