//! Error taxonomy for the rendering engine and its collaborators.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RowgramError>;

#[derive(Debug, Error)]
pub enum RowgramError {
    /// Crew data or render configuration rejected before any drawing.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A template id was named explicitly but is not registered.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// The club icon could not be read or decoded. Never fatal to a render.
    #[error("Club icon could not be loaded: {0}")]
    IconLoad(String),

    #[error("Encoding failed: {0}")]
    Encoding(String),

    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
