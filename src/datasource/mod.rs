//! Document source abstraction: each source yields one JSON input document.

use async_trait::async_trait;
use std::fmt;

pub mod file;
pub mod memory;

pub use file::{discover_json_files, FileSource};
pub use memory::MemorySource;

/// One input document (e.g. an exported round history file).
///
/// Implementations only read raw text; parsing happens after every source has
/// been read, so one slow or broken source never leaves a half-merged dataset.
#[async_trait]
pub trait DocumentSource: Send + Sync + fmt::Debug {
    /// Name reported back to the user when the source fails.
    fn name(&self) -> &str;

    /// Read the whole document as text.
    async fn read_to_string(&self) -> Result<String, SourceError>;
}

/// Error type for document sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The document could not be read (missing file, permissions, bad UTF-8).
    Io(String),
    /// The document is not valid JSON.
    InvalidJson(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(msg) => write!(f, "Read error: {}", msg),
            SourceError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::InvalidJson(err.to_string())
    }
}
