//! In-memory document source for uploads and tests.

use super::{DocumentSource, SourceError};
use async_trait::async_trait;

/// A document already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySource {
    name: String,
    content: String,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_to_string(&self) -> Result<String, SourceError> {
        Ok(self.content.clone())
    }
}
