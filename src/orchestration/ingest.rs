//! Multi-source ingestion: read every source, then parse and merge.

use crate::datasource::{DocumentSource, SourceError};
use crate::domain::{Dataset, RawRecord};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// One named input document that has already been read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub name: String,
    pub content: String,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A source that contributed no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub source: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngestReport {
    pub dataset: Dataset,
    pub failures: Vec<SourceFailure>,
}

/// Parse one document. A top-level array yields one record per element; any other
/// value is a single record.
pub fn parse_document(content: &str) -> Result<Vec<RawRecord>, SourceError> {
    let value: Value = serde_json::from_str(content)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(RawRecord::new).collect(),
        other => vec![RawRecord::new(other)],
    })
}

/// Parse, merge (in document order) and normalize already-read documents.
///
/// A malformed document is reported and contributes no records; the rest still load.
pub fn ingest(documents: &[SourceDocument], now: DateTime<Utc>) -> IngestReport {
    let mut raw = Vec::new();
    let mut failures = Vec::new();

    for doc in documents {
        match parse_document(&doc.content) {
            Ok(records) => raw.extend(records),
            Err(err) => failures.push(failure(&doc.name, &err)),
        }
    }

    finish(&raw, failures, now)
}

/// Read all sources concurrently, wait for every one of them, then merge.
pub async fn ingest_sources(
    sources: &[Arc<dyn DocumentSource>],
    now: DateTime<Utc>,
) -> IngestReport {
    let reads = join_all(sources.iter().map(|s| s.read_to_string())).await;

    let mut raw = Vec::new();
    let mut failures = Vec::new();
    for (source, read) in sources.iter().zip(reads) {
        match read.and_then(|content| parse_document(&content)) {
            Ok(records) => raw.extend(records),
            Err(err) => failures.push(failure(source.name(), &err)),
        }
    }

    finish(&raw, failures, now)
}

fn failure(source: &str, err: &SourceError) -> SourceFailure {
    tracing::warn!(source, error = %err, "skipping input document");
    SourceFailure {
        source: source.to_string(),
        reason: err.to_string(),
    }
}

fn finish(raw: &[RawRecord], failures: Vec<SourceFailure>, now: DateTime<Utc>) -> IngestReport {
    let dataset = Dataset::from_raw(raw, now);
    tracing::info!(
        records = dataset.len(),
        failed_sources = failures.len(),
        "ingestion complete"
    );
    IngestReport { dataset, failures }
}
