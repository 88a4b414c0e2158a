//! Ingestion fan-in and the interactive analysis session.

pub mod ingest;
pub mod session;

pub use ingest::{
    ingest, ingest_sources, parse_document, IngestReport, SourceDocument, SourceFailure,
};
pub use session::Session;
