pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{DocumentSource, FileSource, MemorySource, SourceError};
pub use domain::{
    normalize, normalize_at, Dataset, DayKey, Decimal, Hour, MonthKey, NormalizedRecord,
    RawRecord, RecordRef, TimeMs, TimeSource,
};
pub use engine::{NavError, NavLevel, NavState, View};
pub use error::AppError;
pub use orchestration::{ingest, ingest_sources, IngestReport, Session, SourceDocument};
