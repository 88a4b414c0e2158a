use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::orchestration::{ingest, SourceDocument, SourceFailure};

#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    pub documents: Vec<SourceDocument>,
}

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub records: usize,
    pub failures: Vec<SourceFailure>,
}

/// Replace the session dataset with the uploaded documents.
pub async fn post_ingest(
    State(state): State<AppState>,
    Json(req): Json<IngestRequest>,
) -> Json<IngestResponse> {
    let report = ingest(&req.documents, Utc::now());
    let records = report.dataset.len();

    let failures = state.session.write().await.load(report);

    Json(IngestResponse { records, failures })
}
