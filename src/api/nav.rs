use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::AppState;
use crate::domain::{DayKey, MonthKey};
use crate::engine::View;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub key: String,
}

pub async fn get_view(State(state): State<AppState>) -> Json<View> {
    Json(state.session.read().await.view())
}

pub async fn select_month(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<View>, AppError> {
    let month = MonthKey::parse(&req.key)?;
    let view = state.session.write().await.select_month(month)?;
    Ok(Json(view))
}

pub async fn select_day(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<View>, AppError> {
    let day = DayKey::parse(&req.key)?;
    let view = state.session.write().await.select_day(day)?;
    Ok(Json(view))
}

pub async fn back(State(state): State<AppState>) -> Json<View> {
    Json(state.session.write().await.back())
}

pub async fn enter_histogram(State(state): State<AppState>) -> Json<View> {
    Json(state.session.write().await.enter_histogram())
}
