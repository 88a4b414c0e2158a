use axum::extract::{Path, State};
use axum::Json;

use crate::api::AppState;
use crate::domain::{DayKey, MonthKey};
use crate::engine::{view_day, view_histogram, view_month, view_root};
use crate::engine::{DayView, Histogram, MonthView, RootView};
use crate::error::AppError;

pub async fn get_summary(State(state): State<AppState>) -> Json<RootView> {
    let session = state.session.read().await;
    Json(view_root(session.dataset()))
}

pub async fn get_month(
    Path(month): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MonthView>, AppError> {
    let month = MonthKey::parse(&month)?;
    let session = state.session.read().await;
    Ok(Json(view_month(session.dataset(), &month)))
}

pub async fn get_day(
    Path((month, day)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<DayView>, AppError> {
    let month = MonthKey::parse(&month)?;
    let day = DayKey::parse(&day)?;
    if day.month() != month {
        return Err(AppError::BadRequest(format!(
            "day {} is not in month {}",
            day, month
        )));
    }
    let session = state.session.read().await;
    Ok(Json(view_day(session.dataset(), &month, &day)))
}

pub async fn get_histogram(State(state): State<AppState>) -> Json<Histogram> {
    let session = state.session.read().await;
    Json(view_histogram(session.dataset()))
}
