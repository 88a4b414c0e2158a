pub mod arbitrage;
pub mod health;
pub mod ingest;
pub mod nav;
pub mod views;

use crate::orchestration::Session;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone, Default)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/ingest", post(ingest::post_ingest))
        .route("/v1/summary", get(views::get_summary))
        .route("/v1/months/:month", get(views::get_month))
        .route("/v1/months/:month/days/:day", get(views::get_day))
        .route("/v1/histogram", get(views::get_histogram))
        .route("/v1/nav", get(nav::get_view))
        .route("/v1/nav/month", post(nav::select_month))
        .route("/v1/nav/day", post(nav::select_day))
        .route("/v1/nav/back", post(nav::back))
        .route("/v1/nav/histogram", post(nav::enter_histogram))
        .route("/v1/arbitrage", get(arbitrage::get_arbitrage))
        .layer(cors)
        .with_state(state)
}
