use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::Decimal;
use crate::engine::arbitrage::{calculate, ArbitrageOutcome, ThreeWayOdds, STAKE_PRESETS};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ArbitrageQuery {
    pub home: String,
    pub draw: String,
    pub away: String,
    pub stake: String,
}

#[derive(Debug, Serialize)]
pub struct ArbitrageResponse {
    /// `null` when the odds or the stake are out of range.
    pub result: Option<ArbitrageOutcome>,
    /// Quick-pick total stakes.
    pub presets: [i64; 3],
}

fn parse_decimal(name: &str, value: &str) -> Result<Decimal, AppError> {
    Decimal::parse_lenient(value).ok_or_else(|| AppError::BadRequest(format!("Invalid {}", name)))
}

pub async fn get_arbitrage(
    Query(params): Query<ArbitrageQuery>,
) -> Result<Json<ArbitrageResponse>, AppError> {
    let odds = ThreeWayOdds::new(
        parse_decimal("home", &params.home)?,
        parse_decimal("draw", &params.draw)?,
        parse_decimal("away", &params.away)?,
    );
    let stake = parse_decimal("stake", &params.stake)?;

    Ok(Json(ArbitrageResponse {
        result: calculate(odds, stake),
        presets: STAKE_PRESETS,
    }))
}
