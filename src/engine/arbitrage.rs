//! Three-way (1 / X / 2) arbitrage stake splitting.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// Preset total stakes offered for quick calculation.
pub const STAKE_PRESETS: [i64; 3] = [500, 1000, 2000];

/// Decimal odds for the three outcomes of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeWayOdds {
    pub home: Decimal,
    pub draw: Decimal,
    pub away: Decimal,
}

impl ThreeWayOdds {
    pub fn new(home: Decimal, draw: Decimal, away: Decimal) -> Self {
        Self { home, draw, away }
    }

    fn as_array(&self) -> [Decimal; 3] {
        [self.home, self.draw, self.away]
    }
}

/// Stake, gross return and profit for one outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub odds: Decimal,
    pub implied_probability: Decimal,
    pub stake: Decimal,
    /// `stake * odds`.
    pub gross_return: Decimal,
    /// `gross_return - total stake`.
    pub profit: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrageOutcome {
    pub total_stake: Decimal,
    /// Sum of implied probabilities.
    pub implied_sum: Decimal,
    pub home: Leg,
    pub draw: Leg,
    pub away: Leg,
    /// Return whichever outcome wins: `stake / implied_sum`.
    pub equalized_return: Decimal,
    /// `equalized_return - stake`; negative when no arbitrage exists.
    pub profit: Decimal,
    pub is_arbitrage: bool,
}

/// Split `stake` across the three outcomes so every outcome returns the same amount.
///
/// Returns `None` when any odd is `<= 1`, the stake is `<= 0`, or the returns
/// do not fit the decimal range.
pub fn calculate(odds: ThreeWayOdds, stake: Decimal) -> Option<ArbitrageOutcome> {
    let one = Decimal::one();
    if odds.as_array().iter().any(|o| *o <= one) || !stake.is_positive() {
        return None;
    }

    let [p_home, p_draw, p_away] = odds.as_array().map(|o| one / o);
    let implied_sum = p_home + p_draw + p_away;
    let equalized_return = stake.checked_div(implied_sum)?;

    let leg = |odds: Decimal, p: Decimal| -> Option<Leg> {
        let leg_stake = stake.checked_mul(p.checked_div(implied_sum)?)?;
        let gross_return = leg_stake.checked_mul(odds)?;
        Some(Leg {
            odds,
            implied_probability: p,
            stake: leg_stake,
            gross_return,
            profit: gross_return - stake,
        })
    };

    Some(ArbitrageOutcome {
        total_stake: stake,
        implied_sum,
        home: leg(odds.home, p_home)?,
        draw: leg(odds.draw, p_draw)?,
        away: leg(odds.away, p_away)?,
        equalized_return,
        profit: equalized_return - stake,
        is_arbitrage: implied_sum < one,
    })
}
