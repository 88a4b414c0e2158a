//! Raw round records and their normalized, bucket-ready form.

use crate::domain::{has_fixed_width_keys, DayKey, Decimal, Hour, MonthKey, TimeMs};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// One untrusted input record, kept as the JSON value it arrived as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        RawRecord(value)
    }

    fn data_field(&self, name: &str) -> Option<&Value> {
        self.0.get("data").and_then(|data| data.get(name))
    }

    fn created_at(&self) -> Option<&Value> {
        self.0.get("created_at").filter(|v| !v.is_null())
    }

    /// `data.amount`, coerced to 0 when absent or non-numeric.
    pub fn amount(&self) -> Decimal {
        self.data_field("amount")
            .and_then(Decimal::from_json_numeric)
            .unwrap_or_default()
    }

    /// `data.payout`, coerced to 0 when absent or non-numeric.
    pub fn payout(&self) -> Decimal {
        self.data_field("payout")
            .and_then(Decimal::from_json_numeric)
            .unwrap_or_default()
    }

    /// `data.payoutMultiplier` when it is a JSON number.
    pub fn payout_multiplier(&self) -> Option<Decimal> {
        self.data_field("payoutMultiplier")
            .and_then(Decimal::from_json_number)
    }
}

/// Where a record's instant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeSource {
    /// Top-level `created_at`.
    CreatedAt,
    /// Numeric `data.createdAt` (epoch milliseconds).
    DataCreatedAt,
    /// No usable timestamp; the ingestion instant was used.
    Now,
}

/// A record with derived PnL and UTC bucket keys. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub amount: Decimal,
    pub payout: Decimal,
    /// `payout - amount`, or 0 when the difference is outside the decimal range.
    pub pnl: Decimal,
    pub payout_multiplier: Option<Decimal>,
    pub resolved_at: DateTime<Utc>,
    pub time_source: TimeSource,
    /// Sort key: the resolved instant, or 0 when the record fell back to "now".
    pub timestamp_ms: TimeMs,
    pub utc_date_key: DayKey,
    pub utc_month_key: MonthKey,
    pub utc_hour: Hour,
}

impl NormalizedRecord {
    pub fn is_win(&self) -> bool {
        self.pnl.is_positive()
    }
}

/// Normalize a raw record using the current instant as the "now" fallback.
pub fn normalize(raw: &RawRecord) -> NormalizedRecord {
    normalize_at(raw, Utc::now())
}

/// Normalize a raw record. Total: absent or invalid fields coerce, nothing fails.
///
/// Timestamp resolution order: `created_at`, then numeric `data.createdAt`, then `now`.
pub fn normalize_at(raw: &RawRecord, now: DateTime<Utc>) -> NormalizedRecord {
    let amount = raw.amount();
    let payout = raw.payout();
    let pnl = payout.checked_sub(amount).unwrap_or_else(|| {
        tracing::warn!(%amount, %payout, "pnl outside decimal range; using 0");
        Decimal::zero()
    });

    let (resolved_at, time_source) = resolve_instant(raw, now);
    let timestamp_ms = match time_source {
        TimeSource::Now => TimeMs::new(0),
        _ => TimeMs::from_datetime(&resolved_at),
    };

    NormalizedRecord {
        amount,
        payout,
        pnl,
        payout_multiplier: raw.payout_multiplier(),
        resolved_at,
        time_source,
        timestamp_ms,
        utc_date_key: DayKey::from_datetime(&resolved_at),
        utc_month_key: MonthKey::from_datetime(&resolved_at),
        utc_hour: Hour::new(resolved_at.hour()).unwrap_or_default(),
    }
}

/// Instants outside years 0..=9999 are skipped like unparseable ones.
fn resolve_instant(raw: &RawRecord, now: DateTime<Utc>) -> (DateTime<Utc>, TimeSource) {
    if let Some(dt) = raw
        .created_at()
        .and_then(parse_created_at)
        .filter(has_fixed_width_keys)
    {
        return (dt, TimeSource::CreatedAt);
    }
    if let Some(dt) = raw
        .data_field("createdAt")
        .and_then(Value::as_f64)
        .and_then(epoch_ms_to_datetime)
        .filter(has_fixed_width_keys)
    {
        return (dt, TimeSource::DataCreatedAt);
    }
    (now, TimeSource::Now)
}

fn parse_created_at(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp_str(s),
        Value::Number(n) => n.as_f64().and_then(epoch_ms_to_datetime),
        _ => None,
    }
}

/// Parse an ISO-8601 timestamp. Strings without an offset are taken as UTC.
pub fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn epoch_ms_to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}
