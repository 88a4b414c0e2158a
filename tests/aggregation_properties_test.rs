use chrono::{TimeZone, Utc};
use roundpnl::domain::{Dataset, DayKey, Decimal, MonthKey, RawRecord, RecordRef};
use roundpnl::engine::aggregator::flatten;
use roundpnl::engine::{
    group_by_day, group_by_hour, group_by_month, histogram, summarize, view_day, view_month,
    view_root, RootView,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_canonical(s).unwrap()
}

fn dataset(values: Vec<Value>) -> Dataset {
    let now = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();
    let raw: Vec<RawRecord> = values.into_iter().map(RawRecord::new).collect();
    Dataset::from_raw(&raw, now)
}

fn mixed_dataset() -> Dataset {
    dataset(vec![
        json!({"created_at": "2025-09-29T10:00:00Z", "data": {"amount": 100, "payout": 150, "payoutMultiplier": 1.5}}),
        json!({"created_at": "2025-09-29T23:30:00Z", "data": {"amount": 50, "payout": 0, "payoutMultiplier": 0}}),
        json!({"created_at": "2025-09-30T00:00:00Z", "data": {"amount": 1.25, "payout": 2.5, "payoutMultiplier": 2}}),
        json!({"created_at": "2025-10-01T00:00:00+02:00", "data": {"amount": 10, "payout": 10.5, "payoutMultiplier": 1.05}}),
        json!({"created_at": "2024-12-31T23:59:59Z", "data": {"amount": "7", "payout": 0}}),
        json!({"data": {"createdAt": 1759140000000i64, "amount": 3, "payout": 9, "payoutMultiplier": 3}}),
        json!({"data": {"amount": 1, "payout": 2, "payoutMultiplier": 5000}}),
        json!({"created_at": "2025-09-29T10:45:00Z", "data": {"payoutMultiplier": "1.2"}}),
        json!([1, 2, 3]),
    ])
}

fn ptr_set(records: &[RecordRef]) -> HashSet<*const roundpnl::NormalizedRecord> {
    records.iter().map(Arc::as_ptr).collect()
}

#[test]
fn test_month_partition_law() {
    let ds = mixed_dataset();
    let months = group_by_month(ds.records());

    let flattened = flatten(&months);
    assert_eq!(flattened.len(), ds.len());
    assert_eq!(ptr_set(&flattened), ptr_set(ds.records()));
}

#[test]
fn test_day_and_hour_partition_law() {
    let ds = mixed_dataset();
    for items in group_by_month(ds.records()).values() {
        let days = group_by_day(items);
        let flattened = flatten(&days);
        assert_eq!(flattened.len(), items.len());
        assert_eq!(ptr_set(&flattened), ptr_set(items));

        for day_items in days.values() {
            let hours = group_by_hour(day_items);
            let total: usize = hours.iter().map(|(_, r)| r.len()).sum();
            assert_eq!(total, day_items.len());
        }
    }
}

#[test]
fn test_pnl_sum_invariant() {
    let ds = mixed_dataset();
    let expected: Decimal = ds.records().iter().map(|r| r.pnl).sum();
    assert_eq!(summarize(ds.records()).total_pnl, expected);

    let by_month: Decimal = group_by_month(ds.records())
        .values()
        .map(|items| summarize(items).total_pnl)
        .sum();
    assert_eq!(by_month, expected);
}

#[test]
fn test_zero_fill_invariant() {
    assert_eq!(group_by_hour(&[]).iter().count(), 24);
    let ds = mixed_dataset();
    assert_eq!(group_by_hour(ds.records()).iter().count(), 24);
}

#[test]
fn test_histogram_total_invariant() {
    let ds = mixed_dataset();
    let h = histogram(ds.records());
    let numeric = ds
        .records()
        .iter()
        .filter(|r| r.payout_multiplier.is_some())
        .count() as u64;

    // 5000 is above the largest threshold and only shows up as overflow
    assert_eq!(h.total + h.overflow, numeric);
    assert_eq!(h.overflow, 1);
    assert_eq!(h.rows.iter().map(|r| r.count).sum::<u64>(), h.total);
}

#[test]
fn test_upper_bound_bucketing() {
    let ds = dataset(vec![
        json!({"data": {"payoutMultiplier": 1.05}}),
        json!({"data": {"payoutMultiplier": 1.051}}),
    ]);
    let h = histogram(ds.records());
    let count = |key: &str| h.rows.iter().find(|r| r.threshold_key == key).unwrap().count;

    assert_eq!(count("1.05"), 1);
    assert_eq!(count("1.1"), 1);
    assert_eq!(h.total, 2);
}

#[test]
fn test_idempotent_regrouping() {
    let ds = mixed_dataset();
    let months = group_by_month(ds.records());
    assert_eq!(group_by_month(&flatten(&months)), months);
}

#[test]
fn test_offset_timestamp_buckets_by_utc_date() {
    let ds = mixed_dataset();
    let view = view_month(&ds, &MonthKey::parse("2025-09").unwrap());
    // 2025-10-01T00:00:00+02:00 is 2025-09-30T22:00:00Z
    let sept_30 = view
        .days
        .iter()
        .find(|d| d.key.as_str() == "2025-09-30")
        .unwrap();
    assert_eq!(sept_30.stats.count, 2);
}

#[test]
fn test_scenario_two_rounds() {
    let ds = dataset(vec![
        json!({"created_at": "2025-09-29T10:00:00Z", "data": {"amount": 100, "payout": 150}}),
        json!({"created_at": "2025-09-29T23:30:00Z", "data": {"amount": 50, "payout": 0}}),
    ]);

    let RootView::Loaded { months, overall } = view_root(&ds) else {
        panic!("expected loaded root view");
    };
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].key.as_str(), "2025-09");
    assert_eq!(months[0].stats.total_pnl, Decimal::zero());
    assert_eq!(months[0].stats.count, 2);
    assert_eq!(overall.win_rate, dec("50"));

    let month = MonthKey::parse("2025-09").unwrap();
    let days = view_month(&ds, &month).days;
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].key.as_str(), "2025-09-29");
    assert_eq!(days[0].stats.total_pnl, Decimal::zero());
    assert_eq!(days[0].stats.count, 2);

    let day = view_day(&ds, &month, &DayKey::parse("2025-09-29").unwrap());
    assert_eq!(day.hours.len(), 24);
    for entry in &day.hours {
        match entry.hour.index() {
            10 => {
                assert_eq!(entry.total_pnl, dec("50"));
                assert_eq!(entry.count, 1);
            }
            23 => {
                assert_eq!(entry.total_pnl, dec("-50"));
                assert_eq!(entry.count, 1);
            }
            _ => {
                assert_eq!(entry.total_pnl, Decimal::zero());
                assert_eq!(entry.count, 0);
            }
        }
    }
}

fn extreme_dataset() -> Dataset {
    dataset(vec![
        json!({"created_at": "2025-09-29T10:00:00Z", "data": {"amount": -7e28, "payout": 7e28}}),
        json!({"created_at": "2025-09-29T11:00:00Z", "data": {"payout": 7e28, "payoutMultiplier": 1e300}}),
        json!({"created_at": "2025-09-29T12:00:00Z", "data": {"payout": 7e28, "payoutMultiplier": 2}}),
        json!({"created_at": "2025-09-29T13:00:00Z", "data": {"amount": "79228162514264337593543950335"}}),
        json!({"created_at": "2025-09-29T14:00:00Z", "data": {"amount": 1e300, "payout": -1e300}}),
        json!({"data": {"createdAt": 3.0e14, "amount": 1, "payout": 2}}),
    ])
}

#[test]
fn test_extreme_amounts_normalize_to_defined_values() {
    let ds = extreme_dataset();
    assert_eq!(ds.len(), 6);

    let by_hour = |hour: u32| {
        ds.records()
            .iter()
            .find(|r| r.utc_hour.index() == hour as usize && r.utc_month_key.as_str() == "2025-09")
            .unwrap()
            .clone()
    };
    // -7e28 .. 7e28 has no representable difference
    assert_eq!(by_hour(10).pnl, Decimal::zero());
    assert_eq!(by_hour(11).payout_multiplier, None);
    // 1e300 coerces to 0 like any non-numeric field
    assert_eq!(by_hour(14).amount, Decimal::zero());
    assert_eq!(by_hour(14).pnl, Decimal::zero());

    for record in ds.records() {
        assert!(MonthKey::parse(record.utc_month_key.as_str()).is_ok());
        assert!(DayKey::parse(record.utc_date_key.as_str()).is_ok());
    }
}

#[test]
fn test_aggregation_stays_total_on_extreme_amounts() {
    let ds = extreme_dataset();
    let max = Decimal::parse_lenient("79228162514264337593543950335").unwrap();

    let stats = summarize(ds.records());
    assert_eq!(stats.count, 6);

    let RootView::Loaded { months, .. } = view_root(&ds) else {
        panic!("expected loaded root view");
    };
    let september = months.iter().find(|m| m.key.as_str() == "2025-09").unwrap();
    // 7e28 + 7e28 clamps to the maximum before the large loss is added back
    assert_eq!(september.stats.count, 5);
    assert!(september.stats.total_pnl < max);

    let day = view_day(
        &ds,
        &MonthKey::parse("2025-09").unwrap(),
        &DayKey::parse("2025-09-29").unwrap(),
    );
    assert_eq!(day.hours[11].total_pnl, Decimal::parse_lenient("7e28").unwrap());

    let h = histogram(ds.records());
    assert_eq!(h.total, 1);
    assert_eq!(h.overflow, 0);
}

#[test]
fn test_ingesting_extreme_document_does_not_fail() {
    use roundpnl::orchestration::{ingest, SourceDocument};

    let now = Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap();
    let doc = SourceDocument::new(
        "extreme.json",
        r#"[{"data":{"amount":-7e28,"payout":7e28}},{"data":{"payout":7e28}},{"data":{"payout":7e28}}]"#,
    );
    let report = ingest(&[doc], now);

    assert!(report.failures.is_empty());
    assert_eq!(report.dataset.len(), 3);
    let stats = summarize(report.dataset.records());
    assert_eq!(
        stats.total_pnl,
        Decimal::parse_lenient("79228162514264337593543950335").unwrap()
    );
}
