//! Tests for stats/statistic

use super::*;
use crate::recording::{Metric, Unit};
use crate::stats::average::Average;
use crate::test_utils::test_helpers::record;
use proptest::prelude::*;

fn entry(site: &str, device: &str, metric: Metric, value: f64) -> StatisticEntry {
    StatisticEntry {
        site: site.to_string(),
        device: device.to_string(),
        metric,
        unit: None,
        value,
    }
}

fn three_groups() -> Vec<StatisticEntry> {
    vec![
        entry("site_b", "dev_a", Metric::Temperature, 10.0),
        entry("site_a", "dev_c", Metric::Temperature, 30.0),
        entry("site_a", "dev_b", Metric::Temperature, 20.0),
    ]
}

fn values(rendered: &str) -> Vec<String> {
    rendered
        .lines()
        .map(|line| line.rsplit('\t').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_empty_entries_render_unknown() {
    assert_eq!(render_entries(vec![], SortKey::ValueAsc, RowLimit::All), UNKNOWN_VALUE);
    assert_eq!(render_entries(vec![], SortKey::ValueDesc, RowLimit::Top(0)), "N/A");
}

#[test]
fn test_value_asc() {
    let rendered = render_entries(three_groups(), SortKey::ValueAsc, RowLimit::All);
    assert_eq!(values(&rendered), ["10.00", "20.00", "30.00"]);
}

#[test]
fn test_value_desc() {
    let rendered = render_entries(three_groups(), SortKey::ValueDesc, RowLimit::All);
    assert_eq!(values(&rendered), ["30.00", "20.00", "10.00"]);
}

#[test]
fn test_device_site_metric_ignores_value() {
    let rendered = render_entries(three_groups(), SortKey::DeviceSiteMetric, RowLimit::All);
    let devices: Vec<&str> = rendered
        .lines()
        .map(|l| l.split('/').next().unwrap_or_default())
        .collect();
    assert_eq!(devices, ["dev_a", "dev_b", "dev_c"]);
}

#[test]
fn test_device_site_metric_orders_site_then_metric() {
    let mut entries = vec![
        entry("site_b", "dev", Metric::Humidity, 1.0),
        entry("site_a", "dev", Metric::Temperature, 2.0),
        entry("site_a", "dev", Metric::Humidity, 3.0),
    ];
    sort_entries(&mut entries, SortKey::DeviceSiteMetric);

    let order: Vec<(&str, Metric)> = entries.iter().map(|e| (e.site.as_str(), e.metric)).collect();
    assert_eq!(
        order,
        [
            ("site_a", Metric::Humidity),
            ("site_a", Metric::Temperature),
            ("site_b", Metric::Humidity),
        ]
    );
}

#[test]
fn test_value_ties_break_by_metric_device_site() {
    let mut entries = vec![
        entry("site_b", "dev_a", Metric::Temperature, 5.0),
        entry("site_a", "dev_b", Metric::Humidity, 5.0),
        entry("site_a", "dev_a", Metric::Temperature, 5.0),
        entry("site_z", "dev_a", Metric::Humidity, 5.0),
    ];
    sort_entries(&mut entries, SortKey::ValueDesc);

    let order: Vec<(&str, &str)> = entries
        .iter()
        .map(|e| (e.device.as_str(), e.site.as_str()))
        .collect();
    assert_eq!(
        order,
        [
            ("dev_a", "site_z"),
            ("dev_b", "site_a"),
            ("dev_a", "site_a"),
            ("dev_a", "site_b"),
        ]
    );
}

#[test]
fn test_k_zero_yields_empty_string() {
    assert_eq!(render_entries(three_groups(), SortKey::ValueAsc, RowLimit::Top(0)), "");
}

#[test]
fn test_k_truncates_after_sorting() {
    let rendered = render_entries(three_groups(), SortKey::ValueDesc, RowLimit::Top(2));
    assert_eq!(values(&rendered), ["30.00", "20.00"]);
}

#[test]
fn test_k_larger_than_groups_returns_all() {
    let rendered = render_entries(three_groups(), SortKey::ValueAsc, RowLimit::Top(50));
    assert_eq!(rendered.lines().count(), 3);
}

#[test]
fn test_result_falls_back_to_configured_defaults() {
    let settings = StatisticSettings {
        name: "avg".to_string(),
        sort_key: SortKey::ValueAsc,
        limit: RowLimit::Top(1),
    };
    let mut stat = Average::new(settings);
    stat.begin_pass(false);
    stat.consume(&record("s1", "d1", Metric::Pressure, Unit::KiloPascal, 101.0))
        .unwrap();
    stat.consume(&record("s2", "d2", Metric::Pressure, Unit::KiloPascal, 99.0))
        .unwrap();

    assert_eq!(stat.result(None, None), "d2/s2 pressure\t=\t99.00kPa");
    assert_eq!(
        stat.result(Some(SortKey::ValueDesc), None),
        "d1/s1 pressure\t=\t101.00kPa"
    );
    assert_eq!(stat.result(None, Some(RowLimit::All)).lines().count(), 2);
}

#[test]
fn test_result_is_idempotent() {
    let mut stat = Average::default();
    stat.begin_pass(false);
    stat.consume(&record("s1", "d1", Metric::Humidity, Unit::RelativeHumidity, 41.0))
        .unwrap();

    let first = stat.result(None, None);
    let _ = stat.result(Some(SortKey::ValueAsc), Some(RowLimit::Top(0)));
    assert_eq!(stat.result(None, None), first);
}

#[test]
fn test_untouched_statistic_is_unknown() {
    let stat = Average::default();
    assert_eq!(stat.result(None, None), "N/A");
}

#[test]
fn test_rendered_snapshot() {
    let mut entries = three_groups();
    entries[0].unit = Some(Unit::Celsius);
    entries[1].unit = Some(Unit::Celsius);
    entries[2].unit = Some(Unit::Celsius);

    let rendered = render_entries(entries, SortKey::ValueDesc, RowLimit::All);
    insta::assert_snapshot!(rendered, @r"
dev_c/site_a temperature	=	30.00°C
dev_b/site_a temperature	=	20.00°C
dev_a/site_b temperature	=	10.00°C
");
}

fn arb_entries() -> impl Strategy<Value = Vec<StatisticEntry>> {
    prop::collection::vec(
        ("[a-c]{1,2}", "[a-c]{1,2}", -100.0f64..100.0),
        0..20,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(site, device, value)| entry(&site, &device, Metric::Temperature, value))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_top_k_never_exceeds_k_or_groups(entries in arb_entries(), k in 0usize..30) {
        let total = entries.len();
        let rendered = render_entries(entries, SortKey::ValueAsc, RowLimit::Top(k));
        if total == 0 {
            prop_assert_eq!(rendered, "N/A");
        } else {
            prop_assert_eq!(rendered.lines().count(), k.min(total));
        }
    }

    #[test]
    fn prop_value_asc_is_non_decreasing(mut entries in arb_entries()) {
        sort_entries(&mut entries, SortKey::ValueAsc);
        prop_assert!(entries.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn prop_value_desc_reverses_asc_values(entries in arb_entries()) {
        let mut asc = entries.clone();
        let mut desc = entries;
        sort_entries(&mut asc, SortKey::ValueAsc);
        sort_entries(&mut desc, SortKey::ValueDesc);
        let mut asc_values: Vec<f64> = asc.iter().map(|e| e.value).collect();
        asc_values.reverse();
        let desc_values: Vec<f64> = desc.iter().map(|e| e.value).collect();
        prop_assert_eq!(asc_values, desc_values);
    }
}
