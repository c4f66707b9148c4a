//! The streaming statistic contract and shared result rendering
//!
//! A statistic is driven through passes over the input:
//! `begin_pass` resets per-pass state, `consume` is called once per surviving
//! record, and `result` renders the accumulated groups. Statistics that set
//! `requires_second_pass` are fed the whole input a second time.

use std::cmp::Ordering;

use crate::error::Result;
use crate::recording::Recording;
use crate::stats::types::{RowLimit, SortKey, StatisticEntry, StatisticSettings};

/// Returned by `result` when no group was ever populated
pub const UNKNOWN_VALUE: &str = "N/A";

pub trait Statistic {
    fn settings(&self) -> &StatisticSettings;

    fn name(&self) -> &str {
        &self.settings().name
    }

    /// Whether the driver must replay the input after the first pass
    fn requires_second_pass(&self) -> bool {
        false
    }

    fn begin_pass(&mut self, is_second_pass: bool);

    /// Fails if the record's group already holds a different unit
    fn consume(&mut self, record: &Recording) -> Result<()>;

    /// Finalized value per group, in no particular order
    fn entries(&self) -> Vec<StatisticEntry>;

    /// Render one line per group, or `N/A` when there are no groups.
    ///
    /// `None` falls back to the instance's configured sort key and row limit.
    fn result(&self, sort_key: Option<SortKey>, limit: Option<RowLimit>) -> String {
        let settings = self.settings();
        render_entries(
            self.entries(),
            sort_key.unwrap_or(settings.sort_key),
            limit.unwrap_or(settings.limit),
        )
    }
}

pub fn render_entries(mut entries: Vec<StatisticEntry>, sort_key: SortKey, limit: RowLimit) -> String {
    if entries.is_empty() {
        return UNKNOWN_VALUE.to_string();
    }

    sort_entries(&mut entries, sort_key);
    let rows = limit.rows(entries.len());

    entries
        .iter()
        .take(rows)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn sort_entries(entries: &mut [StatisticEntry], sort_key: SortKey) {
    match sort_key {
        SortKey::ValueAsc => {
            entries.sort_by(|a, b| a.value.total_cmp(&b.value).then_with(|| value_tie_break(a, b)))
        }
        SortKey::ValueDesc => {
            entries.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| value_tie_break(a, b)))
        }
        SortKey::DeviceSiteMetric => entries.sort_by(|a, b| {
            a.device
                .cmp(&b.device)
                .then_with(|| a.site.cmp(&b.site))
                .then_with(|| a.metric.name().cmp(b.metric.name()))
        }),
    }
}

fn value_tie_break(a: &StatisticEntry, b: &StatisticEntry) -> Ordering {
    a.metric
        .name()
        .cmp(b.metric.name())
        .then_with(|| a.device.cmp(&b.device))
        .then_with(|| a.site.cmp(&b.site))
}

#[cfg(test)]
#[path = "statistic_tests.rs"]
mod statistic_tests;
