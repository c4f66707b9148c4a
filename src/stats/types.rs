//! Type definitions shared by every statistic

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::IotStatError;
use crate::recording::{Metric, Recording, Unit};

/// Rows shown when neither the caller nor the spec string sets `k`
pub const DEFAULT_ROW_LIMIT: usize = 10;

/// Grouping key: records are bucketed by (site, device, metric), case-sensitive
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub site: String,
    pub device: String,
    pub metric: Metric,
}

impl GroupKey {
    pub fn of(record: &Recording) -> Self {
        Self {
            site: record.site.clone(),
            device: record.device.clone(),
            metric: record.metric,
        }
    }
}

/// Ordering applied to result lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by value, ties broken by metric name, device, then site
    ValueAsc,
    /// Descending by value, same tie-break as `ValueAsc`
    #[default]
    ValueDesc,
    /// Lexicographic by device, site, then metric name; value ignored
    DeviceSiteMetric,
}

impl SortKey {
    pub const ALLOWED: [&'static str; 3] = ["value_asc", "value_desc", "device_site_metric"];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::ValueAsc => write!(f, "value_asc"),
            SortKey::ValueDesc => write!(f, "value_desc"),
            SortKey::DeviceSiteMetric => write!(f, "device_site_metric"),
        }
    }
}

impl FromStr for SortKey {
    type Err = IotStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "value_asc" => Ok(SortKey::ValueAsc),
            "value_desc" => Ok(SortKey::ValueDesc),
            "device_site_metric" => Ok(SortKey::DeviceSiteMetric),
            other => Err(IotStatError::UnsupportedSortKey(other.to_string())),
        }
    }
}

/// Top-k truncation of a sorted result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRowLimit")]
pub enum RowLimit {
    All,
    Top(usize),
}

impl RowLimit {
    /// Number of rows to keep out of `available`
    pub fn rows(&self, available: usize) -> usize {
        match self {
            RowLimit::All => available,
            RowLimit::Top(k) => (*k).min(available),
        }
    }
}

impl Default for RowLimit {
    fn default() -> Self {
        RowLimit::Top(DEFAULT_ROW_LIMIT)
    }
}

impl fmt::Display for RowLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowLimit::All => write!(f, "all"),
            RowLimit::Top(k) => write!(f, "{}", k),
        }
    }
}

impl FromStr for RowLimit {
    type Err = IotStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "all" | "none" => return Ok(RowLimit::All),
            _ => {}
        }
        match trimmed.parse::<i64>() {
            Ok(k) if k >= 0 => usize::try_from(k)
                .map(RowLimit::Top)
                .map_err(|_| IotStatError::InvalidLimit(s.to_string())),
            _ => Err(IotStatError::InvalidLimit(s.to_string())),
        }
    }
}

/// `k` as it may appear in a config file: an integer or a keyword
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRowLimit {
    Count(i64),
    Keyword(String),
}

impl TryFrom<RawRowLimit> for RowLimit {
    type Error = IotStatError;

    fn try_from(raw: RawRowLimit) -> Result<Self, Self::Error> {
        match raw {
            RawRowLimit::Count(k) => k.to_string().parse(),
            RawRowLimit::Keyword(word) => word.parse(),
        }
    }
}

/// Per-instance configuration fixed at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticSettings {
    /// Label shown in the "Results for ..." header
    pub name: String,
    pub sort_key: SortKey,
    pub limit: RowLimit,
}

impl StatisticSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sort_key: SortKey::default(),
            limit: RowLimit::default(),
        }
    }
}

/// One finalized group, materialized only while rendering a result
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticEntry {
    pub site: String,
    pub device: String,
    pub metric: Metric,
    pub unit: Option<Unit>,
    pub value: f64,
}

impl fmt::Display for StatisticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {}\t=\t{:.2}{}",
            self.device,
            self.site,
            self.metric,
            self.value,
            self.unit.map(|u| u.suffix()).unwrap_or("")
        )
    }
}
