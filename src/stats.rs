//! Stats module for streaming aggregate statistics
//!
//! Each statistic owns a map from (site, device, metric) to a small
//! accumulator and renders one line per group once the input is consumed.

mod average;
mod count;
mod extrema;
mod factory;
mod groups;
mod statistic;
mod stddev;
mod types;

// Re-export public types
pub use average::Average;
pub use count::Count;
pub use extrema::{Max, Min};
pub use factory::{
    StatisticDefaults, StatisticKind, StatisticSpec, parse_statistic, statistic_from_str,
};
pub use groups::GroupTable;
pub use statistic::{Statistic, UNKNOWN_VALUE, render_entries, sort_entries};
pub use stddev::{PopulationStdDev, Welford};
pub use types::{
    DEFAULT_ROW_LIMIT, GroupKey, RowLimit, SortKey, StatisticEntry, StatisticSettings,
};
