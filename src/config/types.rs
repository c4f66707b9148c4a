// Configuration type definitions

use serde::Deserialize;

use crate::stats::{RowLimit, SortKey, StatisticDefaults};

/// Statistics configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct StatisticsConfig {
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default)]
    pub default_k: RowLimit,
}

impl StatisticsConfig {
    /// Defaults handed to the statistic factory
    pub fn defaults(&self) -> StatisticDefaults {
        StatisticDefaults {
            sort_key: self.default_sort,
            limit: self.default_k,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub statistics: StatisticsConfig,
}
