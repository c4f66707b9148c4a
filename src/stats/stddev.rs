//! Population standard deviation via Welford's online algorithm

use crate::error::Result;
use crate::recording::Recording;
use crate::stats::groups::GroupTable;
use crate::stats::statistic::Statistic;
use crate::stats::types::{StatisticEntry, StatisticSettings};

/// Running moments for one group
///
/// Updated in a single pass without keeping raw values; `m2` is the sum of
/// squared differences from the running mean.
#[derive(Debug, Clone, Copy, Default)]
pub struct Welford {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Welford {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// NaN when no value has been pushed
    pub fn population_stddev(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }
        (self.m2 / self.count as f64).sqrt()
    }
}

/// Population standard deviation per group
#[derive(Debug, Clone)]
pub struct PopulationStdDev {
    settings: StatisticSettings,
    groups: GroupTable<Welford>,
}

impl PopulationStdDev {
    pub fn new(settings: StatisticSettings) -> Self {
        Self {
            settings,
            groups: GroupTable::default(),
        }
    }
}

impl Default for PopulationStdDev {
    fn default() -> Self {
        Self::new(StatisticSettings::new("population_stddev"))
    }
}

impl Statistic for PopulationStdDev {
    fn settings(&self) -> &StatisticSettings {
        &self.settings
    }

    fn begin_pass(&mut self, _is_second_pass: bool) {
        self.groups.clear();
    }

    fn consume(&mut self, record: &Recording) -> Result<()> {
        self.groups
            .unit_checked(record, &self.settings.name, Welford::default)?
            .push(record.value);
        Ok(())
    }

    fn entries(&self) -> Vec<StatisticEntry> {
        self.groups.entries(Welford::population_stddev)
    }
}
