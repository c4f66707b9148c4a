use crate::error::Result;
use crate::recording::Recording;
use crate::stats::groups::GroupTable;
use crate::stats::statistic::Statistic;
use crate::stats::types::{StatisticEntry, StatisticSettings};

/// Number of records per group; carries no unit
#[derive(Debug, Clone)]
pub struct Count {
    settings: StatisticSettings,
    groups: GroupTable<u64>,
}

impl Count {
    pub fn new(settings: StatisticSettings) -> Self {
        Self {
            settings,
            groups: GroupTable::default(),
        }
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::new(StatisticSettings::new("count"))
    }
}

impl Statistic for Count {
    fn settings(&self) -> &StatisticSettings {
        &self.settings
    }

    fn begin_pass(&mut self, _is_second_pass: bool) {
        self.groups.clear();
    }

    fn consume(&mut self, record: &Recording) -> Result<()> {
        *self.groups.unitless(record, || 0) += 1;
        Ok(())
    }

    fn entries(&self) -> Vec<StatisticEntry> {
        self.groups.entries(|count| *count as f64)
    }
}
