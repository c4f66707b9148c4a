use crate::error::Result;
use crate::recording::Recording;
use crate::stats::groups::GroupTable;
use crate::stats::statistic::Statistic;
use crate::stats::types::{StatisticEntry, StatisticSettings};

#[derive(Debug, Clone, Copy, Default)]
struct RunningSum {
    sum: f64,
    count: u64,
}

/// Arithmetic mean per group
#[derive(Debug, Clone)]
pub struct Average {
    settings: StatisticSettings,
    groups: GroupTable<RunningSum>,
}

impl Average {
    pub fn new(settings: StatisticSettings) -> Self {
        Self {
            settings,
            groups: GroupTable::default(),
        }
    }
}

impl Default for Average {
    fn default() -> Self {
        Self::new(StatisticSettings::new("average"))
    }
}

impl Statistic for Average {
    fn settings(&self) -> &StatisticSettings {
        &self.settings
    }

    fn begin_pass(&mut self, _is_second_pass: bool) {
        self.groups.clear();
    }

    fn consume(&mut self, record: &Recording) -> Result<()> {
        let acc = self
            .groups
            .unit_checked(record, &self.settings.name, RunningSum::default)?;
        acc.sum += record.value;
        acc.count += 1;
        Ok(())
    }

    fn entries(&self) -> Vec<StatisticEntry> {
        self.groups.entries(|acc| acc.sum / acc.count as f64)
    }
}
