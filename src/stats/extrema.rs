//! Per-group minimum and maximum

use crate::error::Result;
use crate::recording::Recording;
use crate::stats::groups::GroupTable;
use crate::stats::statistic::Statistic;
use crate::stats::types::{StatisticEntry, StatisticSettings};

/// Smallest value seen per group
#[derive(Debug, Clone)]
pub struct Min {
    settings: StatisticSettings,
    groups: GroupTable<f64>,
}

impl Min {
    pub fn new(settings: StatisticSettings) -> Self {
        Self {
            settings,
            groups: GroupTable::default(),
        }
    }
}

impl Default for Min {
    fn default() -> Self {
        Self::new(StatisticSettings::new("min"))
    }
}

impl Statistic for Min {
    fn settings(&self) -> &StatisticSettings {
        &self.settings
    }

    fn begin_pass(&mut self, _is_second_pass: bool) {
        self.groups.clear();
    }

    fn consume(&mut self, record: &Recording) -> Result<()> {
        let current = self
            .groups
            .unit_checked(record, &self.settings.name, || record.value)?;
        if record.value < *current {
            *current = record.value;
        }
        Ok(())
    }

    fn entries(&self) -> Vec<StatisticEntry> {
        self.groups.entries(|min| *min)
    }
}

/// Largest value seen per group
#[derive(Debug, Clone)]
pub struct Max {
    settings: StatisticSettings,
    groups: GroupTable<f64>,
}

impl Max {
    pub fn new(settings: StatisticSettings) -> Self {
        Self {
            settings,
            groups: GroupTable::default(),
        }
    }
}

impl Default for Max {
    fn default() -> Self {
        Self::new(StatisticSettings::new("max"))
    }
}

impl Statistic for Max {
    fn settings(&self) -> &StatisticSettings {
        &self.settings
    }

    fn begin_pass(&mut self, _is_second_pass: bool) {
        self.groups.clear();
    }

    fn consume(&mut self, record: &Recording) -> Result<()> {
        let current = self
            .groups
            .unit_checked(record, &self.settings.name, || record.value)?;
        if record.value > *current {
            *current = record.value;
        }
        Ok(())
    }

    fn entries(&self) -> Vec<StatisticEntry> {
        self.groups.entries(|max| *max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IotStatError;
    use crate::recording::{Metric, Unit};
    use crate::test_utils::test_helpers::record;

    fn feed(stat: &mut dyn Statistic, values: &[f64]) {
        stat.begin_pass(false);
        for v in values {
            stat.consume(&record("site1", "dev1", Metric::Humidity, Unit::RelativeHumidity, *v))
                .unwrap();
        }
    }

    #[test]
    fn test_min_picks_smallest() {
        let mut stat = Min::default();
        feed(&mut stat, &[55.0, 48.0]);
        assert_eq!(stat.result(None, None), "dev1/site1 humidity\t=\t48.00%RH");
    }

    #[test]
    fn test_max_picks_largest() {
        let mut stat = Max::default();
        feed(&mut stat, &[55.0, 48.0]);
        assert_eq!(stat.result(None, None), "dev1/site1 humidity\t=\t55.00%RH");
    }

    #[test]
    fn test_single_value_is_both_min_and_max() {
        let mut min = Min::default();
        let mut max = Max::default();
        feed(&mut min, &[-3.5]);
        feed(&mut max, &[-3.5]);

        assert_eq!(min.entries()[0].value, -3.5);
        assert_eq!(max.entries()[0].value, -3.5);
    }

    #[test]
    fn test_extrema_reject_mixed_units() {
        let mut stat = Max::default();
        feed(&mut stat, &[1.0]);
        let err = stat
            .consume(&record("site1", "dev1", Metric::Humidity, Unit::KiloPascal, 2.0))
            .unwrap_err();

        assert!(matches!(err, IotStatError::InconsistentUnit { ref statistic, .. } if statistic == "max"));
    }
}
