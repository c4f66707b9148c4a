//! Grouped accumulator storage shared by the concrete statistics

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::{IotStatError, Result};
use crate::recording::{Recording, Unit};
use crate::stats::types::{GroupKey, StatisticEntry};

#[derive(Debug, Clone)]
struct Group<S> {
    unit: Option<Unit>,
    state: S,
}

/// Map from (site, device, metric) to a per-group accumulator `S`
#[derive(Debug, Clone)]
pub struct GroupTable<S> {
    groups: HashMap<GroupKey, Group<S>>,
}

impl<S> Default for GroupTable<S> {
    fn default() -> Self {
        Self {
            groups: HashMap::new(),
        }
    }
}

impl<S> GroupTable<S> {
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// State for the record's group, seeded with `init` on first sight.
    ///
    /// The first record's unit is pinned to the group; a later record with a
    /// different unit is an error attributed to `statistic`.
    pub fn unit_checked(
        &mut self,
        record: &Recording,
        statistic: &str,
        init: impl FnOnce() -> S,
    ) -> Result<&mut S> {
        match self.groups.entry(GroupKey::of(record)) {
            Entry::Occupied(occupied) => {
                let group = occupied.into_mut();
                if let Some(unit) = group.unit
                    && unit != record.unit
                {
                    return Err(IotStatError::InconsistentUnit {
                        statistic: statistic.to_string(),
                        site: record.site.clone(),
                        device: record.device.clone(),
                        metric: record.metric.to_string(),
                        expected: unit.to_string(),
                        found: record.unit.to_string(),
                    });
                }
                Ok(&mut group.state)
            }
            Entry::Vacant(vacant) => {
                let group = vacant.insert(Group {
                    unit: Some(record.unit),
                    state: init(),
                });
                Ok(&mut group.state)
            }
        }
    }

    /// State for the record's group without tracking units
    pub fn unitless(&mut self, record: &Recording, init: impl FnOnce() -> S) -> &mut S {
        &mut self
            .groups
            .entry(GroupKey::of(record))
            .or_insert_with(|| Group {
                unit: None,
                state: init(),
            })
            .state
    }

    pub fn entries(&self, finish: impl Fn(&S) -> f64) -> Vec<StatisticEntry> {
        self.groups
            .iter()
            .map(|(key, group)| StatisticEntry {
                site: key.site.clone(),
                device: key.device.clone(),
                metric: key.metric,
                unit: group.unit,
                value: finish(&group.state),
            })
            .collect()
    }
}
