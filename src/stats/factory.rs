//! Builds configured statistics from `name[:option=value,...]` strings

use std::fmt;
use std::str::FromStr;

use crate::error::{IotStatError, Result};
use crate::stats::average::Average;
use crate::stats::count::Count;
use crate::stats::extrema::{Max, Min};
use crate::stats::statistic::Statistic;
use crate::stats::stddev::PopulationStdDev;
use crate::stats::types::{RowLimit, SortKey, StatisticSettings};

/// The statistics that can be requested by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticKind {
    Average,
    Min,
    Max,
    Count,
    PopulationStdDev,
}

impl StatisticKind {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            StatisticKind::Average => "average",
            StatisticKind::Min => "min",
            StatisticKind::Max => "max",
            StatisticKind::Count => "count",
            StatisticKind::PopulationStdDev => "population_stddev",
        }
    }

    pub fn build(self, settings: StatisticSettings) -> Box<dyn Statistic> {
        match self {
            StatisticKind::Average => Box::new(Average::new(settings)),
            StatisticKind::Min => Box::new(Min::new(settings)),
            StatisticKind::Max => Box::new(Max::new(settings)),
            StatisticKind::Count => Box::new(Count::new(settings)),
            StatisticKind::PopulationStdDev => Box::new(PopulationStdDev::new(settings)),
        }
    }
}

impl fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for StatisticKind {
    type Err = IotStatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "average" => Ok(StatisticKind::Average),
            "min" => Ok(StatisticKind::Min),
            "max" => Ok(StatisticKind::Max),
            "count" => Ok(StatisticKind::Count),
            "population_stddev" => Ok(StatisticKind::PopulationStdDev),
            _ => Err(IotStatError::UnknownStatistic(s.trim().to_string())),
        }
    }
}

/// Sort key and row limit applied when a spec string doesn't set them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatisticDefaults {
    pub sort_key: SortKey,
    pub limit: RowLimit,
}

/// A parsed specification, before a statistic is built from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticSpec {
    pub kind: StatisticKind,
    pub settings: StatisticSettings,
}

impl StatisticSpec {
    pub fn parse(spec: &str, defaults: &StatisticDefaults) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(IotStatError::EmptySpec);
        }

        let (name, options) = match spec.split_once(':') {
            Some((name, options)) => (name, Some(options)),
            None => (spec, None),
        };

        let kind: StatisticKind = name.parse()?;
        let mut settings = StatisticSettings {
            name: kind.canonical_name().to_string(),
            sort_key: defaults.sort_key,
            limit: defaults.limit,
        };

        for fragment in options.into_iter().flat_map(|o| o.split(',')) {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            let (key, value) = fragment
                .split_once('=')
                .ok_or_else(|| IotStatError::MalformedOption(fragment.to_string()))?;

            match key.trim().to_lowercase().as_str() {
                "sort" => settings.sort_key = value.parse()?,
                "k" => settings.limit = value.parse()?,
                "name" => {
                    let label = value.trim();
                    if !label.is_empty() {
                        settings.name = label.to_string();
                    }
                }
                _ => return Err(IotStatError::UnknownOption(key.trim().to_string())),
            }
        }

        Ok(Self { kind, settings })
    }

    pub fn build(self) -> Box<dyn Statistic> {
        self.kind.build(self.settings)
    }
}

/// Parse a spec string into a configured statistic
pub fn parse_statistic(spec: &str, defaults: &StatisticDefaults) -> Result<Box<dyn Statistic>> {
    let parsed = StatisticSpec::parse(spec, defaults)?;
    log::debug!(
        "Configured {} as '{}' (sort={}, k={})",
        parsed.kind,
        parsed.settings.name,
        parsed.settings.sort_key,
        parsed.settings.limit
    );
    Ok(parsed.build())
}

/// Parse a spec string using the built-in defaults (`value_desc`, k=10)
pub fn statistic_from_str(spec: &str) -> Result<Box<dyn Statistic>> {
    parse_statistic(spec, &StatisticDefaults::default())
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod factory_tests;
