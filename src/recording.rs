//! Sensor recording data model
//!
//! A `Recording` is one timestamped reading for a (site, device, metric).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};

use crate::error::IotStatError;

/// Physical quantity a sensor reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
}

impl Metric {
    /// Canonical upper-case name, used as the metric tie-break when sorting
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "TEMPERATURE",
            Metric::Humidity => "HUMIDITY",
            Metric::Pressure => "PRESSURE",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Temperature => write!(f, "temperature"),
            Metric::Humidity => write!(f, "humidity"),
            Metric::Pressure => write!(f, "pressure"),
        }
    }
}

impl FromStr for Metric {
    type Err = IotStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temp" | "temperature" => Ok(Metric::Temperature),
            "hum" | "humidity" => Ok(Metric::Humidity),
            "press" | "pressure" => Ok(Metric::Pressure),
            _ => Err(IotStatError::UnknownMetric(s.to_string())),
        }
    }
}

/// Unit of a reading; each unit belongs to exactly one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Celsius,
    RelativeHumidity,
    KiloPascal,
}

impl Unit {
    pub fn metric(&self) -> Metric {
        match self {
            Unit::Celsius => Metric::Temperature,
            Unit::RelativeHumidity => Metric::Humidity,
            Unit::KiloPascal => Metric::Pressure,
        }
    }

    /// Suffix appended to formatted values
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::RelativeHumidity => "%RH",
            Unit::KiloPascal => "kPa",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = IotStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "cel" | "celsius" | "°c" => Ok(Unit::Celsius),
            "%rh" | "rh" | "relative_humidity" => Ok(Unit::RelativeHumidity),
            "kpa" | "kilo_pascal" => Ok(Unit::KiloPascal),
            _ => Err(IotStatError::UnknownUnit(s.to_string())),
        }
    }
}

/// One sensor reading
///
/// The unit is expected to belong to `metric` but this is not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct Recording {
    pub time: DateTime<FixedOffset>,
    pub site: String,
    pub device: String,
    pub metric: Metric,
    pub unit: Unit,
    pub value: f64,
}

impl Recording {
    pub fn new(
        time: DateTime<FixedOffset>,
        site: impl Into<String>,
        device: impl Into<String>,
        metric: Metric,
        unit: Unit,
        value: f64,
    ) -> Self {
        Self {
            time,
            site: site.into(),
            device: device.into(),
            metric,
            unit,
            value,
        }
    }
}
