//! Shared test utilities for iotstat
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::recording::{Metric, Recording, Unit};
    use chrono::{DateTime, TimeZone, Utc};

    /// Four readings across two sites, one per metric kind plus a second temperature
    pub const SAMPLE_CSV: &str = "time,site,device,metric,unit,value
2025-01-01 00:00:00 +0000 UTC,site_1,device_a,temperature,C,19.0
2025-01-01 00:05:00 +0000 UTC,site_1,device_b,temperature,C,21.0
2025-01-01 00:10:00 +0000 UTC,site_2,device_a,humidity,%RH,45.0
2025-01-01 00:15:00 +0000 UTC,site_2,device_c,pressure,kPa,100.5";

    /// Helper to build a recording at a fixed instant
    pub fn record(site: &str, device: &str, metric: Metric, unit: Unit, value: f64) -> Recording {
        let time = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Recording::new(time.fixed_offset(), site, device, metric, unit, value)
    }

    /// Helper to build a temperature recording at `time`
    pub fn record_at(time: DateTime<Utc>) -> Recording {
        Recording::new(
            time.fixed_offset(),
            "site1",
            "device1",
            Metric::Temperature,
            Unit::Celsius,
            0.0,
        )
    }
}
