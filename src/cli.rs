//! Command-line surface: argument parsing and filter construction

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, Utc};
use clap::Parser;

use crate::error::Result;
use crate::filters::{self, Filter};
use crate::recording::Metric;
use crate::stats::{Statistic, StatisticDefaults, parse_statistic};

/// Compute streaming statistics over IoT sensor recordings
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Compute streaming statistics over IoT sensor recordings"
)]
pub struct Args {
    /// The input CSV file to process
    pub input: PathBuf,

    /// Only include recordings at or after this time (YYYY-MM-DD HH:MM:SS, UTC)
    #[arg(long, value_parser = parse_datetime)]
    pub start: Option<DateTime<Utc>>,

    /// Only include recordings at or before this time (YYYY-MM-DD HH:MM:SS, UTC)
    #[arg(long, value_parser = parse_datetime)]
    pub end: Option<DateTime<Utc>>,

    /// Only include recordings for these sites
    #[arg(long, num_args = 1..)]
    pub site: Vec<String>,

    /// Only include recordings for these metrics
    #[arg(long, num_args = 1.., value_parser = parse_metric)]
    pub metric: Vec<Metric>,

    /// Only include recordings for these devices
    #[arg(long, num_args = 1..)]
    pub device: Vec<String>,

    /// Repeat to request multiple aggregates.
    /// Format: name[:option=value,...].
    /// Options: sort={value_asc,value_desc,device_site_metric}, k=<int|all>, name=<label>
    #[arg(long, num_args = 1..)]
    pub statistic: Vec<String>,
}

impl Args {
    /// Filters in the order they were declared; unset options add none
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters: Vec<Filter> = Vec::new();
        if let Some(start) = self.start {
            filters.push(filters::start_time(start));
        }
        if let Some(end) = self.end {
            filters.push(filters::end_time(end));
        }
        if !self.site.is_empty() {
            filters.push(filters::sites(&self.site));
        }
        if !self.metric.is_empty() {
            filters.push(filters::metrics(self.metric.iter().copied()));
        }
        if !self.device.is_empty() {
            filters.push(filters::devices(&self.device));
        }
        filters
    }

    /// Parse every `--statistic` spec before any record is read
    pub fn statistics(&self, defaults: &StatisticDefaults) -> Result<Vec<Box<dyn Statistic>>> {
        self.statistic
            .iter()
            .map(|spec| parse_statistic(spec, defaults))
            .collect()
    }
}

fn parse_datetime(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| format!("'{}' is not in YYYY-MM-DD HH:MM:SS format", value))
}

fn parse_metric(value: &str) -> std::result::Result<Metric, String> {
    value.parse::<Metric>().map_err(|e| e.to_string())
}
