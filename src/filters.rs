//! Row-level record filters
//!
//! Each filter is a pure predicate; a record survives only if every filter
//! accepts it.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone};

use crate::recording::{Metric, Recording};

pub type Filter = Box<dyn Fn(&Recording) -> bool>;

/// Records at or after `start`
pub fn start_time<Tz: TimeZone>(start: DateTime<Tz>) -> Filter
where
    Tz: 'static,
{
    Box::new(move |record: &Recording| record.time >= start)
}

/// Records at or before `end`
pub fn end_time<Tz: TimeZone>(end: DateTime<Tz>) -> Filter
where
    Tz: 'static,
{
    Box::new(move |record: &Recording| record.time <= end)
}

/// Case-insensitive site membership
pub fn sites<I, S>(allowed: I) -> Filter
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let allowed = lowercase_set(allowed);
    Box::new(move |record: &Recording| allowed.contains(&record.site.to_lowercase()))
}

/// Case-insensitive device membership
pub fn devices<I, S>(allowed: I) -> Filter
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let allowed = lowercase_set(allowed);
    Box::new(move |record: &Recording| allowed.contains(&record.device.to_lowercase()))
}

pub fn metrics(allowed: impl IntoIterator<Item = Metric>) -> Filter {
    let allowed: HashSet<Metric> = allowed.into_iter().collect();
    Box::new(move |record: &Recording| allowed.contains(&record.metric))
}

/// Logical AND over `filters`; an empty list admits everything
pub fn passes_all(filters: &[Filter], record: &Recording) -> bool {
    filters.iter().all(|f| f(record))
}

fn lowercase_set<I, S>(values: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_lowercase())
        .collect()
}
