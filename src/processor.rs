//! Pass orchestration over a restartable recording source
//!
//! The first pass always runs and feeds every statistic. A second pass runs
//! only when some statistic asks for it, and feeds only those statistics.

use std::io::Write;

use crate::error::Result;
use crate::filters::{Filter, passes_all};
use crate::input::RecordingSource;
use crate::stats::Statistic;

/// Records seen and kept during one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassCounts {
    pub read: u64,
    pub kept: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub first_pass: PassCounts,
    /// `None` when no statistic required a second pass
    pub second_pass: Option<PassCounts>,
}

/// Run all passes, then write every statistic's result in configuration order
pub fn process_recordings<S, W>(
    source: &S,
    filters: &[Filter],
    statistics: &mut [Box<dyn Statistic>],
    out: &mut W,
) -> Result<ProcessSummary>
where
    S: RecordingSource + ?Sized,
    W: Write,
{
    let summary = run_passes(source, filters, statistics)?;
    write_results(statistics, out)?;
    Ok(summary)
}

/// Feed the input to the statistics; any error aborts the run
pub fn run_passes<S>(
    source: &S,
    filters: &[Filter],
    statistics: &mut [Box<dyn Statistic>],
) -> Result<ProcessSummary>
where
    S: RecordingSource + ?Sized,
{
    for stat in statistics.iter_mut() {
        stat.begin_pass(false);
    }
    let mut all: Vec<&mut Box<dyn Statistic>> = statistics.iter_mut().collect();
    let first_pass = run_pass(source, filters, &mut all)?;
    log::debug!(
        "First pass: {} records read, {} kept",
        first_pass.read,
        first_pass.kept
    );

    let mut second: Vec<&mut Box<dyn Statistic>> = statistics
        .iter_mut()
        .filter(|stat| stat.requires_second_pass())
        .collect();
    if second.is_empty() {
        return Ok(ProcessSummary {
            first_pass,
            second_pass: None,
        });
    }

    for stat in second.iter_mut() {
        stat.begin_pass(true);
    }
    let second_pass = run_pass(source, filters, &mut second)?;
    log::debug!(
        "Second pass for {} statistic(s): {} records read, {} kept",
        second.len(),
        second_pass.read,
        second_pass.kept
    );

    Ok(ProcessSummary {
        first_pass,
        second_pass: Some(second_pass),
    })
}

fn run_pass<S>(
    source: &S,
    filters: &[Filter],
    statistics: &mut [&mut Box<dyn Statistic>],
) -> Result<PassCounts>
where
    S: RecordingSource + ?Sized,
{
    let mut counts = PassCounts::default();
    for record in source.open()? {
        let record = record?;
        counts.read += 1;
        if !passes_all(filters, &record) {
            continue;
        }
        counts.kept += 1;
        for stat in statistics.iter_mut() {
            stat.consume(&record)?;
        }
    }
    Ok(counts)
}

pub fn write_results<W: Write>(statistics: &[Box<dyn Statistic>], out: &mut W) -> Result<()> {
    for stat in statistics {
        writeln!(out, "Results for {}:", stat.name())?;
        writeln!(out, "{}", stat.result(None, None))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod processor_tests;
