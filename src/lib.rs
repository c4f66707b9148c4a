//! iotstat library - Streaming statistics over IoT sensor recordings
//!
//! This library exposes the statistics engine, the CSV record reader, the
//! filters and the pass driver used by the `iotstat` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod input;
pub mod processor;
pub mod recording;
pub mod stats;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use error::IotStatError;
pub use processor::process_recordings;
pub use recording::{Metric, Recording, Unit};
pub use stats::Statistic;
