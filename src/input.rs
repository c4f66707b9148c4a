pub mod reader;
mod source;

pub use reader::{CsvRecordReader, parse_timestamp};
pub use source::{CsvFileSource, CsvTextSource, RecordingIter, RecordingSource};
