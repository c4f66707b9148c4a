use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::input::reader::CsvRecordReader;
use crate::recording::Recording;

pub type RecordingIter<'a> = Box<dyn Iterator<Item = Result<Recording>> + 'a>;

/// A restartable sequence of recordings
///
/// Every call to `open` starts over from the first record, so a second pass
/// observes exactly the records the first pass did.
pub trait RecordingSource {
    fn open(&self) -> Result<RecordingIter<'_>>;
}

/// CSV file that is re-opened for every pass
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordingSource for CsvFileSource {
    fn open(&self) -> Result<RecordingIter<'_>> {
        log::debug!("Opening {:?}", self.path);
        let file = File::open(&self.path)?;
        Ok(Box::new(CsvRecordReader::new(BufReader::new(file))?))
    }
}

/// CSV held in memory
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    text: String,
}

impl CsvTextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RecordingSource for CsvTextSource {
    fn open(&self) -> Result<RecordingIter<'_>> {
        Ok(Box::new(CsvRecordReader::new(self.text.as_bytes())?))
    }
}

impl RecordingSource for [Recording] {
    fn open(&self) -> Result<RecordingIter<'_>> {
        Ok(Box::new(self.iter().cloned().map(Ok)))
    }
}

impl RecordingSource for Vec<Recording> {
    fn open(&self) -> Result<RecordingIter<'_>> {
        self.as_slice().open()
    }
}
