use std::io::Read;

use chrono::{DateTime, FixedOffset};
use csv::{StringRecord, StringRecordsIntoIter};

use crate::error::{IotStatError, Result};
use crate::recording::{Metric, Recording, Unit};

const COLUMNS: [&str; 6] = ["time", "site", "device", "metric", "unit", "value"];

/// Positions of the required columns within a CSV header
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    time: usize,
    site: usize,
    device: usize,
    metric: usize,
    unit: usize,
    value: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| IotStatError::InvalidRecord {
                    row: 1,
                    reason: format!("missing column '{}' (expected {})", name, COLUMNS.join(",")),
                })
        };

        Ok(Self {
            time: find("time")?,
            site: find("site")?,
            device: find("device")?,
            metric: find("metric")?,
            unit: find("unit")?,
            value: find("value")?,
        })
    }
}

/// Lazily yields `Recording`s from CSV with a `time,site,device,metric,unit,value` header
///
/// Rows are parsed one at a time; the first malformed row yields an error.
pub struct CsvRecordReader<R: Read> {
    rows: Option<StringRecordsIntoIter<R>>,
    columns: Option<ColumnIndex>,
}

impl<R: Read> CsvRecordReader<R> {
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            log::debug!("CSV input has no header, treating as empty");
            return Ok(Self {
                rows: None,
                columns: None,
            });
        }

        let columns = ColumnIndex::from_headers(&headers)?;
        Ok(Self {
            rows: Some(reader.into_records()),
            columns: Some(columns),
        })
    }
}

impl<R: Read> Iterator for CsvRecordReader<R> {
    type Item = Result<Recording>;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns?;
        let row = self.rows.as_mut()?.next()?;
        Some(row.map_err(IotStatError::from).and_then(|r| parse_row(&r, &columns)))
    }
}

fn parse_row(row: &StringRecord, columns: &ColumnIndex) -> Result<Recording> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let invalid = |reason: String| IotStatError::InvalidRecord { row: line, reason };
    let field = |index: usize, name: &str| {
        row.get(index)
            .ok_or_else(|| invalid(format!("missing field '{}'", name)))
    };

    let time = parse_timestamp(field(columns.time, "time")?).map_err(|e| invalid(e.to_string()))?;
    let metric: Metric = field(columns.metric, "metric")?
        .parse()
        .map_err(|e: IotStatError| invalid(e.to_string()))?;
    let unit: Unit = field(columns.unit, "unit")?
        .parse()
        .map_err(|e: IotStatError| invalid(e.to_string()))?;
    let raw_value = field(columns.value, "value")?;
    let value: f64 = raw_value
        .parse()
        .map_err(|_| invalid(format!("invalid value '{}'", raw_value)))?;

    Ok(Recording {
        time,
        site: field(columns.site, "site")?.to_string(),
        device: field(columns.device, "device")?.to_string(),
        metric,
        unit,
        value,
    })
}

/// Parse `YYYY-MM-DD HH:MM:SS +ZZZZ [ZONE]`
///
/// The trailing zone abbreviation is informational; the numeric offset wins.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    let without_zone = match trimmed.rsplit_once(' ') {
        Some((head, zone)) if !zone.is_empty() && zone.chars().all(|c| c.is_ascii_alphabetic()) => {
            head
        }
        _ => trimmed,
    };

    DateTime::parse_from_str(without_zone, "%Y-%m-%d %H:%M:%S %z")
        .map_err(|_| IotStatError::InvalidTimestamp(raw.to_string()))
}
