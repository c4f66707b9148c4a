use thiserror::Error;

#[derive(Debug, Error)]
pub enum IotStatError {
    #[error("Statistic specification cannot be empty")]
    EmptySpec,

    #[error("Unknown statistic: '{0}' (expected one of: average, min, max, count, population_stddev)")]
    UnknownStatistic(String),

    #[error("Unsupported sort key: '{0}' (expected one of: value_asc, value_desc, device_site_metric)")]
    UnsupportedSortKey(String),

    #[error("Invalid k '{0}': expected a non-negative integer, 'all' or 'none'")]
    InvalidLimit(String),

    #[error("Unknown statistic option: '{0}' (expected one of: sort, k, name)")]
    UnknownOption(String),

    #[error("Malformed statistic option '{0}': expected key=value")]
    MalformedOption(String),

    #[error(
        "Inconsistent units in {statistic} for {device}/{site} {metric}: expected {expected}, found {found}"
    )]
    InconsistentUnit {
        statistic: String,
        site: String,
        device: String,
        metric: String,
        expected: String,
        found: String,
    },

    #[error("Unknown metric: '{0}'")]
    UnknownMetric(String),

    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("Invalid timestamp '{0}': expected YYYY-MM-DD HH:MM:SS +ZZZZ [ZONE]")]
    InvalidTimestamp(String),

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = IotStatError> = std::result::Result<T, E>;
