use thiserror::Error;
use uuid::Uuid;

/// Failures raised by a `DataProvider` while fetching member-scoped data
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Member not found: {0}")]
    MemberNotFound(Uuid),
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
    #[error("Snapshot could not be read: {0}")]
    SnapshotIo(#[from] std::io::Error),
    #[error("Snapshot is malformed: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}

/// Why a body measurement could not be used for classification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("{field} is not recorded")]
    Missing { field: &'static str },
    #[error("{field} of {value} is outside the supported range {min}-{max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Invalid dashboard configuration values
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Lookback window must cover at least one day")]
    EmptyLookbackWindow,
    #[error("Lookback window of {days} days exceeds the {max} day maximum")]
    LookbackWindowTooLong { days: u32, max: u32 },
    #[error("At least one trainer must be recommended")]
    NoRecommendedTrainers,
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
