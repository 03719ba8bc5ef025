use thiserror::Error;

/// Why a hunter's finding was refused by the collector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{record} record is missing required field `{field}`")]
    MissingField { record: &'static str, field: &'static str },
    #[error("service on {host} has invalid port 0")]
    InvalidPort { host: String },
}
