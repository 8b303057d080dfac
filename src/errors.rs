use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemporalMetricError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid range: 'from' ({from}) must be less than 'to' ({to})")]
    InvalidRange { from: i64, to: i64 },
    #[error("vertex not found: {0}")]
    NotFound(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("import error: {0}")]
    Import(String),
    #[error("export error: {0}")]
    Export(String),
}

impl TemporalMetricError {
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        TemporalMetricError::InvalidArgument(msg.into())
    }

    pub fn invalid_range(from: i64, to: i64) -> Self {
        TemporalMetricError::InvalidRange { from, to }
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TemporalMetricError::NotFound(msg.into())
    }

    pub fn unsupported<T: Into<String>>(msg: T) -> Self {
        TemporalMetricError::Unsupported(msg.into())
    }

    pub fn import<T: Into<String>>(msg: T) -> Self {
        TemporalMetricError::Import(msg.into())
    }

    pub fn export<T: Into<String>>(msg: T) -> Self {
        TemporalMetricError::Export(msg.into())
    }
}
