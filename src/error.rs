use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpendError {
    #[error("Unsupported reporting period: only monthly, quarterly and yearly are handled")]
    UnsupportedPeriod,

    #[error("Subscription '{subscription}' has unsupported billing cycle {cycle}")]
    UnsupportedCycle { subscription: String, cycle: String },

    #[error("Invalid billing cycle '{0}': expected weekly, monthly, quarterly or yearly")]
    InvalidBillingCycle(String),

    #[error("Invalid chart geometry: {0}")]
    InvalidChartGeometry(String),

    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),

    #[error("Date calculation error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpendError>;
