use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurvError {
    #[error("unknown disease: {0}")]
    UnknownDisease(String),
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("unknown case status: {0}")]
    UnknownStatus(String),
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
}

pub type Result<T> = std::result::Result<T, SurvError>;
