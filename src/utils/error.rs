use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
