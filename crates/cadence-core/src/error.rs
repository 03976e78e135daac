use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
