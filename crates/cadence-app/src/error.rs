use thiserror::Error;

/// Application-level errors (CLI layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RecurError(#[from] cadence_recur::error::RecurError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
