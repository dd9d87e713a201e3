/// Application error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] canto_storage::StoreError),
}

impl From<AppError> for canto_core::CantoError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Config(e) => canto_core::CantoError::invalid_input(e.to_string()),
            AppError::Store(e) => e.into(),
        }
    }
}
