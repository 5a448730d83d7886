use anyhow::Error as AnyhowError;
use config::ConfigError;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

pub type AppResult<T, E = AppError> = anyhow::Result<T, E>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    IoError(#[from] IoError),
    #[error("{0}")]
    Json(#[from] SerdeJsonError),
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("{0}")]
    Anyhow(#[from] AnyhowError),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    Msg(String),
}

impl From<String> for AppError {
    #[inline]
    fn from(e: String) -> Self {
        AppError::Msg(e)
    }
}

impl From<&str> for AppError {
    #[inline]
    fn from(e: &str) -> Self {
        AppError::Msg(e.to_string())
    }
}
