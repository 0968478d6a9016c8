// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] codecount_engine::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<codecount_engine::config::ConfigBuilderError> for AppError {
    fn from(e: codecount_engine::config::ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<codecount_engine::config::WalkOptionsBuilderError> for AppError {
    fn from(e: codecount_engine::config::WalkOptionsBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<codecount_engine::config::FilterConfigBuilderError> for AppError {
    fn from(e: codecount_engine::config::FilterConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
