use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Data load error: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, AssistantError>;
