// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

/// Failures of the single GET against the case-count API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to case-count API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("case-count API returned malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("case-count API response is not a JSON array")]
    NotAnArray,
    #[error("record {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index} has an invalid value for field '{field}'")]
    InvalidField { index: usize, field: &'static str },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unparseable date '{value}': {source}")]
    Date {
        value: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("no label supplied for series {index}")]
    MissingLabel { index: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chart service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to serialize chart config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}
