//! Error types for meshview-portmaps

use thiserror::Error;

use crate::port::PortCode;

#[derive(Error, Debug)]
pub enum PortmapError {
    #[error("Port not found: {0}")]
    PortNotFound(PortCode),

    #[error("Unknown PortNum: {0}")]
    UnknownPortNum(PortCode),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    RegexError(String),
}

impl From<regex::Error> for PortmapError {
    fn from(err: regex::Error) -> Self {
        PortmapError::RegexError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortmapError>;
