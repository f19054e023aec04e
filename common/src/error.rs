use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised at the boundary that builds a [`crate::config::Configuration`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid agent server port: {_0}, must be in 1..=65535")]
    InvalidAgentServerPort(u16),
    #[error("Invalid worker thread number: {_0}, must be at least 1")]
    InvalidWorkerThreadNumber(usize),
    #[error("Unknown log level: {_0}")]
    UnknownLogLevel(String),
    #[error("Unsupported configuration file format: {_0:?}")]
    UnsupportedFormat(PathBuf),
}

#[derive(Error, Debug)]
pub enum CommonError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("Logger error: {_0}")]
    Logger(String),
}
