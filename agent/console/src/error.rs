use ppaass_common::error::{CommonError, ConfigurationError};
use thiserror::Error;
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error(transparent)]
    Common(#[from] CommonError),
    #[error("Mount anchor not found in document: {_0}")]
    MountAnchorMissing(String),
    #[error("Theme preset not found: {_0}")]
    ThemeNotFound(String),
    #[error("Widget already registered: {_0}")]
    DuplicateWidget(String),
    #[error("Application already mounted on: {_0}")]
    AlreadyMounted(String),
    #[error("Agent already running on port: {_0}")]
    AgentAlreadyRunning(u16),
}

impl From<ConfigurationError> for ConsoleError {
    fn from(value: ConfigurationError) -> Self {
        ConsoleError::Common(CommonError::Configuration(value))
    }
}
