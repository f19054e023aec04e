use crate::error::{CommonError, ConfigurationError};
use crate::level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs::{read_to_string, write};
use std::path::Path;
use tracing::debug;

pub trait RetrieveConnectionPoolConfig {
    fn max_pool_size(&self) -> usize;
    fn fill_interval(&self) -> u64;
    fn check_interval(&self) -> u64;
}

pub trait RetrieveServerConfig {
    fn worker_thread_number(&self) -> usize;
    fn server_port(&self) -> u16;
}

/// How the agent manages its pool of reusable proxy connections.
///
/// Intervals are in seconds. A `max_pool_size` of zero disables pooling.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConnectionPoolConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pool_size: Option<usize>,
}

impl ConnectionPoolConfiguration {
    pub fn new(check_interval: u64, fill_interval: u64, max_pool_size: usize) -> Self {
        Self {
            check_interval: Some(check_interval),
            fill_interval: Some(fill_interval),
            max_pool_size: Some(max_pool_size),
        }
    }

    pub fn is_pooling_disabled(&self) -> bool {
        self.max_pool_size == Some(0)
    }
}

/// Desired runtime settings of the agent.
///
/// This is a snapshot of what the console wants the agent to run with, not the
/// observed agent state. Unset optional parts are left to the agent defaults and
/// are omitted from the serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Configuration {
    pub agent_server_port: u16,
    pub worker_thread_number: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_log_level: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_pool_configuration: Option<ConnectionPoolConfiguration>,
}

impl Configuration {
    /// Plain constructor, no range check. Use [`Configuration::try_new`] at input boundaries.
    pub fn new(agent_server_port: u16, worker_thread_number: usize) -> Self {
        Self {
            agent_server_port,
            worker_thread_number,
            max_log_level: None,
            connection_pool_configuration: None,
        }
    }

    pub fn try_new(
        agent_server_port: u16,
        worker_thread_number: usize,
    ) -> Result<Self, ConfigurationError> {
        let configuration = Self::new(agent_server_port, worker_thread_number);
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn with_max_log_level(mut self, max_log_level: LogLevel) -> Self {
        self.max_log_level = Some(max_log_level);
        self
    }

    pub fn with_connection_pool_configuration(
        mut self,
        connection_pool_configuration: ConnectionPoolConfiguration,
    ) -> Self {
        self.connection_pool_configuration = Some(connection_pool_configuration);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.agent_server_port == 0 {
            return Err(ConfigurationError::InvalidAgentServerPort(
                self.agent_server_port,
            ));
        }
        if self.worker_thread_number == 0 {
            return Err(ConfigurationError::InvalidWorkerThreadNumber(
                self.worker_thread_number,
            ));
        }
        Ok(())
    }

    /// Decode the settings api payload, rejecting out of range values.
    pub fn from_json_str(content: &str) -> Result<Self, CommonError> {
        let configuration = serde_json::from_str::<Self>(content)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn to_json_string(&self) -> Result<String, CommonError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CommonError> {
        let configuration = toml::from_str::<Self>(content)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn to_toml_string(&self) -> Result<String, CommonError> {
        Ok(toml::to_string(self)?)
    }

    /// Load from a `.json` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self, CommonError> {
        let format = ConfigurationFormat::from_path(path)?;
        let content = read_to_string(path)?;
        debug!("Load agent configuration from: {path:?}");
        match format {
            ConfigurationFormat::Json => Self::from_json_str(&content),
            ConfigurationFormat::Toml => Self::from_toml_str(&content),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), CommonError> {
        let format = ConfigurationFormat::from_path(path)?;
        self.validate()?;
        let content = match format {
            ConfigurationFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigurationFormat::Toml => self.to_toml_string()?,
        };
        write(path, content)?;
        debug!("Save agent configuration to: {path:?}");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigurationFormat {
    Json,
    Toml,
}

impl ConfigurationFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        match path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(ConfigurationFormat::Json),
            Some("toml") => Ok(ConfigurationFormat::Toml),
            _ => Err(ConfigurationError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl RetrieveConnectionPoolConfig for Configuration {
    fn max_pool_size(&self) -> usize {
        match self.connection_pool_configuration {
            Some(ref pool) => pool.max_pool_size.unwrap_or(0),
            None => 0,
        }
    }
    fn fill_interval(&self) -> u64 {
        match self.connection_pool_configuration {
            Some(ref pool) => pool.fill_interval.unwrap_or(0),
            None => 0,
        }
    }
    fn check_interval(&self) -> u64 {
        match self.connection_pool_configuration {
            Some(ref pool) => pool.check_interval.unwrap_or(0),
            None => 0,
        }
    }
}

impl RetrieveServerConfig for Configuration {
    fn worker_thread_number(&self) -> usize {
        self.worker_thread_number
    }
    fn server_port(&self) -> u16 {
        self.agent_server_port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn valid_port_and_threads_read_back_unchanged() -> Result<(), ConfigurationError> {
        for (port, threads) in [(1u16, 1usize), (8080, 4), (65535, 256)] {
            let configuration = Configuration::try_new(port, threads)?;
            assert_eq!(configuration.agent_server_port, port);
            assert_eq!(configuration.worker_thread_number, threads);
            assert_eq!(configuration.max_log_level, None);
            assert_eq!(configuration.connection_pool_configuration, None);
        }
        Ok(())
    }

    #[test]
    fn invalid_port_and_threads_are_rejected() {
        assert_eq!(
            Configuration::try_new(0, 4),
            Err(ConfigurationError::InvalidAgentServerPort(0))
        );
        assert_eq!(
            Configuration::try_new(8080, 0),
            Err(ConfigurationError::InvalidWorkerThreadNumber(0))
        );
    }

    #[test]
    fn unset_optional_fields_are_omitted() -> Result<(), CommonError> {
        let json = Configuration::new(8080, 4).to_json_string()?;
        let value: Value = serde_json::from_str(&json)?;
        assert_eq!(
            value,
            json!({"agentServerPort": 8080, "workerThreadNumber": 4})
        );
        Ok(())
    }

    #[test]
    fn nested_pool_serialized_verbatim() -> Result<(), CommonError> {
        let mut configuration = Configuration::new(8080, 4);
        configuration.connection_pool_configuration =
            Some(ConnectionPoolConfiguration::new(30, 10, 100));
        let value: Value = serde_json::from_str(&configuration.to_json_string()?)?;
        assert_eq!(
            value["connectionPoolConfiguration"],
            json!({"checkInterval": 30, "fillInterval": 10, "maxPoolSize": 100})
        );
        Ok(())
    }

    #[test]
    fn json_round_trip_keeps_unset_fields_unset() -> Result<(), CommonError> {
        let partial_pool = ConnectionPoolConfiguration {
            check_interval: None,
            fill_interval: Some(0),
            max_pool_size: None,
        };
        let samples = [
            Configuration::new(8080, 4),
            Configuration::new(1, 1).with_max_log_level(LogLevel::Trace),
            Configuration::new(65535, 16)
                .with_max_log_level(LogLevel::Off)
                .with_connection_pool_configuration(ConnectionPoolConfiguration::new(0, 0, 0)),
            Configuration::new(10080, 2).with_connection_pool_configuration(partial_pool),
        ];
        for configuration in samples {
            let decoded = Configuration::from_json_str(&configuration.to_json_string()?)?;
            assert_eq!(decoded, configuration);
        }
        Ok(())
    }

    #[test]
    fn null_and_missing_optional_fields_are_equivalent() -> Result<(), CommonError> {
        let with_nulls = Configuration::from_json_str(
            r#"{"agentServerPort":8080,"workerThreadNumber":4,"maxLogLevel":null,"connectionPoolConfiguration":null}"#,
        )?;
        let without = Configuration::from_json_str(r#"{"agentServerPort":8080,"workerThreadNumber":4}"#)?;
        assert_eq!(with_nulls, without);
        assert_eq!(without, Configuration::new(8080, 4));
        Ok(())
    }

    #[test]
    fn partial_pool_payload_keeps_absent_members_unset() -> Result<(), CommonError> {
        let configuration = Configuration::from_json_str(
            r#"{"agentServerPort":8080,"workerThreadNumber":4,"connectionPoolConfiguration":{"maxPoolSize":0}}"#,
        )?;
        let pool = configuration
            .connection_pool_configuration
            .as_ref()
            .expect("pool configuration present");
        assert_eq!(pool.check_interval, None);
        assert_eq!(pool.fill_interval, None);
        assert!(pool.is_pooling_disabled());
        Ok(())
    }

    #[test]
    fn decoding_rejects_invalid_payloads() {
        let invalid_port = Configuration::from_json_str(r#"{"agentServerPort":0,"workerThreadNumber":4}"#);
        assert!(matches!(
            invalid_port,
            Err(CommonError::Configuration(ConfigurationError::InvalidAgentServerPort(0)))
        ));
        let port_overflow =
            Configuration::from_json_str(r#"{"agentServerPort":70000,"workerThreadNumber":4}"#);
        assert!(matches!(port_overflow, Err(CommonError::Json(_))));
        let missing_threads = Configuration::from_json_str(r#"{"agentServerPort":8080}"#);
        assert!(matches!(missing_threads, Err(CommonError::Json(_))));
        let unknown_field = Configuration::from_json_str(
            r#"{"agentServerPort":8080,"workerThreadNumber":4,"ipV6":true}"#,
        );
        assert!(matches!(unknown_field, Err(CommonError::Json(_))));
        let negative_pool = Configuration::from_json_str(
            r#"{"agentServerPort":8080,"workerThreadNumber":4,"connectionPoolConfiguration":{"maxPoolSize":-1}}"#,
        );
        assert!(matches!(negative_pool, Err(CommonError::Json(_))));
    }

    #[test]
    fn toml_round_trip() -> Result<(), CommonError> {
        let configuration = Configuration::new(10080, 8)
            .with_max_log_level(LogLevel::Info)
            .with_connection_pool_configuration(ConnectionPoolConfiguration::new(30, 10, 100));
        let content = configuration.to_toml_string()?;
        assert!(content.contains("agentServerPort = 10080"));
        assert!(content.contains("maxLogLevel = \"INFO\""));
        assert_eq!(Configuration::from_toml_str(&content)?, configuration);
        Ok(())
    }

    #[test]
    fn unset_pool_resolves_to_disabled_pooling() {
        let configuration = Configuration::new(8080, 4);
        assert_eq!(configuration.max_pool_size(), 0);
        assert_eq!(configuration.fill_interval(), 0);
        assert_eq!(configuration.check_interval(), 0);
        assert_eq!(configuration.server_port(), 8080);
        assert_eq!(configuration.worker_thread_number(), 4);
        let pooled = configuration
            .with_connection_pool_configuration(ConnectionPoolConfiguration::new(30, 10, 100));
        assert_eq!(pooled.max_pool_size(), 100);
        assert_eq!(pooled.fill_interval(), 10);
        assert_eq!(pooled.check_interval(), 30);
    }

    #[test]
    fn load_and_save_by_extension() -> Result<(), CommonError> {
        let dir = tempfile::tempdir()?;
        let configuration = Configuration::new(8080, 4).with_max_log_level(LogLevel::Debug);
        for file_name in ["agent.json", "agent.toml"] {
            let path = dir.path().join(file_name);
            configuration.save(&path)?;
            assert_eq!(Configuration::load(&path)?, configuration);
        }
        let yaml = dir.path().join("agent.yaml");
        assert!(matches!(
            configuration.save(&yaml),
            Err(CommonError::Configuration(ConfigurationError::UnsupportedFormat(_)))
        ));
        Ok(())
    }

    #[test]
    fn save_rejects_invalid_configuration() -> Result<(), CommonError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("agent.json");
        let result = Configuration::new(8080, 0).save(&path);
        assert!(matches!(
            result,
            Err(CommonError::Configuration(ConfigurationError::InvalidWorkerThreadNumber(0)))
        ));
        assert!(!path.exists());
        Ok(())
    }
}
