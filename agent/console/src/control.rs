use crate::error::ConsoleError;
use ppaass_common::config::{Configuration, RetrieveConnectionPoolConfig};
use tracing::{debug, info};

/// Holds the configuration the console asked the agent to run with.
///
/// Only the desired state is tracked here, starting the agent process is
/// done by whoever consumes [`AgentControl::running_configuration`].
#[derive(Debug, Default)]
pub struct AgentControl {
    running: Option<Configuration>,
}

impl AgentControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_agent(&mut self, configuration: Configuration) -> Result<(), ConsoleError> {
        if let Some(running) = &self.running {
            return Err(ConsoleError::AgentAlreadyRunning(running.agent_server_port));
        }
        configuration.validate()?;
        debug!("Receive configuration: {configuration:?}");
        if configuration.max_pool_size() == 0 {
            debug!("Connection pool disabled for agent");
        }
        info!(
            "Start agent on port {} with {} worker threads",
            configuration.agent_server_port, configuration.worker_thread_number
        );
        self.running = Some(configuration);
        Ok(())
    }

    pub fn stop_agent(&mut self) -> Option<Configuration> {
        let stopped = self.running.take();
        if let Some(configuration) = &stopped {
            info!("Stop agent on port {}", configuration.agent_server_port);
        }
        stopped
    }

    pub fn running_configuration(&self) -> Option<&Configuration> {
        self.running.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppaass_common::error::{CommonError, ConfigurationError};

    #[test]
    fn start_then_stop() -> Result<(), ConsoleError> {
        let mut control = AgentControl::new();
        control.start_agent(Configuration::new(8080, 4))?;
        assert_eq!(
            control.running_configuration(),
            Some(&Configuration::new(8080, 4))
        );
        assert!(matches!(
            control.start_agent(Configuration::new(9090, 2)),
            Err(ConsoleError::AgentAlreadyRunning(8080))
        ));
        assert_eq!(control.stop_agent(), Some(Configuration::new(8080, 4)));
        assert_eq!(control.stop_agent(), None);
        assert!(control.running_configuration().is_none());
        Ok(())
    }

    #[test]
    fn invalid_configuration_is_not_started() {
        let mut control = AgentControl::new();
        let result = control.start_agent(Configuration::new(0, 4));
        assert!(matches!(
            result,
            Err(ConsoleError::Common(CommonError::Configuration(
                ConfigurationError::InvalidAgentServerPort(0)
            )))
        ));
        assert!(control.running_configuration().is_none());
    }
}
