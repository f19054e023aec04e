use clap::Parser;
use ppaass_agent_console::{
    AgentControl, Command, ConsoleConfig, HeadlessDocument, HeadlessFramework, bootstrap,
};
use ppaass_common::config::Configuration;
use ppaass_common::init_logger;
use std::error::Error as StdError;
use std::fs::read_to_string;
use std::path::PathBuf;
use tracing::{error, info};
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "resources/console.toml";

fn main() -> Result<(), Box<dyn StdError>> {
    let command = Command::parse();
    let config_file_path = command
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config_file_content = read_to_string(config_file_path)?;
    let config = toml::from_str::<ConsoleConfig>(&config_file_content)?;
    let log_dir = command.log_dir.unwrap_or(config.log_dir().clone());
    let _log_guard = init_logger(&log_dir, config.log_name_prefix(), config.max_log_level())?;
    let document = HeadlessDocument::new([config.bootstrap().anchor.as_str()]);
    let root = match bootstrap(&HeadlessFramework, &document, config.bootstrap()) {
        Ok(root) => root,
        Err(e) => {
            error!("Fail to start agent console: {e:?}");
            return Err(e.into());
        }
    };
    info!(
        "Agent console started with {} widgets",
        root.widgets().len()
    );
    let Some(agent_config_path) = command.agent_config else {
        return Ok(());
    };
    let configuration = Configuration::load(&agent_config_path)?;
    let mut agent_control = AgentControl::new();
    if let Err(e) = agent_control.start_agent(configuration) {
        error!("Fail to start agent: {e:?}");
        return Err(e.into());
    }
    Ok(())
}
