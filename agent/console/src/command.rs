use clap::Parser;
use std::path::PathBuf;
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Command {
    /// The configuration file path of the console
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// The agent configuration file to start the agent with, json or toml
    #[arg(short, long)]
    pub agent_config: Option<PathBuf>,
    /// The log directory path of the console
    #[arg(short, long)]
    pub log_dir: Option<PathBuf>,
}
