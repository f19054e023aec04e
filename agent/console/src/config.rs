use crate::bootstrap::BootstrapConfig;
use accessory::Accessors;
use ppaass_common::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Serialize, Deserialize, Debug, Accessors)]
pub struct ConsoleConfig {
    #[access(get)]
    log_dir: PathBuf,
    #[access(get(ty=&str))]
    log_name_prefix: String,
    #[access(get(cp))]
    max_log_level: LogLevel,
    #[access(get)]
    #[serde(default)]
    bootstrap: BootstrapConfig,
}
