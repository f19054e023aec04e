mod bootstrap;
mod command;
mod config;
mod control;
mod error;
mod framework;
mod headless;
mod theme;
mod widget;

pub use bootstrap::{BootstrapConfig, DEFAULT_MOUNT_ANCHOR, DEFAULT_THEME_PRESET, bootstrap};
pub use command::Command;
pub use config::ConsoleConfig;
pub use control::AgentControl;
pub use error::ConsoleError;
pub use framework::{ApplicationRoot, Document, RootComponent, UiFramework};
pub use headless::{HeadlessDocument, HeadlessFramework, HeadlessRoot};
pub use theme::{ThemeOptions, ThemePreset, UiOptions};
pub use widget::WidgetDefinition;
