use crate::error::ConsoleError;
use crate::framework::{ApplicationRoot, Document, RootComponent, UiFramework};
use crate::theme::{ThemePreset, UiOptions};
use crate::widget::WidgetDefinition;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

pub const DEFAULT_MOUNT_ANCHOR: &str = "#app";
pub const DEFAULT_THEME_PRESET: &str = "Aura";

fn default_anchor() -> String {
    DEFAULT_MOUNT_ANCHOR.to_owned()
}

fn default_theme_preset() -> String {
    DEFAULT_THEME_PRESET.to_owned()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    #[serde(default = "default_anchor")]
    pub anchor: String,
    #[serde(default = "default_theme_preset")]
    pub theme_preset: String,
    /// Widgets registered on the root before mounting, in order.
    #[serde(default)]
    pub widgets: Vec<WidgetDefinition>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            theme_preset: default_theme_preset(),
            widgets: Vec::new(),
        }
    }
}

/// Create the application root, apply the theme, register the configured
/// widgets and mount the root. Runs once at startup; any failure is fatal
/// and the root is handed back to the caller on success.
pub fn bootstrap<F, D>(
    framework: &F,
    document: &D,
    config: &BootstrapConfig,
) -> Result<F::Root, ConsoleError>
where
    F: UiFramework,
    D: Document + ?Sized,
{
    let mut root = framework.create_app(&RootComponent::default())?;
    let preset = ThemePreset::builtin(&config.theme_preset).inspect_err(|e| {
        error!("Fail to load theme for console: {e}");
    })?;
    debug!("Apply theme preset: {}", preset.name);
    root.use_theme(&UiOptions::with_preset(preset))?;
    for widget in config.widgets.iter() {
        debug!("Register widget [{}] from: {}", widget.name, widget.component);
        root.register_widget(&widget.name, widget)?;
    }
    if !document.contains_anchor(&config.anchor) {
        error!("Fail to mount console, anchor not found: {}", config.anchor);
        return Err(ConsoleError::MountAnchorMissing(config.anchor.clone()));
    }
    root.mount(&config.anchor)?;
    info!("Console mounted on: {}", config.anchor);
    Ok(root)
}
