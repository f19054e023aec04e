use crate::error::ConsoleError;
use crate::theme::UiOptions;
use crate::widget::WidgetDefinition;

/// The top level component the application root is created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootComponent {
    pub name: String,
}

impl Default for RootComponent {
    fn default() -> Self {
        Self {
            name: "App".to_owned(),
        }
    }
}

/// Factory of application roots provided by the UI framework.
pub trait UiFramework {
    type Root: ApplicationRoot;

    fn create_app(&self, root_component: &RootComponent) -> Result<Self::Root, ConsoleError>;
}

pub trait ApplicationRoot {
    fn use_theme(&mut self, options: &UiOptions) -> Result<(), ConsoleError>;

    fn register_widget(
        &mut self,
        name: &str,
        widget: &WidgetDefinition,
    ) -> Result<(), ConsoleError>;

    /// Attach the root to `anchor`. Only one mount is allowed per root.
    fn mount(&mut self, anchor: &str) -> Result<(), ConsoleError>;
}

/// The document the application root is displayed in.
pub trait Document {
    fn contains_anchor(&self, anchor: &str) -> bool;
}
