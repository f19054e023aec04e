use serde::{Deserialize, Serialize};

/// A reusable widget registered on the application root under `name`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetDefinition {
    pub name: String,
    /// Where the UI framework loads the widget from, e.g. `primevue/button`.
    pub component: String,
}

impl WidgetDefinition {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: component.into(),
        }
    }
}
