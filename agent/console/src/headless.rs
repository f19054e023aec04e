//! A UI framework that renders nothing and records what the bootstrap asked for.
//! The launcher runs it when no real display is attached.
use crate::error::ConsoleError;
use crate::framework::{ApplicationRoot, Document, RootComponent, UiFramework};
use crate::theme::UiOptions;
use crate::widget::WidgetDefinition;
use accessory::Accessors;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessFramework;

impl UiFramework for HeadlessFramework {
    type Root = HeadlessRoot;

    fn create_app(&self, root_component: &RootComponent) -> Result<HeadlessRoot, ConsoleError> {
        debug!("Create headless application root: {}", root_component.name);
        Ok(HeadlessRoot {
            root_component: root_component.name.clone(),
            options: None,
            widgets: Vec::new(),
            mounted_on: None,
            mount_calls: 0,
        })
    }
}

#[derive(Debug, Accessors)]
pub struct HeadlessRoot {
    #[access(get(ty=&str))]
    root_component: String,
    #[access(get)]
    options: Option<UiOptions>,
    #[access(get)]
    widgets: Vec<WidgetDefinition>,
    #[access(get)]
    mounted_on: Option<String>,
    #[access(get(cp))]
    mount_calls: usize,
}

impl ApplicationRoot for HeadlessRoot {
    fn use_theme(&mut self, options: &UiOptions) -> Result<(), ConsoleError> {
        self.options = Some(options.clone());
        Ok(())
    }

    fn register_widget(
        &mut self,
        name: &str,
        widget: &WidgetDefinition,
    ) -> Result<(), ConsoleError> {
        if self.widgets.iter().any(|registered| registered.name == name) {
            return Err(ConsoleError::DuplicateWidget(name.to_owned()));
        }
        self.widgets.push(WidgetDefinition::new(name, widget.component.clone()));
        Ok(())
    }

    fn mount(&mut self, anchor: &str) -> Result<(), ConsoleError> {
        self.mount_calls += 1;
        if let Some(mounted_on) = &self.mounted_on {
            return Err(ConsoleError::AlreadyMounted(mounted_on.clone()));
        }
        self.mounted_on = Some(anchor.to_owned());
        Ok(())
    }
}

/// A document made only of the anchors it was created with.
#[derive(Debug, Default, Clone)]
pub struct HeadlessDocument {
    anchors: HashSet<String>,
}

impl HeadlessDocument {
    pub fn new<I, T>(anchors: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            anchors: anchors.into_iter().map(Into::into).collect(),
        }
    }
}

impl Document for HeadlessDocument {
    fn contains_anchor(&self, anchor: &str) -> bool {
        self.anchors.contains(anchor)
    }
}
