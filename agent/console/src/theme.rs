use crate::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named bundle of design tokens handed to the UI framework at startup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: String,
    pub tokens: BTreeMap<String, String>,
}

impl ThemePreset {
    pub const BUILTIN_NAMES: [&'static str; 3] = ["Aura", "Lara", "Nora"];

    /// Resolve one of the built-in presets, ignoring case.
    pub fn builtin(name: &str) -> Result<Self, ConsoleError> {
        let (name, primary, surface, radius) = match name.to_ascii_lowercase().as_str() {
            "aura" => ("Aura", "emerald", "zinc", "6px"),
            "lara" => ("Lara", "blue", "slate", "6px"),
            "nora" => ("Nora", "blue", "slate", "3px"),
            _ => return Err(ConsoleError::ThemeNotFound(name.to_owned())),
        };
        let tokens = [
            ("primary", primary),
            ("surface", surface),
            ("border.radius", radius),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();
        Ok(Self {
            name: name.to_owned(),
            tokens,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    pub preset: ThemePreset,
}

/// Options registered on the application root, shaped as `{theme: {preset}}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UiOptions {
    pub theme: ThemeOptions,
}

impl UiOptions {
    pub fn with_preset(preset: ThemePreset) -> Self {
        Self {
            theme: ThemeOptions { preset },
        }
    }
}

#[test]
fn resolve_builtin_presets() -> Result<(), ConsoleError> {
    for name in ThemePreset::BUILTIN_NAMES {
        let preset = ThemePreset::builtin(&name.to_uppercase())?;
        assert_eq!(preset.name, name);
        assert!(preset.tokens.contains_key("primary"));
    }
    assert!(matches!(
        ThemePreset::builtin("Material"),
        Err(ConsoleError::ThemeNotFound(name)) if name == "Material"
    ));
    Ok(())
}
