//! Centralized controller options with TOML preset support.
//!
//! Every tweakable policy constant (input scaling, scroll direction,
//! kinetic-scroll tuning, fly-through defaults, keybindings) is
//! consolidated here. Options serialize to/from TOML presets.

mod controller;
mod keybindings;
mod kinetic;

use std::path::Path;

pub use controller::{ControllerOptions, ScrollDirection};
pub use keybindings::KeybindingOptions;
pub use kinetic::KineticOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;
use crate::fly::FlyParameters;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[kinetic]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Input scaling and scroll direction.
    pub controller: ControllerOptions,
    /// Kinetic scrolling tuning.
    pub kinetic: KineticOptions,
    /// Default fly-through parameters.
    pub fly: FlyParameters,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file cannot be read, or
    /// [`VantageError::OptionsParse`] if the TOML is invalid.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file cannot be written, or
    /// [`VantageError::OptionsParse`] if the TOML is not representable.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)?;
        log::info!("Saved options to {}", path.display());
        Ok(())
    }

    /// Copy of these options with `section.field` set to `value`, the way a
    /// schema-driven settings panel addresses a single control.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::OptionsParse`] if the section or field does
    /// not exist or `value` does not fit the field.
    pub fn with_field(
        &self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<Self, VantageError> {
        let parse_err = |e: serde_json::Error| {
            VantageError::OptionsParse(format!("{section}.{field}: {e}"))
        };
        let mut root = serde_json::to_value(self).map_err(parse_err)?;
        let Some(target) = root
            .get_mut(section)
            .and_then(serde_json::Value::as_object_mut)
            .filter(|s| s.contains_key(field))
        else {
            return Err(VantageError::OptionsParse(format!(
                "unknown option {section}.{field}"
            )));
        };
        let _ = target.insert(field.to_owned(), value);

        let mut options: Self = serde_json::from_value(root).map_err(parse_err)?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
