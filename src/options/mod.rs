//! Centralized scene and interaction options with TOML preset support.
//!
//! Thresholds, placemark styling, layer toggles, canvas placement, input
//! routing and placemark sites are consolidated here. Options serialize
//! to/from TOML so a scene can be described in a preset file.

mod canvas;
mod layers;
mod placemarks;
mod selection;

use std::path::Path;

pub use canvas::CanvasOptions;
pub use layers::LayerOptions;
pub use placemarks::{default_sites, PlacemarkOptions, SiteOptions};
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::PickmarkError;
use crate::input::InputRouter;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[selection]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Highlight thresholds and panel text.
    pub selection: SelectionOptions,
    /// Pushpin images and common placemark style.
    pub placemarks: PlacemarkOptions,
    /// Initial layer toggles.
    pub layers: LayerOptions,
    /// Canvas placement and size.
    pub canvas: CanvasOptions,
    /// Which streams each input kind feeds.
    #[schemars(skip)]
    pub input: InputRouter,
    /// Placemark sites, one layer each.
    #[schemars(skip)]
    pub sites: Vec<SiteOptions>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            selection: SelectionOptions::default(),
            placemarks: PlacemarkOptions::default(),
            layers: LayerOptions::default(),
            canvas: CanvasOptions::default(),
            input: InputRouter::default(),
            sites: default_sites(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PickmarkError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, PickmarkError> {
        toml::from_str(content)
            .map_err(|e| PickmarkError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PickmarkError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PickmarkError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(PickmarkError::Io)
    }

    /// Load the preset `name` from `dir`, i.e. `dir/name.toml`. Fails with
    /// [`PickmarkError::UnknownPreset`] if no such preset is listed.
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, PickmarkError> {
        let available = Self::list_presets(dir);
        if !available.iter().any(|preset| preset == name) {
            return Err(PickmarkError::UnknownPreset {
                name: name.to_owned(),
                available,
            });
        }
        log::info!("loading preset '{name}' from {}", dir.display());
        Self::load(&dir.join(format!("{name}.toml")))
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
