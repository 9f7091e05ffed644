//! Cell highlight settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::color::{parse_color, parse_color_or_default};
use crate::error::SettingsError;

/// Name of the settings section, as it appears in settings files
pub const SETTINGS_SECTION: &str = "cellHighlighter";

/// Check whether a changed configuration section concerns cell highlighting
///
/// Matches the section itself and any of its keys (`cellHighlighter.backgroundColor`).
pub fn affects_configuration(section: &str) -> bool {
    match section.strip_prefix(SETTINGS_SECTION) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

/// Cell highlight settings
#[derive(Clone, Debug, PartialEq, Resource, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellHighlightSettings {
    /// Background color of the highlighted cell, as a CSS-style color string
    pub background_color: String,
}

impl Default for CellHighlightSettings {
    fn default() -> Self {
        Self {
            background_color: "rgba(100, 149, 237, 0.15)".to_string(),
        }
    }
}

impl CellHighlightSettings {
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Load settings from JSON
    ///
    /// Accepts the bare section (`{"backgroundColor": ..}`), a settings document
    /// with a nested section (`{"cellHighlighter": {..}}`), or a flat document
    /// with dotted keys (`{"cellHighlighter.backgroundColor": ..}`). Missing
    /// keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(json)?;

        if let Some(section) = value.get(SETTINGS_SECTION) {
            return Ok(serde_json::from_value(section.clone())?);
        }

        if let Value::Object(map) = &value {
            let prefix = format!("{}.", SETTINGS_SECTION);
            let dotted: Map<String, Value> = map
                .iter()
                .filter_map(|(key, value)| {
                    key.strip_prefix(&prefix)
                        .map(|field| (field.to_string(), value.clone()))
                })
                .collect();
            if !dotted.is_empty() {
                return Ok(serde_json::from_value(Value::Object(dotted))?);
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Parsed background color
    pub fn try_background_color(&self) -> Result<Color, SettingsError> {
        parse_color(&self.background_color)
    }

    /// Parsed background color, falling back to the default on bad input
    pub fn background(&self) -> Color {
        parse_color_or_default(&self.background_color)
    }
}
