//! Installable-app manifest types.
//!
//! [`ManifestInput`] is what the config declares; [`ManifestDescriptor`] is
//! what gets serialized to `manifest.webmanifest` after icon paths have
//! been resolved against the base path.

use super::IconSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred display mode of the installed app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    #[default]
    Standalone,
    MinimalUi,
    Browser,
}

impl DisplayMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fullscreen => "fullscreen",
            Self::Standalone => "standalone",
            Self::MinimalUi => "minimal-ui",
            Self::Browser => "browser",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When the offline copy is replaced by a newer deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateStrategy {
    /// New service worker takes over and the page reloads.
    #[default]
    AutoUpdate,
    /// New service worker waits until the app asks to activate it.
    #[serde(alias = "prompt")]
    Manual,
}

impl UpdateStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AutoUpdate => "autoUpdate",
            Self::Manual => "manual",
        }
    }
}

impl fmt::Display for UpdateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One icon as emitted in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Manifest declaration before icon paths are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestInput {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: DisplayMode,
    pub update_strategy: UpdateStrategy,
    pub icons: Vec<IconSource>,
}

/// Resolved manifest document.
///
/// Field order is the serialization order. `update_strategy` is consumed by
/// the register script and never written to the manifest itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestDescriptor {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub theme_color: String,
    pub background_color: String,
    pub display: DisplayMode,
    #[serde(skip)]
    pub update_strategy: UpdateStrategy,
    pub icons: Vec<IconEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&DisplayMode::MinimalUi).unwrap(),
            "\"minimal-ui\""
        );
        let mode: DisplayMode = serde_json::from_str("\"fullscreen\"").unwrap();
        assert_eq!(mode, DisplayMode::Fullscreen);
        assert_eq!(DisplayMode::default().as_str(), "standalone");
    }

    #[test]
    fn test_update_strategy_accepts_prompt_alias() {
        let auto: UpdateStrategy = serde_json::from_str("\"autoUpdate\"").unwrap();
        assert_eq!(auto, UpdateStrategy::AutoUpdate);
        let manual: UpdateStrategy = serde_json::from_str("\"manual\"").unwrap();
        let prompt: UpdateStrategy = serde_json::from_str("\"prompt\"").unwrap();
        assert_eq!(manual, UpdateStrategy::Manual);
        assert_eq!(prompt, UpdateStrategy::Manual);
    }

    #[test]
    fn test_descriptor_omits_update_strategy() {
        let manifest = ManifestDescriptor {
            name: "App".into(),
            short_name: "App".into(),
            description: String::new(),
            theme_color: "#000000".into(),
            background_color: "#ffffff".into(),
            display: DisplayMode::Standalone,
            update_strategy: UpdateStrategy::Manual,
            icons: vec![IconEntry {
                src: "/icon.png".into(),
                sizes: "192x192".into(),
                mime_type: "image/png".into(),
            }],
        };
        let value = serde_json::to_value(&manifest).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            [
                "name",
                "short_name",
                "description",
                "theme_color",
                "background_color",
                "display",
                "icons"
            ]
        );
        assert_eq!(value["icons"][0]["type"], "image/png");
    }
}
