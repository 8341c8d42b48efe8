//! `[manifest]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [manifest]
//! theme_color = "#000000"
//! background_color = "#000000"
//! display = "standalone"      # fullscreen | standalone | minimal-ui | browser
//! register_type = "autoUpdate" # autoUpdate | manual
//!
//! [[manifest.icons]]
//! src = "pwa-logo.svg"        # Relative to the public directory
//! sizes = ["144x144", "512x512"]
//! type = "image/svg"          # Optional, inferred from the extension
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::resolve::{DisplayMode, IconSource, ResolveError, UpdateStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Browser UI color while the app is running.
    pub theme_color: String,

    /// Splash screen color while the app loads.
    pub background_color: String,

    /// Preferred display mode.
    pub display: DisplayMode,

    /// Service worker update strategy.
    pub register_type: UpdateStrategy,

    /// Icon files and the sizes each is advertised at.
    pub icons: Vec<IconSource>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            theme_color: "#ffffff".into(),
            background_color: "#ffffff".into(),
            display: DisplayMode::default(),
            register_type: UpdateStrategy::default(),
            icons: Vec::new(),
        }
    }
}

pub struct ManifestConfigFields {
    pub theme_color: FieldPath,
    pub background_color: FieldPath,
    pub icons: FieldPath,
}

impl ManifestConfig {
    pub const FIELDS: ManifestConfigFields = ManifestConfigFields {
        theme_color: FieldPath::new("manifest.theme_color"),
        background_color: FieldPath::new("manifest.background_color"),
        icons: FieldPath::new("manifest.icons"),
    };

    /// Validate manifest configuration.
    ///
    /// # Checks
    /// - colors must be CSS hex colors or named colors
    /// - at least one icon must be declared
    /// - every icon must expand cleanly (sizes, reachable path)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (Self::FIELDS.theme_color, &self.theme_color),
            (Self::FIELDS.background_color, &self.background_color),
        ] {
            if !is_css_color(value) {
                diag.error_with_hint(
                    field,
                    format!("'{value}' is not a valid color"),
                    "use a hex color like \"#000000\" or a named color like \"black\"",
                );
            }
        }

        if self.icons.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.icons,
                ResolveError::IconSetEmpty.to_string(),
                "add an icon, e.g.:\n  [[manifest.icons]]\n  src = \"pwa-logo.svg\"\n  sizes = [\"192x192\", \"512x512\"]",
            );
            return;
        }

        // Base path does not change whether an icon expands, only its prefix.
        for (i, icon) in self.icons.iter().enumerate() {
            if let Err(e) = icon.expand("/") {
                diag.error(Self::FIELDS.icons, format!("icon #{}: {e}", i + 1));
            }
        }
    }
}

/// Check for `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, or a bare named color.
fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic()),
    }
}
