//! `[app]` section configuration.
//!
//! ```toml
//! [app]
//! name = "WebRTC QR Signaling Vue 3"
//! short_name = "WebRTCQR"
//! description = "A futuristic Vue 3 PWA for QR-based WebRTC signaling"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Launchers start truncating labels past this many characters.
const SHORT_NAME_SOFT_LIMIT: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Full application name shown in install prompts.
    pub name: String,

    /// Label under the home-screen icon. Falls back to `name` when empty.
    pub short_name: String,

    /// One-line description of the app.
    pub description: String,
}

pub struct AppConfigFields {
    pub name: FieldPath,
    pub short_name: FieldPath,
}

impl AppConfig {
    pub const FIELDS: AppConfigFields = AppConfigFields {
        name: FieldPath::new("app.name"),
        short_name: FieldPath::new("app.short_name"),
    };

    /// Short name as emitted in the manifest.
    pub fn effective_short_name(&self) -> &str {
        if self.short_name.trim().is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }

    /// Validate app metadata.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - `short_name` longer than the launcher limit is only a warning
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                format!("{} must not be empty", Self::FIELDS.name),
                "set the name shown in install prompts, e.g.: name = \"My App\"",
            );
        }

        let short_len = self.effective_short_name().chars().count();
        if short_len > SHORT_NAME_SOFT_LIMIT {
            diag.warn(
                Self::FIELDS.short_name,
                format!(
                    "{short_len} characters, launchers may truncate labels longer than {SHORT_NAME_SOFT_LIMIT}"
                ),
            );
        }
    }
}
