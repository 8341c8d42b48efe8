//! `[build]` section configuration.
//!
//! Contains output settings for the emitted files.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"                             # Output directory (relative to project root)
//! manifest_filename = "manifest.webmanifest"  # Manifest file name
//! register_script = true                      # Emit the service worker register script
//! register_filename = "registerSW.js"         # Register script file name
//! sw_filename = "sw.js"                       # Service worker the script registers
//! minify = false                              # Compact JSON output
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// File name of the emitted manifest.
    pub manifest_filename: String,

    /// Whether to emit the service worker register script.
    pub register_script: bool,

    /// File name of the register script.
    pub register_filename: String,

    /// File name of the service worker, served under the base path.
    pub sw_filename: String,

    /// Write compact JSON instead of pretty-printed.
    pub minify: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "dist".into(),
            manifest_filename: "manifest.webmanifest".into(),
            register_script: true,
            register_filename: "registerSW.js".into(),
            sw_filename: "sw.js".into(),
            minify: false,
        }
    }
}

pub struct BuildConfigFields {
    pub manifest_filename: FieldPath,
    pub register_filename: FieldPath,
    pub sw_filename: FieldPath,
}

impl BuildConfig {
    pub const FIELDS: BuildConfigFields = BuildConfigFields {
        manifest_filename: FieldPath::new("build.manifest_filename"),
        register_filename: FieldPath::new("build.register_filename"),
        sw_filename: FieldPath::new("build.sw_filename"),
    };

    /// Validate build configuration.
    ///
    /// # Checks
    /// - emitted file names must be plain names served directly under the base path
    /// - register script and manifest must not overwrite each other
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let names = [
            (Self::FIELDS.manifest_filename, &self.manifest_filename),
            (Self::FIELDS.register_filename, &self.register_filename),
            (Self::FIELDS.sw_filename, &self.sw_filename),
        ];
        for (field, name) in names {
            if !is_plain_filename(name) {
                diag.error_with_hint(
                    field,
                    format!("'{name}' is not a plain file name"),
                    "use a name without path separators, e.g. \"manifest.webmanifest\"",
                );
            }
        }

        if self.register_script && self.register_filename == self.manifest_filename {
            diag.error(
                Self::FIELDS.register_filename,
                format!(
                    "{} and {} point to the same file",
                    Self::FIELDS.register_filename,
                    Self::FIELDS.manifest_filename
                ),
            );
        }
    }
}

fn is_plain_filename(name: &str) -> bool {
    !name.trim().is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}
