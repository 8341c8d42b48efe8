//! Base path and manifest resolution.
//!
//! # Module Structure
//!
//! ```text
//! resolve/
//! ├── error      # ResolveError
//! ├── icon       # IconSource expansion and path rewriting
//! ├── manifest   # ManifestInput / ManifestDescriptor
//! ├── target     # DeploymentTarget and base path
//! └── mod.rs     # resolve() and Resolved (this file)
//! ```
//!
//! [`resolve`] is the single source of truth for what gets emitted: one
//! manifest declaration parameterized by a [`DeploymentTarget`]. It is pure,
//! so the same input always produces byte-identical output.

mod error;
mod icon;
mod manifest;
mod target;

pub use error::ResolveError;
pub use icon::IconSource;
pub use manifest::{
    DisplayMode, IconEntry, ManifestDescriptor, ManifestInput, UpdateStrategy,
};
pub use target::DeploymentTarget;

use crate::utils::hash;
use serde::Serialize;

/// Output of [`resolve`]: the base path and a manifest consistent with it.
///
/// Every `manifest.icons[i].src` starts with `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub base: String,
    pub manifest: ManifestDescriptor,
}

/// Resolve the base path and manifest for a deployment target.
///
/// # Errors
/// - [`ResolveError::IconSetEmpty`] if no icon would be emitted
/// - [`ResolveError::InvalidIconSource`] / [`ResolveError::InvalidIconSize`]
///   for icon declarations that cannot be served under the base path
pub fn resolve(target: &DeploymentTarget, input: &ManifestInput) -> Result<Resolved, ResolveError> {
    let base = target.base_path();

    let mut icons = Vec::new();
    for source in &input.icons {
        icons.extend(source.expand(&base)?);
    }
    if icons.is_empty() {
        return Err(ResolveError::IconSetEmpty);
    }

    let manifest = ManifestDescriptor {
        name: input.name.clone(),
        short_name: input.short_name.clone(),
        description: input.description.clone(),
        theme_color: input.theme_color.clone(),
        background_color: input.background_color.clone(),
        display: input.display,
        update_strategy: input.update_strategy,
        icons,
    };

    debug_assert!(manifest.icons.iter().all(|icon| icon.src.starts_with(&base)));
    Ok(Resolved { base, manifest })
}

impl Resolved {
    /// Serialize the manifest document.
    pub fn manifest_json(&self, pretty: bool) -> String {
        let json = if pretty {
            serde_json::to_string_pretty(&self.manifest)
        } else {
            serde_json::to_string(&self.manifest)
        };
        // Only strings, enums and vectors of those: serialization cannot fail.
        json.unwrap_or_default()
    }

    /// Stable fingerprint of the compact manifest document.
    pub fn revision(&self) -> String {
        hash::fingerprint(&self.manifest_json(false))
    }

    /// URL of an emitted file (manifest, register script, service worker).
    pub fn asset_url(&self, filename: &str) -> String {
        format!("{}{}", self.base, filename.trim_start_matches('/'))
    }

    pub const fn update_strategy(&self) -> UpdateStrategy {
        self.manifest.update_strategy
    }

    /// Summary handed to the bundler by `pwaforge resolve`.
    pub fn summary<'a>(&'a self, manifest_filename: &str) -> ResolveSummary<'a> {
        ResolveSummary {
            base: &self.base,
            register_type: self.update_strategy(),
            revision: self.revision(),
            manifest_href: self.asset_url(manifest_filename),
            manifest: &self.manifest,
        }
    }
}

/// JSON payload printed by `pwaforge resolve`.
#[derive(Debug, Serialize)]
pub struct ResolveSummary<'a> {
    pub base: &'a str,
    pub register_type: UpdateStrategy,
    pub revision: String,
    pub manifest_href: String,
    pub manifest: &'a ManifestDescriptor,
}

// ============================================================================
// tests
// ============================================================================
