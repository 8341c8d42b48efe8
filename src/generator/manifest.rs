//! Manifest generation.
//!
//! Serializes the resolved manifest into `<output>/<manifest_filename>`.
//!
//! ```json
//! {
//!   "name": "WebRTC QR Signaling Vue 3",
//!   "short_name": "WebRTCQR",
//!   "description": "...",
//!   "theme_color": "#000000",
//!   "background_color": "#000000",
//!   "display": "standalone",
//!   "icons": [
//!     { "src": "/my-vue3-webrtc/pwa-logo.svg", "sizes": "144x144", "type": "image/svg" }
//!   ]
//! }
//! ```

use super::write_output;
use crate::{config::PwaConfig, log, resolve::Resolved};
use anyhow::Result;
use std::path::PathBuf;

/// Write the manifest document. Returns the written path.
pub fn build_manifest(config: &PwaConfig, resolved: &Resolved) -> Result<PathBuf> {
    let path = config.build.output.join(&config.build.manifest_filename);

    let mut json = resolved.manifest_json(!config.build.minify);
    json.push('\n');
    write_output(&path, json.as_bytes())?;

    log!("manifest"; "{} ({} icon{}, revision {})",
        config.root_relative(&path).display(),
        resolved.manifest.icons.len(),
        if resolved.manifest.icons.len() == 1 { "" } else { "s" },
        resolved.revision());
    Ok(path)
}
