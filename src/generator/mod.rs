//! Output generators.
//!
//! Writes the resolved configuration into the output directory:
//!
//! - **Manifest**: the installable-app manifest (`manifest.webmanifest`)
//! - **Register**: service worker register script (`registerSW.js`)
//!
//! Both take an already [`Resolved`](crate::resolve::Resolved) value, so
//! the files they write always agree on the base path.

pub mod manifest;
pub mod register;

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Write `content` to `path`, creating parent directories.
fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
