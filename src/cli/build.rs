//! `pwaforge build`: write the manifest and register script.

use crate::{
    config::PwaConfig,
    generator::{manifest::build_manifest, register::build_register_script},
    log,
};
use anyhow::Result;
use std::path::PathBuf;

/// Resolve the config and write every output file.
///
/// Returns the written paths in emission order.
pub fn build_all(config: &PwaConfig) -> Result<Vec<PathBuf>> {
    let resolved = config.resolve()?;

    let mut written = vec![build_manifest(config, &resolved)?];
    written.extend(build_register_script(config, &resolved)?);

    log!(
        "build";
        "base {} -> {}",
        resolved.base,
        config.root_relative(&config.build.output).display()
    );
    Ok(written)
}
