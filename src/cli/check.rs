//! `pwaforge check`: validate and resolve without writing files.

use crate::{config::PwaConfig, log};
use anyhow::Result;

/// Resolve the config and report what a build would produce.
///
/// Config diagnostics have already been reported by [`PwaConfig::load`].
pub fn check_config(config: &PwaConfig) -> Result<()> {
    let resolved = config.resolve()?;

    log!(
        "check";
        "ok: base {}, {} icon entries, {} ({})",
        resolved.base,
        resolved.manifest.icons.len(),
        resolved.update_strategy(),
        resolved.revision()
    );
    Ok(())
}
