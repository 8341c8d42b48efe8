//! Icon source expansion.
//!
//! One [`IconSource`] declares a file and the sizes it should be advertised
//! at. Expansion yields one [`IconEntry`] per size, in declared order, with
//! `src` rewritten under the base path.

use super::{IconEntry, ResolveError};
use crate::utils::{
    mime,
    route::{is_external_link, strip_leading_slash},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An icon file declared in config, relative to the public directory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSource {
    /// File path inside the public directory (e.g. `pwa-logo.svg`).
    pub src: String,

    /// Size descriptors (`144x144`, `512x512`, `any`).
    pub sizes: Vec<String>,

    /// MIME type; inferred from the extension when unset.
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
}

impl IconSource {
    pub fn new<I, S>(src: impl Into<String>, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            src: src.into(),
            sizes: sizes.into_iter().map(Into::into).collect(),
            mime_type: None,
        }
    }

    /// Expand into manifest entries under `base`.
    ///
    /// A source without sizes contributes no entries, so it fails with
    /// [`ResolveError::IconSetEmpty`].
    pub fn expand(&self, base: &str) -> Result<Vec<IconEntry>, ResolveError> {
        if self.sizes.is_empty() {
            return Err(ResolveError::IconSetEmpty);
        }

        let src = resolve_src(base, &self.src)?;
        let mime_type = match &self.mime_type {
            Some(declared) => declared.clone(),
            None => mime::for_icon(Path::new(strip_query(&self.src))).to_string(),
        };

        self.sizes
            .iter()
            .map(|sizes| {
                validate_sizes(sizes)?;
                Ok(IconEntry {
                    src: src.clone(),
                    sizes: sizes.trim().to_string(),
                    mime_type: mime_type.clone(),
                })
            })
            .collect()
    }
}

/// Rewrite a public-directory path so it resolves under `base`.
///
/// `base` always starts and ends with `/`. A path already under `base` is
/// kept as is.
fn resolve_src(base: &str, src: &str) -> Result<String, ResolveError> {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::icon_source(src, "path is empty"));
    }
    if trimmed.starts_with("//") || is_external_link(trimmed) {
        return Err(ResolveError::icon_source(
            src,
            "must be a path in the public directory, not a URL",
        ));
    }

    let relative = match trimmed.strip_prefix(base) {
        Some(rest) if base != "/" => rest,
        _ => strip_leading_slash(trimmed),
    };
    if relative.is_empty() {
        return Err(ResolveError::icon_source(src, "path names a directory"));
    }
    if relative.split('/').any(|segment| segment == "..") {
        return Err(ResolveError::icon_source(
            src,
            "must not leave the public directory",
        ));
    }

    Ok(format!("{base}{relative}"))
}

/// Drop a `?query` or `#fragment` suffix.
fn strip_query(src: &str) -> &str {
    src.split(['?', '#']).next().unwrap_or(src)
}

/// Validate a size descriptor: `any`, or space-separated `<W>x<H>` pairs.
fn validate_sizes(sizes: &str) -> Result<(), ResolveError> {
    let trimmed = sizes.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::InvalidIconSize(sizes.to_string()));
    }
    if trimmed == "any" {
        return Ok(());
    }

    let valid = trimmed.split_whitespace().all(|pair| {
        let Some((w, h)) = pair.split_once(['x', 'X']) else {
            return false;
        };
        is_dimension(w) && is_dimension(h)
    });

    if valid {
        Ok(())
    } else {
        Err(ResolveError::InvalidIconSize(sizes.to_string()))
    }
}

#[inline]
fn is_dimension(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) && s.bytes().any(|b| b != b'0')
}
