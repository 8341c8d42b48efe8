//! Resolution error types.

use thiserror::Error;

/// Build-time failures while resolving the base path and manifest.
///
/// All variants are configuration defects: the build aborts and the
/// config must be corrected. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid deployment target `{name}`: {reason}")]
    InvalidTarget { name: String, reason: &'static str },

    #[error("manifest has no icons, at least one icon size is required")]
    IconSetEmpty,

    #[error("invalid icon source `{src}`: {reason}")]
    InvalidIconSource { src: String, reason: &'static str },

    #[error("invalid icon size `{0}`, expected `<width>x<height>` or `any`")]
    InvalidIconSize(String),
}

impl ResolveError {
    pub(crate) fn target(name: &str, reason: &'static str) -> Self {
        Self::InvalidTarget {
            name: name.to_string(),
            reason,
        }
    }

    pub(crate) fn icon_source(src: &str, reason: &'static str) -> Self {
        Self::InvalidIconSource {
            src: src.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::target("a/b", "must not contain a path separator");
        let display = format!("{err}");
        assert!(display.contains("a/b"));
        assert!(display.contains("path separator"));

        let display = format!("{}", ResolveError::IconSetEmpty);
        assert!(display.contains("no icons"));

        let display = format!("{}", ResolveError::InvalidIconSize("12by12".into()));
        assert!(display.contains("12by12"));
    }
}
