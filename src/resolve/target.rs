//! Deployment target and base path computation.
//!
//! ```text
//! Root              -> "/"
//! Subpath("my-app") -> "/my-app/"
//! ```

use super::ResolveError;
use crate::utils::route::extract_url_path;
use std::fmt;

/// Where the bundle is served from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DeploymentTarget {
    /// Served from the domain root.
    #[default]
    Root,
    /// Served from a single path segment, e.g. a GitHub Pages project site.
    Subpath(String),
}

impl DeploymentTarget {
    /// Create a sub-path target, validating the segment name.
    pub fn subpath(name: impl Into<String>) -> Result<Self, ResolveError> {
        let name = name.into();
        validate_segment(&name)?;
        Ok(Self::Subpath(name))
    }

    /// Parse a base path prefix as written in config or on the command line.
    ///
    /// `"/"` is the root. Anything else has its surrounding slashes trimmed
    /// and must be a single valid segment, so `"/my-app/"` and `"my-app"`
    /// are the same target while `""` is rejected.
    pub fn from_prefix(prefix: &str) -> Result<Self, ResolveError> {
        if prefix == "/" {
            return Ok(Self::Root);
        }
        let trimmed = prefix.trim_matches('/');
        if trimmed.is_empty() {
            return Err(ResolveError::target(prefix, "must not be empty"));
        }
        Self::subpath(trimmed)
    }

    /// Derive the target from the public URL of the deployment.
    ///
    /// `https://user.github.io/my-app` deploys under `/my-app/`;
    /// `https://example.com` deploys at the root.
    pub fn from_url(url: &str) -> Result<Self, ResolveError> {
        let path = extract_url_path(url)
            .ok_or_else(|| ResolveError::target(url, "not a valid absolute URL"))?;
        if path.is_empty() {
            Ok(Self::Root)
        } else {
            Self::subpath(path)
        }
    }

    /// Public base path under which every built asset is referenced.
    pub fn base_path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Subpath(name) => format!("/{name}/"),
        }
    }
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("root"),
            Self::Subpath(name) => write!(f, "subpath({name})"),
        }
    }
}

/// Check that `name` is usable as one URL path segment.
fn validate_segment(name: &str) -> Result<(), ResolveError> {
    if name.is_empty() {
        return Err(ResolveError::target(name, "must not be empty"));
    }
    if name.contains(['/', '\\']) {
        return Err(ResolveError::target(
            name,
            "must be a single path segment without separators",
        ));
    }
    if name == "." || name == ".." {
        return Err(ResolveError::target(name, "must not be a relative segment"));
    }
    if name.contains(['?', '#']) || name.chars().any(char::is_whitespace) {
        return Err(ResolveError::target(
            name,
            "must not contain `?`, `#` or whitespace",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path() {
        assert_eq!(DeploymentTarget::Root.base_path(), "/");
        assert_eq!(
            DeploymentTarget::subpath("my-app").unwrap().base_path(),
            "/my-app/"
        );
    }

    #[test]
    fn test_subpath_rejects_bad_names() {
        for name in ["", "a/b", "a\\b", ".", "..", "a b", "a?b", "a#b"] {
            let err = DeploymentTarget::subpath(name).unwrap_err();
            assert!(
                matches!(err, ResolveError::InvalidTarget { .. }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_prefix() {
        assert_eq!(DeploymentTarget::from_prefix("/").unwrap(), DeploymentTarget::Root);
        assert_eq!(
            DeploymentTarget::from_prefix("/my-app/").unwrap(),
            DeploymentTarget::Subpath("my-app".into())
        );
        assert_eq!(
            DeploymentTarget::from_prefix("my-app").unwrap(),
            DeploymentTarget::Subpath("my-app".into())
        );
        assert!(DeploymentTarget::from_prefix("").is_err());
        assert!(DeploymentTarget::from_prefix("//").is_err());
        assert!(DeploymentTarget::from_prefix("/a/b/").is_err());
    }

    #[test]
    fn test_from_url() {
        assert_eq!(
            DeploymentTarget::from_url("https://user.github.io/my-vue3-webrtc").unwrap(),
            DeploymentTarget::Subpath("my-vue3-webrtc".into())
        );
        assert_eq!(
            DeploymentTarget::from_url("https://example.com/").unwrap(),
            DeploymentTarget::Root
        );
        assert!(DeploymentTarget::from_url("https://example.com/a/b").is_err());
        assert!(DeploymentTarget::from_url("not a url").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(DeploymentTarget::Root.to_string(), "root");
        assert_eq!(
            DeploymentTarget::Subpath("x".into()).to_string(),
            "subpath(x)"
        );
    }
}
