//! `[deploy]` section configuration.
//!
//! Decides where the bundle is served from.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! base = "my-vue3-webrtc"     # Sub-path segment, or "/" for the domain root
//! url = "https://user.github.io/my-vue3-webrtc"  # Optional: path used as base
//! ```
//!
//! `base` wins over `url`. With neither set the app deploys at the root.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::resolve::{DeploymentTarget, ResolveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Base path prefix (e.g., "my-app", "/my-app/", or "/").
    pub base: Option<String>,

    /// Public URL of the deployment; its path component becomes the base.
    pub url: Option<String>,
}

pub struct DeployConfigFields {
    pub base: FieldPath,
    pub url: FieldPath,
}

impl DeployConfig {
    pub const FIELDS: DeployConfigFields = DeployConfigFields {
        base: FieldPath::new("deploy.base"),
        url: FieldPath::new("deploy.url"),
    };

    /// Deployment target declared by this section.
    pub fn target(&self) -> Result<DeploymentTarget, ResolveError> {
        match (&self.base, &self.url) {
            (Some(base), _) => DeploymentTarget::from_prefix(base),
            (None, Some(url)) => DeploymentTarget::from_url(url),
            (None, None) => Ok(DeploymentTarget::Root),
        }
    }

    /// Validate deploy configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with `http`/`https` scheme and a host
    /// - the resulting target must be a single valid path segment or root
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://user.github.io/my-app",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://user.github.io/my-app",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {e}"),
                        "use format like https://user.github.io/my-app",
                    );
                    return;
                }
            }
        }

        if let Err(e) = self.target() {
            let field = if self.base.is_some() {
                Self::FIELDS.base
            } else {
                Self::FIELDS.url
            };
            diag.error_with_hint(
                field,
                e.to_string(),
                "use one path segment like \"my-app\", or \"/\" for the domain root",
            );
        }
    }
}
