//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Each section exposes its paths through a `FIELDS` constant so
/// diagnostics never carry hand-typed key strings.
///
/// # Example
///
/// ```ignore
/// impl AppConfig {
///     pub const FIELDS: AppConfigFields = AppConfigFields {
///         name: FieldPath::new("app.name"),
///         ..
///     };
/// }
///
/// diag.error(AppConfig::FIELDS.name, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |q| q.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
