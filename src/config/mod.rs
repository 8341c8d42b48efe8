//! Project configuration management for `pwa.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── app        # [app]
//! │   ├── build      # [build]
//! │   ├── deploy     # [deploy]
//! │   └── manifest   # [manifest], [[manifest.icons]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── util.rs        # Config discovery, path normalization
//! └── mod.rs         # PwaConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section            | Purpose                                         |
//! |--------------------|-------------------------------------------------|
//! | `[app]`            | Display name, short name, description           |
//! | `[deploy]`         | Deployment target: base prefix or public URL    |
//! | `[manifest]`       | Colors, display mode, update strategy, icons    |
//! | `[build]`          | Output directory and emitted file names         |

pub mod section;
pub mod types;
mod util;

use util::{find_config_file, normalize_dir};

pub use section::{AppConfig, BuildConfig, DeployConfig, ManifestConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
    resolve::{self, DeploymentTarget, ManifestInput, Resolved},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pwa.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PwaConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// App naming
    #[serde(default)]
    pub app: AppConfig,

    /// Deployment target
    #[serde(default)]
    pub deploy: DeployConfig,

    /// Manifest appearance, update strategy and icons
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Output settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl PwaConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'pwaforge init' to create one",
                cli.config.display()
            )));
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name, .. } => {
                let dir = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => match find_config_file(&cli.config) {
                Some(path) => Ok((path, true)),
                None => Ok((cwd.join(&cli.config), false)),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Some(args) = cli.build_args() {
            self.apply_build_args(args);
        }

        self.root = root.canonicalize().unwrap_or(root);
        self.build.output = normalize_dir(&self.build.output, &self.root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input or closed stdin in CI)
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    ///
    /// Target precedence: `--base` > `--site-url` > `deploy.base` > `deploy.url`.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        // Set-only: the flag is process-wide.
        if args.verbose {
            crate::logger::set_verbose(true);
        }

        if let Some(url) = &args.site_url {
            self.deploy.url = Some(url.clone());
            self.deploy.base = None;
        }
        if let Some(base) = &args.base {
            self.deploy.base = Some(base.clone());
        }
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // resolution
    // ========================================================================

    /// Deployment target after CLI overrides.
    pub fn target(&self) -> Result<DeploymentTarget, resolve::ResolveError> {
        self.deploy.target()
    }

    /// Manifest declaration as handed to the resolver.
    pub fn manifest_input(&self) -> ManifestInput {
        ManifestInput {
            name: self.app.name.clone(),
            short_name: self.app.effective_short_name().to_string(),
            description: self.app.description.clone(),
            theme_color: self.manifest.theme_color.clone(),
            background_color: self.manifest.background_color.clone(),
            display: self.manifest.display,
            update_strategy: self.manifest.register_type,
            icons: self.manifest.icons.clone(),
        }
    }

    /// Resolve base path and manifest for this configuration.
    pub fn resolve(&self) -> Result<Resolved> {
        let target = self.target()?;
        let resolved = resolve::resolve(&target, &self.manifest_input())?;
        crate::debug!("resolve"; "target {} -> base {}", target, resolved.base);
        Ok(resolved)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.validate_sections(&mut diag);

        // Print collected warnings (grouped display)
        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section validator.
    fn validate_sections(&self, diag: &mut ConfigDiagnostics) {
        self.app.validate(diag);
        self.deploy.validate(diag);
        self.manifest.validate(diag);
        self.build.validate(diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[app]` and icon fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> PwaConfig {
    let config = format!(
        "[app]\nname = \"Test App\"\n\n[[manifest.icons]]\nsrc = \"icon.svg\"\nsizes = [\"192x192\"]\n{extra}"
    );
    let (parsed, ignored) = PwaConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{DisplayMode, UpdateStrategy};
    use clap::Parser;
    use tempfile::TempDir;

    const WEBRTC_CONFIG: &str = r##"
[app]
name = "WebRTC QR Signaling Vue 3"
short_name = "WebRTCQR"
description = "A futuristic Vue 3 PWA for QR-based WebRTC signaling"

[deploy]
base = "my-vue3-webrtc"

[manifest]
theme_color = "#000000"
background_color = "#000000"
display = "standalone"
register_type = "autoUpdate"

[[manifest.icons]]
src = "pwa-logo.svg"
sizes = ["144x144", "512x512"]
type = "image/svg"
"##;

    fn write_project(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pwa.toml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("pwaforge").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(PwaConfig::parse_with_ignored("[app\nname = \"x\"").is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.app.name, "Test App");
        assert_eq!(config.deploy, DeployConfig::default());
        assert_eq!(config.manifest.display, DisplayMode::Standalone);
        assert_eq!(config.manifest.register_type, UpdateStrategy::AutoUpdate);
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.target().unwrap(), DeploymentTarget::Root);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[app]\nname = \"Test\"\n[manifest]\nthem_color = \"#000\"";
        let (config, ignored) = PwaConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.app.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("them_color")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = PwaConfig::parse_with_ignored(WEBRTC_CONFIG).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
    }

    #[test]
    fn test_manifest_input_short_name_fallback() {
        let config = test_parse_config("");
        assert_eq!(config.manifest_input().short_name, "Test App");
    }

    #[test]
    fn test_resolve_webrtc_config() {
        let (config, _) = PwaConfig::parse_with_ignored(WEBRTC_CONFIG).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.base, "/my-vue3-webrtc/");
        assert_eq!(resolved.manifest.icons.len(), 2);
        assert_eq!(resolved.manifest.icons[1].src, "/my-vue3-webrtc/pwa-logo.svg");
        assert_eq!(resolved.manifest.icons[1].sizes, "512x512");
        assert_eq!(resolved.manifest.icons[1].mime_type, "image/svg");
    }

    #[test]
    fn test_cli_base_overrides_config() {
        let (config, _) = PwaConfig::parse_with_ignored(WEBRTC_CONFIG).unwrap();

        let mut root = config.clone();
        root.apply_build_args(&BuildArgs {
            base: Some("/".into()),
            ..Default::default()
        });
        assert_eq!(root.target().unwrap(), DeploymentTarget::Root);

        let mut from_url = config.clone();
        from_url.apply_build_args(&BuildArgs {
            site_url: Some("https://user.github.io/preview".into()),
            ..Default::default()
        });
        assert_eq!(
            from_url.target().unwrap(),
            DeploymentTarget::Subpath("preview".into())
        );

        let mut both = config;
        both.apply_build_args(&BuildArgs {
            base: Some("wins".into()),
            site_url: Some("https://user.github.io/loses".into()),
            minify: Some(true),
            ..Default::default()
        });
        assert_eq!(both.target().unwrap(), DeploymentTarget::Subpath("wins".into()));
        assert!(both.build.minify);
    }

    #[test]
    fn test_load_from_absolute_config_path() {
        let (temp, path) = write_project(WEBRTC_CONFIG);
        let config = PwaConfig::load(&cli(&["-C", path.to_str().unwrap(), "check"])).unwrap();

        let root = temp.path().canonicalize().unwrap();
        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(config.root_relative(&config.build.output), PathBuf::from("dist"));
    }

    #[test]
    fn test_load_missing_config_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pwa.toml");
        let err = PwaConfig::load(&cli(&["-C", path.to_str().unwrap(), "build"])).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reports_all_diagnostics() {
        let (_temp, path) = write_project(
            "[app]\nname = \"\"\n[deploy]\nbase = \"a/b\"\n[manifest]\ntheme_color = \"#zzz\"\n",
        );
        let err = PwaConfig::load(&cli(&["-C", path.to_str().unwrap(), "check"])).unwrap_err();
        let diag = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("expected diagnostics, got {other:?}"),
        };
        let fields: Vec<_> = diag.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(
            fields,
            ["app.name", "deploy.base", "manifest.theme_color", "manifest.icons"]
        );
    }
}
