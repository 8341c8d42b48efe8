//! Project initialization.
//!
//! Writes a starter `pwa.toml` and ignore patterns for the build output.

use crate::{config::PwaConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Name used when the project directory has no usable name
const FALLBACK_NAME: &str = "My App";

/// Write a starter config for the project at `config.root`.
///
/// If `dry_run` is true, only prints the config template to stdout.
/// An existing config file is never overwritten.
pub fn init_project(config: &PwaConfig, dry_run: bool) -> Result<()> {
    let root = config.get_root();
    let content = generate_config_template(&app_name(root));

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    if config.config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Edit it directly, or remove it to start over.",
            config.config_path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&config.config_path, content).with_context(|| {
        format!(
            "Failed to write config file '{}'",
            config.config_path.display()
        )
    })?;
    write_ignore_files(root, &config.root_relative(&config.build.output))?;

    log!("init"; "wrote {}", config.root_relative(&config.config_path).display());
    Ok(())
}

/// Derive the app name from the project directory.
fn app_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

/// Generate pwa.toml content with comments
pub fn generate_config_template(name: &str) -> String {
    let name = toml::Value::String(name.to_string());
    let mut out = String::new();

    out.push_str(&format!(
        "# pwaforge configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str("[app]\n");
    out.push_str(&format!("name = {name}\n"));
    out.push_str("# short_name = \"\"            # Home-screen label, defaults to name\n");
    out.push_str("description = \"\"\n\n");

    out.push_str("[deploy]\n");
    out.push_str("# base = \"my-app\"            # Served under /my-app/, \"/\" for the root\n");
    out.push_str("# url = \"https://user.github.io/my-app\"  # Alternative: base taken from the URL path\n\n");

    out.push_str("[manifest]\n");
    out.push_str("theme_color = \"#ffffff\"\n");
    out.push_str("background_color = \"#ffffff\"\n");
    out.push_str("display = \"standalone\"      # fullscreen | standalone | minimal-ui | browser\n");
    out.push_str("register_type = \"autoUpdate\" # autoUpdate | manual\n\n");

    out.push_str("[[manifest.icons]]\n");
    out.push_str("src = \"pwa-logo.svg\"        # Relative to the public directory\n");
    out.push_str("sizes = [\"192x192\", \"512x512\"]\n");
    out.push_str("# type = \"image/svg\"          # Emitted verbatim; inferred from the extension when unset\n\n");

    out.push_str("[build]\n");
    out.push_str("output = \"dist\"\n");
    out.push_str("manifest_filename = \"manifest.webmanifest\"\n");
    out.push_str("register_script = true\n");
    out.push_str("register_filename = \"registerSW.js\"\n");
    out.push_str("sw_filename = \"sw.js\"\n");

    out
}

/// Write ignore files with the output directory pattern.
///
/// Existing ignore files are left alone.
fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let content = format!("{}\n", Path::new("/").join(output_dir).display());

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
