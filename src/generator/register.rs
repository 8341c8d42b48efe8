//! Service worker register script generation.
//!
//! The script registers `<base><sw_filename>` scoped to `<base>`, so the
//! worker controls exactly the pages served under the base path. How a new
//! worker takes over follows [`UpdateStrategy`]:
//!
//! - `autoUpdate`: reload once when the new worker takes control
//! - `manual`: dispatch `pwa:need-refresh` and let the app decide

use super::write_output;
use crate::{
    config::PwaConfig,
    log,
    resolve::{Resolved, UpdateStrategy},
};
use anyhow::Result;
use std::path::PathBuf;

/// Window event dispatched when a waiting worker needs user approval.
pub const NEED_REFRESH_EVENT: &str = "pwa:need-refresh";

/// Write the register script if enabled. Returns the written path.
pub fn build_register_script(config: &PwaConfig, resolved: &Resolved) -> Result<Option<PathBuf>> {
    if !config.build.register_script {
        return Ok(None);
    }

    let path = config.build.output.join(&config.build.register_filename);
    let script = RegisterScript::new(resolved, &config.build.sw_filename).render();
    write_output(&path, script.as_bytes())?;

    log!("register"; "{} ({})", config.root_relative(&path).display(), resolved.update_strategy());
    Ok(Some(path))
}

struct RegisterScript {
    sw_url: String,
    scope: String,
    strategy: UpdateStrategy,
}

impl RegisterScript {
    fn new(resolved: &Resolved, sw_filename: &str) -> Self {
        Self {
            sw_url: resolved.asset_url(sw_filename),
            scope: resolved.base.clone(),
            strategy: resolved.update_strategy(),
        }
    }

    fn render(&self) -> String {
        let mut js = String::with_capacity(512);

        js.push_str("if ('serviceWorker' in navigator) {\n");
        js.push_str("  window.addEventListener('load', () => {\n");
        js.push_str(&format!(
            "    navigator.serviceWorker.register({}, {{ scope: {} }})",
            js_string(&self.sw_url),
            js_string(&self.scope)
        ));

        match self.strategy {
            UpdateStrategy::AutoUpdate => {
                js.push_str("\n  })\n");
                js.push_str("  let refreshing = false\n");
                js.push_str("  navigator.serviceWorker.addEventListener('controllerchange', () => {\n");
                js.push_str("    if (refreshing) return\n");
                js.push_str("    refreshing = true\n");
                js.push_str("    window.location.reload()\n");
                js.push_str("  })\n");
            }
            UpdateStrategy::Manual => {
                js.push_str(".then((registration) => {\n");
                js.push_str("      registration.addEventListener('updatefound', () => {\n");
                js.push_str("        const worker = registration.installing\n");
                js.push_str("        if (!worker) return\n");
                js.push_str("        worker.addEventListener('statechange', () => {\n");
                js.push_str("          if (worker.state === 'installed' && navigator.serviceWorker.controller) {\n");
                js.push_str(&format!(
                    "            window.dispatchEvent(new CustomEvent({}, {{ detail: registration }}))\n",
                    js_string(NEED_REFRESH_EVENT)
                ));
                js.push_str("          }\n");
                js.push_str("        })\n");
                js.push_str("      })\n");
                js.push_str("    })\n");
                js.push_str("  })\n");
            }
        }

        js.push_str("}\n");
        js
    }
}

/// Quote a string as a single-quoted JavaScript literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn resolved(extra: &str) -> Resolved {
        test_parse_config(extra).resolve().unwrap()
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("/my-app/sw.js"), "'/my-app/sw.js'");
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("</script>"), "'\\x3c/script>'");
    }

    #[test]
    fn test_render_auto_update_under_subpath() {
        let resolved = resolved("[deploy]\nbase = \"my-app\"\n");
        let js = RegisterScript::new(&resolved, "sw.js").render();

        assert!(js.contains("register('/my-app/sw.js', { scope: '/my-app/' })"));
        assert!(js.contains("controllerchange"));
        assert!(!js.contains(NEED_REFRESH_EVENT));
    }

    #[test]
    fn test_render_manual_dispatches_event() {
        let resolved = resolved("[manifest]\nregister_type = \"manual\"\n");
        let js = RegisterScript::new(&resolved, "service-worker.js").render();

        assert!(js.contains("register('/service-worker.js', { scope: '/' })"));
        assert!(js.contains("'pwa:need-refresh'"));
        assert!(!js.contains("controllerchange"));
    }

    #[test]
    fn test_render_braces_balanced() {
        for strategy in ["autoUpdate", "manual"] {
            let resolved = resolved(&format!("[manifest]\nregister_type = \"{strategy}\"\n"));
            let js = RegisterScript::new(&resolved, "sw.js").render();
            let opens = js.matches(['{', '(']).count();
            let closes = js.matches(['}', ')']).count();
            assert_eq!(opens, closes, "{strategy}:\n{js}");
        }
    }

    #[test]
    fn test_build_register_script_respects_toggle() {
        let temp = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.root = temp.path().to_path_buf();
        config.build.output = temp.path().join("dist");
        let resolved = config.resolve().unwrap();

        let path = build_register_script(&config, &resolved).unwrap().unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("serviceWorker"));

        config.build.register_script = false;
        fs::remove_file(&path).unwrap();
        assert!(build_register_script(&config, &resolved).unwrap().is_none());
        assert!(!path.exists());
    }
}
