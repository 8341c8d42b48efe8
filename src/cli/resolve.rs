//! `pwaforge resolve`: print the resolved deployment data for bundlers.

use crate::config::PwaConfig;
use anyhow::Result;
use std::io::{Write, stdout};

/// Print `{base, register_type, revision, manifest_href, manifest}` to stdout.
pub fn print_resolved(config: &PwaConfig, pretty: bool) -> Result<()> {
    let json = render(config, pretty)?;

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

fn render(config: &PwaConfig, pretty: bool) -> Result<String> {
    let resolved = config.resolve()?;
    let summary = resolved.summary(&config.build.manifest_filename);
    let json = if pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use serde_json::Value;

    #[test]
    fn test_render_subpath_summary() {
        let config = test_parse_config("[deploy]\nurl = \"https://user.github.io/my-app\"\n");
        let value: Value = serde_json::from_str(&render(&config, false).unwrap()).unwrap();

        assert_eq!(value["base"], "/my-app/");
        assert_eq!(value["register_type"], "autoUpdate");
        assert_eq!(value["manifest_href"], "/my-app/manifest.webmanifest");
        assert_eq!(value["manifest"]["icons"][0]["src"], "/my-app/icon.svg");
        assert_eq!(value["revision"].as_str().unwrap().len(), 8);
        assert!(value["manifest"].get("update_strategy").is_none());
    }

    #[test]
    fn test_render_pretty_matches_compact() {
        let config = test_parse_config("");
        let compact: Value = serde_json::from_str(&render(&config, false).unwrap()).unwrap();
        let pretty = render(&config, true).unwrap();

        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&pretty).unwrap(), compact);
    }

    #[test]
    fn test_render_invalid_target_fails() {
        let mut config = test_parse_config("");
        config.deploy.base = Some("a b".into());
        assert!(render(&config, false).is_err());
    }
}
