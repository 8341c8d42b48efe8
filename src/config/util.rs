//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/app/src/components/  ← cwd
/// /home/user/app/pwa.toml         ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Resolve a configured directory against the project root.
///
/// Expands a leading `~`, joins relative paths onto `root`, and
/// canonicalizes when the path already exists.
pub fn normalize_dir(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        root.join(&path)
    } else {
        path
    };
    full_path.canonicalize().unwrap_or(full_path)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_file_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pwa.toml");
        assert_eq!(find_config_file(&path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }

    #[test]
    fn test_normalize_dir_relative_to_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();

        // Not created yet: joined but not canonicalized
        assert_eq!(normalize_dir(Path::new("dist"), &root), root.join("dist"));

        fs::create_dir(root.join("out")).unwrap();
        assert_eq!(normalize_dir(Path::new("out"), &root), root.join("out"));
    }

    #[test]
    fn test_normalize_dir_absolute_kept() {
        let temp = TempDir::new().unwrap();
        let abs = temp.path().join("elsewhere");
        assert_eq!(normalize_dir(&abs, Path::new("/unused")), abs);
    }
}
