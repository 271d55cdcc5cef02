//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Whether `base` can prefix page asset URLs.
///
/// Accepts absolute paths (`/`, `/blog/`) and `http(s)` URLs with a host.
///
/// # Examples
/// ```ignore
/// is_valid_base("/")                          -> true
/// is_valid_base("https://cdn.example.com/")   -> true
/// is_valid_base("blog/")                      -> false
/// is_valid_base("ftp://cdn.example.com/")     -> false
/// ```
pub fn is_valid_base(base: &str) -> bool {
    if base.starts_with('/') {
        return !base.starts_with("//");
    }
    url::Url::parse(base)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Find config file by searching upward from current directory
///
/// Returns the path to the first `config_name` found in cwd or one of its
/// ancestors.
///
/// # Example
/// ```text
/// /home/user/app/src/pages/       ← cwd
/// /home/user/app/page-assets.toml ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_base() {
        assert!(is_valid_base("/"));
        assert!(is_valid_base("/blog/"));
        assert!(is_valid_base("https://cdn.example.com/"));
        assert!(is_valid_base("http://localhost:3000"));

        assert!(!is_valid_base(""));
        assert!(!is_valid_base("blog/"));
        assert!(!is_valid_base("//cdn.example.com"));
        assert!(!is_valid_base("ftp://cdn.example.com/"));
        assert!(!is_valid_base("mailto:me@example.com"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page-assets.toml");
        assert_eq!(find_config_file(&path), None);

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
