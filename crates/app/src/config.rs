//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use domain::{DuplicateScope, GalleryPolicy};

/// Application configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `GALLERY_FILE`: path of the gallery document (default: `"gallery.json"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `GALLERY_DUPLICATE_SCOPE`: `"gallery"` or `"artist"` (default: `"gallery"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub gallery_file: PathBuf,
    pub log_level: String,
    pub duplicate_scope: DuplicateScope,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup. Unset or unparsable
    /// values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            gallery_file: lookup("GALLERY_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.gallery_file),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            duplicate_scope: lookup("GALLERY_DUPLICATE_SCOPE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.duplicate_scope),
        }
    }

    /// Returns the gallery rules this configuration selects.
    pub fn policy(&self) -> GalleryPolicy {
        GalleryPolicy::new(self.duplicate_scope)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gallery_file: PathBuf::from("gallery.json"),
            log_level: "info".to_string(),
            duplicate_scope: DuplicateScope::Gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.gallery_file, PathBuf::from("gallery.json"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.duplicate_scope, DuplicateScope::Gallery);
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("GALLERY_FILE", "/var/lib/gallery/store.json"),
            ("RUST_LOG", "debug"),
            ("GALLERY_DUPLICATE_SCOPE", "artist"),
        ]));
        assert_eq!(
            config.gallery_file,
            PathBuf::from("/var/lib/gallery/store.json")
        );
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.policy().duplicate_scope, DuplicateScope::Artist);
    }

    #[test]
    fn test_unparsable_scope_falls_back() {
        let config = Config::from_lookup(lookup(&[("GALLERY_DUPLICATE_SCOPE", "everyone")]));
        assert_eq!(config.duplicate_scope, DuplicateScope::Gallery);
        assert_eq!(config.gallery_file, PathBuf::from("gallery.json"));
    }
}
