//! Run configuration
//!
//! Every knob has a default matching the built-in brand migration, so
//! `RebrandConfig::default()` behaves exactly like a run with no flags.

use std::path::PathBuf;

use crate::core::rules::{default_rules, ReplacementRule};

/// Default allowed file extensions
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".json", ".md"];

/// Default exclusion markers: dependencies, build cache, VCS
pub const DEFAULT_EXCLUDE_MARKERS: &[&str] = &["node_modules", ".next", ".git"];

/// Configuration for a single rename run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebrandConfig {
    /// Directory to walk
    pub root: PathBuf,

    /// Ordered replacement rules
    pub rules: Vec<ReplacementRule>,

    /// File name suffixes that qualify a file for processing
    pub extensions: Vec<String>,

    /// Substrings that exclude a directory and everything below it
    pub exclude_markers: Vec<String>,
}

impl Default for RebrandConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            rules: default_rules(),
            extensions: to_owned(DEFAULT_EXTENSIONS),
            exclude_markers: to_owned(DEFAULT_EXCLUDE_MARKERS),
        }
    }
}

impl RebrandConfig {
    /// Create a default config rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Replace the rule list (ignored when empty)
    pub fn rules(mut self, rules: Vec<ReplacementRule>) -> Self {
        if !rules.is_empty() {
            self.rules = rules;
        }
        self
    }

    /// Replace the extension set (ignored when empty).
    /// A missing leading '.' is added, so `md` and `.md` are equivalent.
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .map(|e| if e.starts_with('.') { e } else { format!(".{}", e) })
            .collect();
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }

    /// Replace the exclusion markers (ignored when empty)
    pub fn exclude_markers(mut self, markers: Vec<String>) -> Self {
        let markers: Vec<String> = markers
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if !markers.is_empty() {
            self.exclude_markers = markers;
        }
        self
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RebrandConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[0].pattern, r"Kadraj\s*Panel");
        assert_eq!(config.rules[1].pattern, "Fotoplan");
        assert_eq!(config.extensions.len(), 6);
        assert_eq!(
            config.exclude_markers,
            vec!["node_modules", ".next", ".git"]
        );
    }

    #[test]
    fn test_with_root() {
        let config = RebrandConfig::with_root("/srv/site");
        assert_eq!(config.root, PathBuf::from("/srv/site"));
        assert_eq!(config.rules, default_rules());
    }

    #[test]
    fn test_extensions_normalized() {
        let config = RebrandConfig::default().extensions(vec![
            "md".to_string(),
            ".txt".to_string(),
            " ".to_string(),
        ]);
        assert_eq!(config.extensions, vec![".md", ".txt"]);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let config = RebrandConfig::default()
            .rules(Vec::new())
            .extensions(Vec::new())
            .exclude_markers(vec!["".to_string()]);
        assert_eq!(config, RebrandConfig::default());
    }

    #[test]
    fn test_rules_override() {
        let config =
            RebrandConfig::default().rules(vec![ReplacementRule::new("Acme", "Globex")]);
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].replacement, "Globex");
    }

    #[test]
    fn test_exclude_override() {
        let config = RebrandConfig::default().exclude_markers(vec!["dist".to_string()]);
        assert_eq!(config.exclude_markers, vec!["dist"]);
    }
}
