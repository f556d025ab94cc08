//! Shared test utilities for the devlog-site test suite.
//!
//! Provides fixture builders for site directories and docs content trees,
//! plus lookup helpers and shape assertions over the configuration.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = default_config();
//! assert_sidebar_shape(&config, &[
//!     ("Backend", &["Spring", "JPA"]),
//!     ("Database", &["MySQL", "Redis"]),
//! ]);
//!
//! let docs = default_docs_tree();
//! let index = crate::resolve::index_docs(docs.path()).unwrap();
//! assert!(index.contains("/docs/spring"));
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::theme::SidebarGroup;

// =========================================================================
// Fixture setup
// =========================================================================

/// The stock configuration — shorthand that reads better in assertions.
pub fn default_config() -> SiteConfig {
    SiteConfig::default()
}

/// Write a `site.toml` with the given content into a site directory.
pub fn write_site_toml(dir: &Path, content: &str) {
    fs::write(dir.join("site.toml"), content).unwrap();
}

/// Build a docs content tree in a temp directory from `(path, content)`
/// pairs. Parent directories are created as needed.
pub fn docs_tree(pages: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (path, content) in pages {
        let full = tmp.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
    tmp
}

/// A docs tree matching the stock configuration: every default nav and
/// sidebar link resolves, and page titles match the sidebar labels.
pub fn default_docs_tree() -> TempDir {
    docs_tree(&[
        ("index.md", "# Development Log"),
        ("docs/spring.md", "# Spring"),
        ("docs/jpa.md", "# JPA"),
        ("docs/mysql.md", "# MySQL"),
        ("docs/redis.md", "# Redis"),
    ])
}

// =========================================================================
// Config lookups — panics with a clear message on miss
// =========================================================================

/// Find a sidebar group by label. Panics if not found.
pub fn find_group<'a>(config: &'a SiteConfig, text: &str) -> &'a SidebarGroup {
    config
        .theme
        .sidebar
        .iter()
        .find(|g| g.text == text)
        .unwrap_or_else(|| {
            let labels: Vec<&str> = config
                .theme
                .sidebar
                .iter()
                .map(|g| g.text.as_str())
                .collect();
            panic!("sidebar group '{text}' not found. Available: {labels:?}")
        })
}

/// All nav links in display order.
pub fn nav_links(config: &SiteConfig) -> Vec<&str> {
    config
        .theme
        .nav
        .iter()
        .map(|n| n.link.as_str())
        .collect()
}

// =========================================================================
// Shape assertions
// =========================================================================

/// Assert that the sidebar matches an expected shape.
///
/// Each entry is `(group label, item labels)`.
///
/// ```rust
/// assert_sidebar_shape(&config, &[
///     ("Backend", &["Spring", "JPA"]),
///     ("Database", &["MySQL", "Redis"]),
/// ]);
/// ```
pub fn assert_sidebar_shape(config: &SiteConfig, expected: &[(&str, &[&str])]) {
    let actual: Vec<&str> = config
        .theme
        .sidebar
        .iter()
        .map(|g| g.text.as_str())
        .collect();
    let expected_labels: Vec<&str> = expected.iter().map(|(t, _)| *t).collect();
    assert_eq!(actual, expected_labels, "sidebar group labels mismatch");

    for (label, items) in expected {
        let group = find_group(config, label);
        let actual_items: Vec<&str> = group.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(
            actual_items,
            items.to_vec(),
            "items of sidebar group '{label}' mismatch"
        );
    }
}
