//! End-to-end pipeline tests: load → check → resolve → emit.
//!
//! Exercises the crate the way the build wrapper does — a site directory
//! with a `site.toml`, a docs content tree, and a manifest consumed on the
//! other side — without going through the CLI binary.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use devlog_site::config::{self, ConfigError, SiteConfig};
use devlog_site::emit;
use devlog_site::resolve::{self, ResolveError};

/// Build a directory tree from `(path, content)` pairs.
fn tree(pages: &[(&str, &str)]) -> TempDir {
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

fn load(dir: &Path) -> Result<SiteConfig, ConfigError> {
    config::load_config(dir)
}

#[test]
fn stock_config_flows_through_the_whole_pipeline() {
    // gen-config output is a working site.toml
    let site = tree(&[("site.toml", config::stock_config_toml())]);
    let config = load(site.path()).unwrap();
    assert_eq!(config, SiteConfig::default());

    // the default docs tree satisfies link resolution
    let docs = tree(&[
        ("index.md", "# Development Log"),
        ("docs/spring.md", "# Spring"),
        ("docs/jpa.md", "# JPA"),
        ("docs/mysql.md", "# MySQL"),
        ("docs/redis.md", "# Redis"),
    ]);
    let index = resolve::index_docs(docs.path()).unwrap();
    let warnings = resolve::resolve_links(&config, &index).unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    // emitted manifest carries the wire shape the generator expects
    let out = site.path().join("site.json");
    emit::write_manifest(&config, &out).unwrap();
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(manifest["basePath"], "/development-log/");
    assert_eq!(manifest["locale"], "ko-KR");
    assert_eq!(manifest["title"], "Development Log");
    assert_eq!(manifest["theme"]["nav"][0]["text"], "Home");
    assert_eq!(manifest["theme"]["nav"][0]["link"], "/");
    assert_eq!(manifest["theme"]["socialLinks"][0]["icon"], "github");
}

#[test]
fn sparse_overlay_site_builds_and_emits() {
    let site = tree(&[(
        "site.toml",
        r#"
basePath = "/notes/"
locale = "en-US"
title = "Field Notes"

[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar]]
text = "Rust"

[[theme.sidebar.items]]
text = "Ownership"
link = "/rust/ownership"
"#,
    )]);
    let config = load(site.path()).unwrap();
    assert_eq!(config.base_path, "/notes/");
    assert_eq!(config.theme.nav.len(), 1);
    // description not overridden — default preserved
    assert_eq!(
        config.description,
        SiteConfig::default().description
    );

    let docs = tree(&[
        ("index.md", "# Field Notes"),
        ("rust/ownership.md", "# Ownership"),
    ]);
    let index = resolve::index_docs(docs.path()).unwrap();
    assert!(resolve::resolve_links(&config, &index).is_ok());

    let out = site.path().join("site.json");
    emit::write_manifest(&config, &out).unwrap();
    let back: SiteConfig =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(back, config);
}

#[test]
fn dead_link_fails_the_check_step() {
    let site = tree(&[(
        "site.toml",
        r#"
[[theme.nav]]
text = "Home"
link = "/"

[[theme.sidebar]]
text = "Backend"

[[theme.sidebar.items]]
text = "Spring"
link = "/docs/spring"
"#,
    )]);
    let config = load(site.path()).unwrap();

    // docs tree is missing /docs/spring
    let docs = tree(&[("index.md", "# Development Log")]);
    let index = resolve::index_docs(docs.path()).unwrap();
    let err = resolve::resolve_links(&config, &index).unwrap_err();
    match err {
        ResolveError::Unresolved(dead) => {
            assert_eq!(dead.len(), 1);
            assert_eq!(dead[0].link, "/docs/spring");
        }
        other => panic!("expected unresolved links, got {other:?}"),
    }
}

#[test]
fn invalid_overlay_fails_at_load() {
    let site = tree(&[(
        "site.toml",
        r#"
[[theme.nav]]
text = "Backend"
link = "/docs/spring"

[[theme.nav]]
text = "Spring"
link = "/docs/spring"
"#,
    )]);
    let err = load(site.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("duplicate nav link"));
}

#[test]
fn unknown_provider_fails_at_load() {
    let site = tree(&[(
        "site.toml",
        r#"
[[theme.socialLinks]]
icon = "gitlab"
link = "https://gitlab.com/devlog"
"#,
    )]);
    let err = load(site.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn missing_site_toml_builds_the_stock_site() {
    let site = TempDir::new().unwrap();
    let config = load(site.path()).unwrap();
    assert_eq!(config, SiteConfig::default());

    let rendered = emit::render(&config).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(manifest["theme"]["sidebar"][0]["text"], "Backend");
}
