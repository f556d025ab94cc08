//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml`. Configuration is
//! layered: stock defaults are overridden by an optional `site.toml` in the
//! site directory, and override files are sparse — they only need the keys
//! they change. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! Keys are spelled exactly as they appear in the emitted `site.json`
//! manifest (camelCase), so the config file and the wire format read the
//! same.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! basePath = "/development-log/"   # Prefix the site is served under
//! locale = "ko-KR"                 # lang or lang-REGION tag
//! title = "Development Log"
//! description = "Notes and study records from daily development work"
//!
//! [[theme.nav]]                    # Header navigation, in order
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]                # Sidebar groups, in order
//! text = "Backend"
//!
//! [[theme.sidebar.items]]
//! text = "Spring"
//! link = "/docs/spring"
//!
//! [[theme.socialLinks]]            # icon is a known provider name
//! icon = "github"
//! link = "https://github.com/devlog"
//! ```
//!
//! ## Validation
//!
//! Loading always ends in [`SiteConfig::validate`], which enforces the
//! navigation invariants:
//!
//! - every `link` is a site-absolute path or an absolute http(s) URL
//! - nav links are unique across the nav sequence
//! - declared sidebar groups have at least one item
//! - social links are absolute URLs
//! - `basePath` begins and ends with `/`; `locale` is a `lang` or
//!   `lang-REGION` tag; `title` is non-empty
//!
//! A config that fails any of these aborts the build — configuration errors
//! are build-time errors, not runtime conditions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::links::Link;
use crate::theme::{NavItem, ThemeConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The site configuration record consumed by the generator.
///
/// Constructed once at load time and treated as read-only afterwards. All
/// fields have stock defaults; `site.toml` overrides are sparse. Serialized
/// with camelCase keys (`basePath`) — the manifest wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Prefix the site is served under. Begins and ends with `/`.
    pub base_path: String,
    /// Site language as a `lang` or `lang-REGION` tag (e.g. `ko-KR`).
    pub locale: String,
    /// Site title shown in the header and the page `<title>`.
    pub title: String,
    /// Free-text site description for the page `<meta>`.
    pub description: String,
    /// Navigation, sidebar, and social links.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/development-log/".to_string(),
            locale: "ko-KR".to_string(),
            title: "Development Log".to_string(),
            description: "Notes and study records from daily development work".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate the navigation invariants.
    ///
    /// Every violation is a [`ConfigError::Validation`] naming the offending
    /// field or entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_path.starts_with('/') && self.base_path.ends_with('/')) {
            return Err(ConfigError::Validation(format!(
                "basePath must begin and end with '/': '{}'",
                self.base_path
            )));
        }
        if self.title.is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if !valid_locale(&self.locale) {
            return Err(ConfigError::Validation(format!(
                "locale must be a lang or lang-REGION tag (e.g. 'ko-KR'): '{}'",
                self.locale
            )));
        }

        let mut seen = BTreeSet::new();
        for item in &self.theme.nav {
            validate_item("nav", item)?;
            if !seen.insert(item.link.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate nav link: '{}'",
                    item.link
                )));
            }
        }

        for group in &self.theme.sidebar {
            if group.text.is_empty() {
                return Err(ConfigError::Validation(
                    "sidebar group with empty text".into(),
                ));
            }
            if group.items.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "sidebar group '{}' has no items",
                    group.text
                )));
            }
            let context = format!("sidebar '{}'", group.text);
            for item in &group.items {
                validate_item(&context, item)?;
            }
        }

        for social in &self.theme.social_links {
            match Link::parse(&social.link) {
                Ok(Link::External(_)) => {}
                Ok(Link::Internal(_)) => {
                    return Err(ConfigError::Validation(format!(
                        "social link for {} must be an absolute URL: '{}'",
                        social.icon, social.link
                    )));
                }
                Err(err) => {
                    return Err(ConfigError::Validation(format!(
                        "social link for {}: {}",
                        social.icon, err
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Validate a single nav/sidebar entry: non-empty label, parseable link.
fn validate_item(context: &str, item: &NavItem) -> Result<(), ConfigError> {
    if item.text.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{context} entry with empty text (link '{}')",
            item.link
        )));
    }
    Link::parse(&item.link).map_err(|err| {
        ConfigError::Validation(format!("{context} '{}': {}", item.text, err))
    })?;
    Ok(())
}

/// Check a `lang` or `lang-REGION` tag: 2-3 lowercase letters, optionally
/// followed by a 2-uppercase-letter region (`ko`, `ko-KR`).
fn valid_locale(tag: &str) -> bool {
    let mut parts = tag.split('-');
    let lang = parts.next().unwrap_or_default();
    if !((2..=3).contains(&lang.len()) && lang.bytes().all(|b| b.is_ascii_lowercase())) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(region) => {
            region.len() == 2
                && region.bytes().all(|b| b.is_ascii_uppercase())
                && parts.next().is_none()
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values — including arrays like `theme.nav` — replace base
///   values wholesale. Overriding one nav entry means restating the nav.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `site.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("site.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command. Parses back to [`SiteConfig::default`].
pub fn stock_config_toml() -> &'static str {
    r##"# Development Log site configuration
# ==================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Keys are spelled exactly as in the emitted site.json manifest.
# Unknown keys will cause an error.
#
# Arrays (theme.nav, theme.sidebar, theme.socialLinks) replace the defaults
# wholesale: to change one entry, restate the whole array.

# Prefix the site is served under. Must begin and end with '/'.
basePath = "/development-log/"

# Site language as a lang or lang-REGION tag.
locale = "ko-KR"

title = "Development Log"
description = "Notes and study records from daily development work"

# ---------------------------------------------------------------------------
# Header navigation
# ---------------------------------------------------------------------------
# Links are site-absolute paths (resolved under basePath) or absolute URLs.
# Nav links must be unique.

[[theme.nav]]
text = "Home"
link = "/"

[[theme.nav]]
text = "Backend"
link = "/docs/spring"

# ---------------------------------------------------------------------------
# Sidebar groups
# ---------------------------------------------------------------------------
# Each group needs at least one item.

[[theme.sidebar]]
text = "Backend"

[[theme.sidebar.items]]
text = "Spring"
link = "/docs/spring"

[[theme.sidebar.items]]
text = "JPA"
link = "/docs/jpa"

[[theme.sidebar]]
text = "Database"

[[theme.sidebar.items]]
text = "MySQL"
link = "/docs/mysql"

[[theme.sidebar.items]]
text = "Redis"
link = "/docs/redis"

# ---------------------------------------------------------------------------
# Social links
# ---------------------------------------------------------------------------
# icon: github, twitter, x, discord, facebook, instagram, linkedin,
#       mastodon, slack, youtube

[[theme.socialLinks]]
icon = "github"
link = "https://github.com/devlog"
"##
}
