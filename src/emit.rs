//! Manifest emission for the external generator.
//!
//! The generator consumes a single `site.json` — the validated configuration
//! serialized with its wire keys (`basePath`, `socialLinks`). Emission
//! always re-validates first: an invalid configuration is never written, so
//! a stale-but-valid manifest on disk is never replaced by a broken one.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::{ConfigError, SiteConfig};

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Render the manifest JSON for a validated configuration.
pub fn render(config: &SiteConfig) -> Result<String, EmitError> {
    config.validate()?;
    let mut json = serde_json::to_string_pretty(config)?;
    json.push('\n');
    Ok(json)
}

/// Validate and write the `site.json` manifest.
pub fn write_manifest(config: &SiteConfig, path: &Path) -> Result<(), EmitError> {
    let json = render(config)?;
    fs::write(path, json)?;
    Ok(())
}
