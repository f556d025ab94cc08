//! Internal link resolution against the docs content tree.
//!
//! The configuration promises that internal links are resolvable relative to
//! the base path; this module makes that promise checkable before the
//! generator runs. It walks the docs content directory, collects the set of
//! page routes, and verifies every internal nav/sidebar link lands on one.
//!
//! ## Route Mapping
//!
//! Markdown files map to routes the same way the generator maps them to
//! output pages:
//!
//! ```text
//! docs/                       # Content root
//! ├── index.md                # → /
//! ├── docs/
//! │   ├── spring.md           # → /docs/spring
//! │   ├── jpa.md              # → /docs/jpa
//! │   └── spring/
//! │       └── index.md        # → /docs/spring (directory form)
//! └── about.md                # → /about
//! ```
//!
//! ## Failure Model
//!
//! Dead links are collected and reported together — a check run surfaces
//! every unresolved link at once rather than stopping at the first. Sidebar
//! items whose label differs from the target page's own `# ` title produce
//! warnings, not errors; the page title is display metadata, not an
//! invariant.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::links::Link;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("docs directory not found: {0}")]
    MissingDocsDir(PathBuf),
    #[error("{} unresolved internal link(s):\n{}", .0.len(), format_dead_links(.0))]
    Unresolved(Vec<DeadLink>),
}

/// An internal link that does not map to any page route.
#[derive(Debug, Clone)]
pub struct DeadLink {
    /// Where the link was declared: `nav` or `sidebar '<group>'`.
    pub context: String,
    /// Display label of the offending entry.
    pub text: String,
    /// The raw link value.
    pub link: String,
}

fn format_dead_links(dead: &[DeadLink]) -> String {
    let mut out = String::new();
    for d in dead {
        let _ = writeln!(out, "  {} '{}' → {}", d.context, d.text, d.link);
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// A page discovered in the docs tree.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// Title from the first `# ` heading line, if the page has one.
    pub title: Option<String>,
    /// Source file, relative to the docs root.
    pub source: PathBuf,
}

/// Route index of the docs content tree.
#[derive(Debug, Default)]
pub struct DocsIndex {
    pages: BTreeMap<String, PageInfo>,
}

impl DocsIndex {
    pub fn contains(&self, route: &str) -> bool {
        self.pages.contains_key(route)
    }

    pub fn title(&self, route: &str) -> Option<&str> {
        self.pages.get(route).and_then(|p| p.title.as_deref())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Routes in sorted order.
    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

/// Walk a docs content directory and index its markdown pages by route.
pub fn index_docs(dir: &Path) -> Result<DocsIndex, ResolveError> {
    if !dir.is_dir() {
        return Err(ResolveError::MissingDocsDir(dir.to_path_buf()));
    }

    let mut pages = BTreeMap::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }
        let rel = path
            .strip_prefix(dir)
            .expect("walked entries live under the walked root");
        let route = route_of(rel);
        let title = extract_title(path)?;
        pages.insert(
            route,
            PageInfo {
                title,
                source: rel.to_path_buf(),
            },
        );
    }

    Ok(DocsIndex { pages })
}

/// Route of a markdown file relative to the docs root.
///
/// `index.md` maps to its directory's route; any other file maps to its stem.
fn route_of(rel: &Path) -> String {
    let mut parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let file = parts.pop().unwrap_or_default();
    let stem = file.strip_suffix(".md").unwrap_or(&file);
    if stem != "index" {
        parts.push(stem.to_string());
    }
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Title from the first `# ` heading line, if any.
fn extract_title(path: &Path) -> Result<Option<String>, ResolveError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line[2..].trim().to_string()))
}

/// Check every internal nav/sidebar link against the docs index.
///
/// Returns label-mismatch warnings on success; fails with
/// [`ResolveError::Unresolved`] listing every dead link. Link
/// well-formedness is owned by config validation — unparseable links are
/// skipped here.
pub fn resolve_links(config: &SiteConfig, docs: &DocsIndex) -> Result<Vec<String>, ResolveError> {
    let mut dead = Vec::new();
    let mut warnings = Vec::new();

    for item in &config.theme.nav {
        if let Some(route) = parsed_route(&item.link) {
            if !docs.contains(&route) {
                dead.push(DeadLink {
                    context: "nav".to_string(),
                    text: item.text.clone(),
                    link: item.link.clone(),
                });
            }
        }
    }

    for group in &config.theme.sidebar {
        let context = format!("sidebar '{}'", group.text);
        for item in &group.items {
            let Some(route) = parsed_route(&item.link) else {
                continue;
            };
            if !docs.contains(&route) {
                dead.push(DeadLink {
                    context: context.clone(),
                    text: item.text.clone(),
                    link: item.link.clone(),
                });
            } else if let Some(title) = docs.title(&route) {
                if title != item.text {
                    warnings.push(format!(
                        "{context} item '{}': page title is '{title}'",
                        item.text
                    ));
                }
            }
        }
    }

    if dead.is_empty() {
        Ok(warnings)
    } else {
        Err(ResolveError::Unresolved(dead))
    }
}

fn parsed_route(link: &str) -> Option<String> {
    Link::parse(link).ok().and_then(|l| l.route())
}
