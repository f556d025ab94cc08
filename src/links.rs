//! Centralized link parsing for navigation targets.
//!
//! Every `link` field in the configuration (nav, sidebar, social) goes
//! through the same classification: a string is either a *site-absolute
//! path* (`/docs/spring`) or an *absolute external URL*
//! (`https://github.com/devlog`). Anything else — empty strings, relative
//! paths, non-http schemes — is a configuration error.
//!
//! ## Routes
//!
//! Internal links are compared against the docs content tree by *route*: the
//! path with any `#fragment`/`?query` suffix, `.html` extension, and
//! trailing slash removed. `/docs/spring/`, `/docs/spring.html`, and
//! `/docs/spring#setup` all resolve to the route `/docs/spring`. The site
//! root keeps its single slash.
//!
//! ## Hrefs
//!
//! The generator serves the site under `basePath`, so the final URL of an
//! internal link is the base path joined with the site-absolute path:
//! `/development-log/` + `/docs/spring` → `/development-log/docs/spring`.

use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,
    #[error("'{0}' is neither a site-absolute path nor an absolute URL")]
    Relative(String),
    #[error("unsupported scheme '{scheme}' in '{link}' (only http and https)")]
    UnsupportedScheme { scheme: String, link: String },
    #[error("malformed URL '{link}': {source}")]
    Malformed {
        link: String,
        source: url::ParseError,
    },
}

/// A classified navigation target.
#[derive(Debug, Clone, PartialEq)]
pub enum Link {
    /// Site-absolute path, leading `/` included (e.g. `/docs/spring`).
    Internal(String),
    /// Absolute http(s) URL.
    External(Url),
}

impl Link {
    /// Classify a raw `link` string.
    ///
    /// - `"/docs/spring"` → `Internal`
    /// - `"/"` → `Internal` (site root)
    /// - `"https://github.com/devlog"` → `External`
    /// - `""` → `LinkError::Empty`
    /// - `"docs/spring"` → `LinkError::Relative`
    /// - `"ftp://host/file"` → `LinkError::UnsupportedScheme`
    pub fn parse(raw: &str) -> Result<Link, LinkError> {
        if raw.is_empty() {
            return Err(LinkError::Empty);
        }
        if raw.starts_with('/') {
            return Ok(Link::Internal(raw.to_string()));
        }
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Link::External(url)),
            Ok(url) => Err(LinkError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                link: raw.to_string(),
            }),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Err(LinkError::Relative(raw.to_string()))
            }
            Err(source) => Err(LinkError::Malformed {
                link: raw.to_string(),
                source,
            }),
        }
    }

    /// The route an internal link resolves against, `None` for external links.
    pub fn route(&self) -> Option<String> {
        match self {
            Link::Internal(path) => Some(route(path)),
            Link::External(_) => None,
        }
    }
}

/// Normalize a site-absolute path to its page route.
///
/// Strips `#fragment` and `?query` suffixes, a `.html` extension, and any
/// trailing slash. The root path stays `/`.
///
/// - `"/docs/spring/"` → `"/docs/spring"`
/// - `"/docs/spring.html"` → `"/docs/spring"`
/// - `"/docs/spring#setup"` → `"/docs/spring"`
/// - `"/"` → `"/"`
pub fn route(path: &str) -> String {
    let path = path
        .split(['#', '?'])
        .next()
        .unwrap_or(path);
    let path = path.strip_suffix(".html").unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Join a site-absolute path under the site's base path.
///
/// - `href("/development-log/", "/docs/spring")` → `"/development-log/docs/spring"`
/// - `href("/development-log/", "/")` → `"/development-log/"`
/// - `href("/", "/docs/spring")` → `"/docs/spring"`
pub fn href(base_path: &str, path: &str) -> String {
    format!("{}{}", base_path.trim_end_matches('/'), path)
}
