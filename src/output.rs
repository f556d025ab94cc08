//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is information-centric: the primary display for every entry is its
//! label and the URL it will actually resolve to on the served site —
//! internal links are shown joined under `basePath`, external links as-is.
//! Raw config values stay in `site.toml`; the output shows what a visitor
//! gets.
//!
//! # Output Format
//!
//! ```text
//! Nav
//! 001 Home → /development-log/
//! 002 Backend → /development-log/docs/spring
//!
//! Sidebar
//! 001 Backend
//!     001 Spring → /development-log/docs/spring
//!     002 JPA → /development-log/docs/jpa
//!
//! Social
//! 001 github → https://github.com/devlog
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_show` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::config::SiteConfig;
use crate::links::{self, Link};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// The URL a link resolves to on the served site.
///
/// Internal links are joined under the base path; external links pass
/// through. Unparseable links pass through too — display never fails,
/// validation owns rejection.
fn display_target(base_path: &str, link: &str) -> String {
    match Link::parse(link) {
        Ok(Link::Internal(path)) => links::href(base_path, &path),
        _ => link.to_string(),
    }
}

/// Format the header navigation section.
pub fn format_nav(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Nav".to_string()];
    for (i, item) in config.theme.nav.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            item.text,
            display_target(&config.base_path, &item.link)
        ));
    }
    lines
}

/// Format the sidebar section: groups with indented items.
pub fn format_sidebar(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Sidebar".to_string()];
    for (gi, group) in config.theme.sidebar.iter().enumerate() {
        lines.push(format!("{} {}", format_index(gi + 1), group.text));
        for (ii, item) in group.items.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}",
                indent(1),
                format_index(ii + 1),
                item.text,
                display_target(&config.base_path, &item.link)
            ));
        }
    }
    lines
}

/// Format the social links section. Empty when no links are configured.
pub fn format_social(config: &SiteConfig) -> Vec<String> {
    if config.theme.social_links.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Social".to_string()];
    for (i, social) in config.theme.social_links.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            social.icon,
            social.link
        ));
    }
    lines
}

/// Format the site metadata header line.
pub fn format_site_line(config: &SiteConfig) -> String {
    format!(
        "{} ({}) served under {}",
        config.title, config.locale, config.base_path
    )
}

/// Print the full configuration display: metadata, nav, sidebar, social.
pub fn print_show(config: &SiteConfig) {
    println!("{}", format_site_line(config));
    println!();
    for line in format_nav(config) {
        println!("{line}");
    }
    println!();
    for line in format_sidebar(config) {
        println!("{line}");
    }
    let social = format_social(config);
    if !social.is_empty() {
        println!();
        for line in social {
            println!("{line}");
        }
    }
}
