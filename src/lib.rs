//! # devlog-site
//!
//! Configuration builder for the Development Log documentation site. The
//! site itself is rendered by an external static-site generator; this crate
//! owns the one input that generator trusts blindly: the site configuration
//! with its metadata, header navigation, sidebar tree, and social links.
//!
//! # Architecture: Load, Check, Emit
//!
//! The configuration moves through three small steps, the last producing a
//! JSON manifest the generator consumes:
//!
//! ```text
//! 1. Load    site.toml  →  SiteConfig   (stock defaults + sparse overlay)
//! 2. Check   SiteConfig (+ docs tree)   (invariants, link resolution)
//! 3. Emit    SiteConfig →  site.json    (manifest for the generator)
//! ```
//!
//! Checking is where the value is: the generator renders whatever nav it is
//! given, so a duplicated nav link, an empty sidebar group, or a dead
//! internal link becomes a broken site. All of these fail here, at build
//! time, before the generator ever runs.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, defaults merging, invariant validation |
//! | [`theme`] | Navigation, sidebar, and social-link types — the `theme` section |
//! | [`links`] | Link classification: site-absolute paths vs. absolute URLs, routes, hrefs |
//! | [`resolve`] | Walks the docs content tree and checks every internal link resolves |
//! | [`emit`] | Writes the validated `site.json` manifest |
//! | [`output`] | CLI output formatting — indexed display of nav, sidebar, and social links |
//!
//! # Design Decisions
//!
//! ## One Spelling for Config and Wire
//!
//! Keys are camelCase (`basePath`, `socialLinks`) in both `site.toml` and
//! the emitted `site.json`. One serde model serves both representations, and
//! anyone diffing the config file against the manifest sees the same names.
//!
//! ## Closed Icon Set
//!
//! Social icons are a closed enum of providers the generator ships icons
//! for. An unknown provider name is a typo and fails at parse time instead
//! of rendering a blank icon.
//!
//! ## Fail-Fast Validation
//!
//! Configuration errors are build-time errors. Loading always ends in
//! validation, emission re-validates before writing, and the CLI exits
//! nonzero on the first invariant violation. There is no lenient mode.
//!
//! ## No Environment Overrides
//!
//! `basePath` and `locale` are file configuration only. The sparse
//! `site.toml` overlay covers per-site variation; an environment-variable
//! layer would add a second source of truth for values that never change
//! between invocations of the same site build.

pub mod config;
pub mod emit;
pub mod links;
pub mod output;
pub mod resolve;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
