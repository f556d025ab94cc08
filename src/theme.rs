//! Theme-level configuration types: navigation, sidebar, and social links.
//!
//! These types make up the `theme` section of the site configuration and are
//! serialized verbatim into the `site.json` manifest the generator consumes.
//! Keys are camelCase on the wire (`socialLinks`), matching the generator's
//! expectations, and the same spelling is used in `site.toml` so one model
//! serves both representations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single navigation link: a display label and its target.
///
/// The target is either a site-absolute path (`/docs/spring`) or an absolute
/// external URL. Used both for top-level header navigation and for the
/// entries inside a [`SidebarGroup`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Display label shown in the header or sidebar.
    pub text: String,
    /// Site-absolute path (`/docs/spring`) or absolute URL.
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A labeled cluster of links shown in the side navigation panel.
///
/// A declared group must contain at least one item; an empty group would
/// render as a bare heading with nothing under it, and validation rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Group heading shown above its items.
    pub text: String,
    /// Links in display order.
    pub items: Vec<NavItem>,
}

/// Known social-link providers.
///
/// A closed set rather than a free string: the generator only ships icons for
/// these providers, so an unknown name is a configuration typo and fails at
/// parse time. Lowercase on the wire (`"github"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    GitHub,
    Twitter,
    X,
    Discord,
    Facebook,
    Instagram,
    LinkedIn,
    Mastodon,
    Slack,
    YouTube,
}

impl SocialIcon {
    /// Wire name of the provider, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            SocialIcon::GitHub => "github",
            SocialIcon::Twitter => "twitter",
            SocialIcon::X => "x",
            SocialIcon::Discord => "discord",
            SocialIcon::Facebook => "facebook",
            SocialIcon::Instagram => "instagram",
            SocialIcon::LinkedIn => "linkedin",
            SocialIcon::Mastodon => "mastodon",
            SocialIcon::Slack => "slack",
            SocialIcon::YouTube => "youtube",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An icon + URL pair linking to an external profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Provider icon to render.
    pub icon: SocialIcon,
    /// Absolute URL of the profile.
    pub link: String,
}

/// The `theme` section: everything the generator's navigation UI renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top-level header navigation, in display order.
    pub nav: Vec<NavItem>,
    /// Sidebar groups, in display order.
    pub sidebar: Vec<SidebarGroup>,
    /// Social profile links shown in the header.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            nav: vec![
                NavItem::new("Home", "/"),
                NavItem::new("Backend", "/docs/spring"),
            ],
            sidebar: vec![
                SidebarGroup {
                    text: "Backend".to_string(),
                    items: vec![
                        NavItem::new("Spring", "/docs/spring"),
                        NavItem::new("JPA", "/docs/jpa"),
                    ],
                },
                SidebarGroup {
                    text: "Database".to_string(),
                    items: vec![
                        NavItem::new("MySQL", "/docs/mysql"),
                        NavItem::new("Redis", "/docs/redis"),
                    ],
                },
            ],
            social_links: vec![SocialLink {
                icon: SocialIcon::GitHub,
                link: "https://github.com/devlog".to_string(),
            }],
        }
    }
}
