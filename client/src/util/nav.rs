//! Sidebar navigation state derived from the current location.
//!
//! SYSTEM CONTEXT
//! ==============
//! The "My Agent" link points at a bot detail page or the dashboard depending
//! on what the user owns, so which tab is highlighted is computed from
//! `(path, query)` alone and never from the link target.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::BotSummary;
use crate::routes::{BOT_PATH_PREFIX, CREATE_BOT_PATH, DASHBOARD_PATH, PROFILE_PATH, bot_path};

/// Query parameter on `/dashboard` that selects a tab.
pub const TAB_PARAM: &str = "tab";

/// Sidebar entries that can be highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    MyAgent,
    SubAgents,
    Activity,
}

impl NavTarget {
    pub const ALL: [Self; 3] = [Self::MyAgent, Self::SubAgents, Self::Activity];

    /// Stable identifier, also the `tab` query value for dashboard tabs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::MyAgent => "my-agent",
            Self::SubAgents => "sub-agents",
            Self::Activity => "activity",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MyAgent => "My Agent",
            Self::SubAgents => "Sub Agent",
            Self::Activity => "Activity",
        }
    }

    /// Map a dashboard `tab` value. Unknown or missing values fall back to
    /// `MyAgent`.
    #[must_use]
    pub fn from_tab_param(value: Option<&str>) -> Self {
        match value {
            Some("sub-agents") => Self::SubAgents,
            Some("activity") => Self::Activity,
            _ => Self::MyAgent,
        }
    }
}

/// Resolve which sidebar entry is active. `None` means nothing is highlighted.
///
/// First match wins:
/// 1. `/bot/*` and `/create-bot` belong to My Agent.
/// 2. `/profile` highlights nothing.
/// 3. Otherwise the `tab` query parameter decides.
#[must_use]
pub fn resolve_active_tab(path: &str, query: &str) -> Option<NavTarget> {
    if path.starts_with(BOT_PATH_PREFIX) || path == CREATE_BOT_PATH {
        return Some(NavTarget::MyAgent);
    }
    if path == PROFILE_PATH {
        return None;
    }
    let tab = query_param(query, TAB_PARAM);
    Some(NavTarget::from_tab_param(tab.as_deref()))
}

/// Destination of the "My Agent" link: the first owned bot in fetch order, or
/// the dashboard when the user owns none.
#[must_use]
pub fn resolve_primary_href(owned: &[BotSummary]) -> String {
    owned
        .first()
        .map_or_else(|| DASHBOARD_PATH.to_owned(), |bot| bot_path(&bot.id))
}

/// One rendered sidebar / bottom-nav entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItem {
    pub target: NavTarget,
    pub href: String,
}

impl SidebarItem {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.target.label()
    }

    /// `data-testid` for the desktop sidebar: `sidebar-` plus the label in
    /// lower case with its first space replaced by `-`.
    #[must_use]
    pub fn sidebar_test_id(&self) -> String {
        format!("sidebar-{}", self.label().to_lowercase().replacen(' ', "-", 1))
    }

    /// `data-testid` for the mobile bottom nav.
    #[must_use]
    pub fn bottom_nav_test_id(&self) -> String {
        format!("nav-{}", self.target.id())
    }
}

/// Build the three navigation entries for a given "My Agent" destination.
#[must_use]
pub fn sidebar_items(primary_href: &str) -> [SidebarItem; 3] {
    NavTarget::ALL.map(|target| {
        let href = match target {
            NavTarget::MyAgent => primary_href.to_owned(),
            NavTarget::SubAgents | NavTarget::Activity => dashboard_tab_href(target),
        };
        SidebarItem { target, href }
    })
}

/// `/dashboard?tab=<id>` for a dashboard tab.
#[must_use]
pub fn dashboard_tab_href(target: NavTarget) -> String {
    format!("{DASHBOARD_PATH}?{TAB_PARAM}={}", target.id())
}

/// First value of `key` in a URL query string, form-decoded.
///
/// A leading `?` is ignored. Keys without `=` yield an empty value.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
