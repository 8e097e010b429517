//! Route table as plain data.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` declares the Leptos routes; this module names every route, its
//! guard policy, and its document title so the table can be checked without a
//! renderer. The guard looks up the current location here, and the server
//! checks at startup that every `table()` pattern is routed by the app.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Unauthenticated landing page. Guarded routes redirect here.
pub const LANDING_PATH: &str = "/";
/// Authenticated home. The landing page redirects here once signed in.
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const CREATE_BOT_PATH: &str = "/create-bot";
pub const PROFILE_PATH: &str = "/profile";
/// Prefix of the per-bot detail route `/bot/:id`.
pub const BOT_PATH_PREFIX: &str = "/bot/";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Rendered regardless of auth state.
    Public,
    /// Requires a signed-in user.
    AuthRequired,
    /// Only for signed-out visitors; signed-in users are sent to the dashboard.
    RedirectIfAuthenticated,
}

/// Sections under `/docs/*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocsSection {
    Overview,
    Ai,
    Trading,
    Security,
    Architecture,
}

impl DocsSection {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Ai, Self::Trading, Self::Security, Self::Architecture];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Ai => "ai",
            Self::Trading => "trading",
            Self::Security => "security",
            Self::Architecture => "architecture",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ai => "AI",
            Self::Trading => "Trading",
            Self::Security => "Security",
            Self::Architecture => "Architecture",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }

    #[must_use]
    pub fn path(self) -> String {
        format!("/docs/{}", self.slug())
    }
}

/// Every page the router can select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Dashboard,
    CreateBot,
    BotDetail { id: String },
    Profile,
    Docs(DocsSection),
    Terms,
    Privacy,
    NotFound,
}

impl AppRoute {
    /// Match a location path against the route table.
    ///
    /// Matching is exact and case-sensitive. `/bot/:id` captures one non-empty
    /// segment. Anything else is `NotFound`.
    #[must_use]
    pub fn match_path(path: &str) -> Self {
        match path {
            LANDING_PATH => return Self::Landing,
            DASHBOARD_PATH => return Self::Dashboard,
            CREATE_BOT_PATH => return Self::CreateBot,
            PROFILE_PATH => return Self::Profile,
            "/terms" => return Self::Terms,
            "/privacy" => return Self::Privacy,
            _ => {}
        }

        if let Some(id) = path.strip_prefix(BOT_PATH_PREFIX) {
            if !id.is_empty() && !id.contains('/') {
                return Self::BotDetail { id: id.to_owned() };
            }
        }

        path.strip_prefix("/docs/")
            .and_then(DocsSection::from_slug)
            .map_or(Self::NotFound, Self::Docs)
    }

    #[must_use]
    pub fn policy(&self) -> RoutePolicy {
        match self {
            Self::Landing => RoutePolicy::RedirectIfAuthenticated,
            Self::Dashboard | Self::CreateBot | Self::BotDetail { .. } | Self::Profile => RoutePolicy::AuthRequired,
            Self::Docs(_) | Self::Terms | Self::Privacy | Self::NotFound => RoutePolicy::Public,
        }
    }

    /// Route for the path the router resolved.
    ///
    /// Same as `match_path`, except one trailing slash is tolerated the way
    /// the Leptos router tolerates it, so `/dashboard/` keeps its guard.
    #[must_use]
    pub fn for_location(pathname: &str) -> Self {
        let path = match pathname.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => pathname,
        };
        Self::match_path(path)
    }

    /// One entry per routable pattern, in table order. `BotDetail` carries the
    /// `:id` placeholder.
    #[must_use]
    pub fn table() -> Vec<Self> {
        let mut routes = vec![
            Self::Landing,
            Self::Dashboard,
            Self::CreateBot,
            Self::BotDetail { id: ":id".to_owned() },
            Self::Profile,
        ];
        routes.extend(DocsSection::ALL.map(Self::Docs));
        routes.extend([Self::Terms, Self::Privacy]);
        routes
    }

    /// Router pattern, with `:id` for the bot detail parameter.
    #[must_use]
    pub fn pattern(&self) -> Option<String> {
        match self {
            Self::BotDetail { .. } => Some(bot_path(":id")),
            other => other.path(),
        }
    }

    /// Canonical path, or `None` for the catch-all.
    #[must_use]
    pub fn path(&self) -> Option<String> {
        match self {
            Self::Landing => Some(LANDING_PATH.to_owned()),
            Self::Dashboard => Some(DASHBOARD_PATH.to_owned()),
            Self::CreateBot => Some(CREATE_BOT_PATH.to_owned()),
            Self::BotDetail { id } => Some(bot_path(id)),
            Self::Profile => Some(PROFILE_PATH.to_owned()),
            Self::Docs(section) => Some(section.path()),
            Self::Terms => Some("/terms".to_owned()),
            Self::Privacy => Some("/privacy".to_owned()),
            Self::NotFound => None,
        }
    }

    /// Document title suffix shown in the browser tab.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::CreateBot => "Create Agent",
            Self::BotDetail { .. } => "Agent",
            Self::Profile => "Profile",
            Self::Docs(section) => section.title(),
            Self::Terms => "Terms of Service",
            Self::Privacy => "Privacy Policy",
            Self::NotFound => "Not Found",
        }
    }
}

/// Detail path for a bot id.
#[must_use]
pub fn bot_path(id: &str) -> String {
    format!("{BOT_PATH_PREFIX}{id}")
}
