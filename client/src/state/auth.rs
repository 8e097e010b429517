//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The app root provides it as an
//! `RwSignal<AuthState>` context and resolves it once from `/api/auth/me`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication status as last reported by `/api/auth/me`.
///
/// Starts `Pending`. The bootstrap lookup resolves it exactly once to either
/// `Authenticated` or `Unauthenticated`; logout moves it to `Unauthenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Pending,
    Authenticated(User),
    Unauthenticated,
}

impl AuthState {
    /// Map the current-user lookup onto a resolved state.
    #[must_use]
    pub fn from_session_user(user: Option<User>) -> Self {
        match user {
            Some(user) => Self::Authenticated(user),
            None => Self::Unauthenticated,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Pending | Self::Unauthenticated => None,
        }
    }

    /// Display name for the sidebar footer, empty when signed out.
    #[must_use]
    pub fn username(&self) -> &str {
        self.user().map_or("", |u| u.username.as_str())
    }
}
