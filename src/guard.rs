//! Route guarding — what the navigation layer may show or enter.
//!
//! Pure functions over a [`SessionSnapshot`]: the guard never mutates the
//! session, it only answers "can this route render" and "which links are
//! visible". Route names and link sets come from the application shell.

use crate::session::SessionSnapshot;

/// Access requirement declared by a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Always reachable (landing page).
    Public,
    /// Only reachable while signed out; the login page redirects
    /// authenticated users home.
    GuestOnly,
    /// Requires an authenticated session.
    Authenticated,
    /// Requires an authenticated session with the admin flag set.
    AdminOnly,
}

/// Decision for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the route.
    Granted,
    /// The initial session restore has not finished; hold rendering.
    Pending,
    /// Anonymous user on a protected route.
    RedirectToLogin,
    /// Authenticated user on a guest-only route.
    RedirectToHome,
    /// Authenticated but lacking the required role.
    Denied,
}

/// Evaluate a route policy against the current session.
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot, policy: RoutePolicy) -> RouteAccess {
    match policy {
        RoutePolicy::Public => RouteAccess::Granted,
        _ if snapshot.loading => RouteAccess::Pending,
        RoutePolicy::GuestOnly => {
            if snapshot.is_authenticated() {
                RouteAccess::RedirectToHome
            } else {
                RouteAccess::Granted
            }
        }
        RoutePolicy::Authenticated => {
            if snapshot.is_authenticated() {
                RouteAccess::Granted
            } else {
                RouteAccess::RedirectToLogin
            }
        }
        RoutePolicy::AdminOnly => match &snapshot.identity {
            Some(identity) if identity.is_admin => RouteAccess::Granted,
            Some(_) => RouteAccess::Denied,
            None => RouteAccess::RedirectToLogin,
        },
    }
}

/// A navigation link in the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const AUTHENTICATED_LINKS: [NavLink; 4] = [
    NavLink { label: "Dashboard", path: "/dashboard" },
    NavLink { label: "Upload", path: "/upload" },
    NavLink { label: "Library", path: "/library" },
    NavLink { label: "Profile", path: "/profile" },
];

const ADMIN_LINK: NavLink = NavLink { label: "Admin", path: "/admin" };

const GUEST_LINKS: [NavLink; 2] = [
    NavLink { label: "Sign in", path: "/auth" },
    NavLink { label: "Sign up", path: "/auth?mode=register" },
];

/// The navigation links visible for the current session.
///
/// Nothing but the brand link renders while the session is still loading.
#[must_use]
pub fn visible_nav(snapshot: &SessionSnapshot) -> Vec<NavLink> {
    if snapshot.loading {
        return Vec::new();
    }
    match &snapshot.identity {
        None => GUEST_LINKS.to_vec(),
        Some(identity) => {
            let mut links = AUTHENTICATED_LINKS.to_vec();
            if identity.is_admin {
                links.push(ADMIN_LINK);
            }
            links
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
