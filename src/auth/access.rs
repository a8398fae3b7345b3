// src/auth/access.rs
//! Role-based view selection. The only authorization there is.

use super::sessions::{Role, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewDecision {
    /// Serve the requested view.
    Allow,
    /// Signed out on `/`: show the landing page.
    Landing,
    Redirect(&'static str),
}

/// Where each role lands after signing in.
pub fn landing_for(_role: Role) -> &'static str {
    "/dashboard"
}

fn required_role(path: &str) -> Option<Role> {
    let under = |prefix: &str| path == prefix || path.starts_with(&format!("{prefix}/"));

    if under("/payments") || under("/reminders") || under("/autopay") {
        Some(Role::Renter)
    } else if under("/tenants") {
        Some(Role::Landlord)
    } else {
        None
    }
}

/// Decides what a request for `path` gets, given who is signed in.
///
/// `/login` and `/logout` are always allowed.
pub fn resolve_view(path: &str, user: Option<&User>) -> ViewDecision {
    if path == "/login" || path == "/logout" {
        return ViewDecision::Allow;
    }

    match (path, user) {
        ("/", None) => ViewDecision::Landing,
        ("/", Some(u)) => ViewDecision::Redirect(landing_for(u.role)),
        (_, None) => ViewDecision::Redirect("/"),
        (_, Some(u)) => match required_role(path) {
            Some(role) if role != u.role => ViewDecision::Redirect(landing_for(u.role)),
            _ => ViewDecision::Allow,
        },
    }
}
