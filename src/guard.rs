//! Access control for protected views.
//!
//! A view wraps itself in [`check_access`] before rendering: `Pending` means
//! the session is still restoring (show a neutral placeholder, don't
//! redirect), `SignInRequired` sends the user to the login view, `Denied`
//! sends them to the unauthorized/home view, and `Granted` renders the
//! protected children. The decision is recomputed on every call, never
//! cached.

use crate::session::{Role, Session};

/// The outcome of a route-guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session restoration hasn't finished; suspend, do not redirect.
    Pending,
    /// Render the protected view.
    Granted,
    /// No identity; redirect to the login view.
    SignInRequired,
    /// Identity present but the role doesn't match; redirect away.
    Denied,
}

/// Gate a view on the session state and an optional required role.
pub fn check_access(session: &Session, required_role: Option<Role>) -> Access {
    if session.is_loading() {
        return Access::Pending;
    }

    match session.current_identity() {
        None => Access::SignInRequired,
        Some(identity) => match required_role {
            Some(role) if identity.role != role => Access::Denied,
            _ => Access::Granted,
        },
    }
}
