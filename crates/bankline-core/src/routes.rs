//! Views and the navigation guard in front of them.
//!
//! The guard only mirrors whether a token is stored. It keeps signed-out users
//! away from screens that would fail anyway; the backend still decides what
//! any token may do.

use std::fmt;

use tracing::debug;

use crate::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Register,
    Dashboard,
    CreateAccount,
    Payment,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Login,
        View::Register,
        View::Dashboard,
        View::CreateAccount,
        View::Payment,
    ];

    /// Landing view after signing in
    pub const HOME: View = View::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/login",
            View::Register => "/register",
            View::Dashboard => "/dashboard",
            View::CreateAccount => "/create-account",
            View::Payment => "/payment",
        }
    }

    /// Resolve a path. The empty path redirects to the login view.
    pub fn from_path(path: &str) -> Option<View> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(View::Login);
        }
        Self::ALL.into_iter().find(|v| v.path() == trimmed)
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, View::Dashboard | View::CreateAccount | View::Payment)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Login => write!(f, "Login"),
            View::Register => write!(f, "Register"),
            View::Dashboard => write!(f, "Dashboard"),
            View::CreateAccount => write!(f, "Create Account"),
            View::Payment => write!(f, "Payment"),
        }
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Allowed(View),
    Redirected { from: View, to: View },
}

impl Navigation {
    /// The view that ends up displayed
    pub fn view(&self) -> View {
        match *self {
            Navigation::Allowed(view) => view,
            Navigation::Redirected { to, .. } => to,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Allowed(_))
    }
}

/// Allows entry to protected views only while signed in.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: Session,
}

impl RouteGuard {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn can_activate(&self) -> bool {
        self.session.is_logged_in()
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    guard: RouteGuard,
}

impl Router {
    pub fn new(session: Session) -> Self {
        Self {
            guard: RouteGuard::new(session),
        }
    }

    /// Decide where an attempt to open `target` lands. Evaluated fresh on
    /// every call.
    pub fn navigate(&self, target: View) -> Navigation {
        if !target.is_protected() || self.guard.can_activate() {
            return Navigation::Allowed(target);
        }
        debug!(target = %target, "Navigation denied, no active session");
        Navigation::Redirected {
            from: target,
            to: View::Login,
        }
    }
}
