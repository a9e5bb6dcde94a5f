//! Route table and the unauthenticated-redirect guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell calls `RouteGuard::check` on every session or location change.
//! Every route except `/login` requires a session. The guard fires at most
//! one redirect per transition: once a redirect is in flight it holds until
//! the login route is reached or a token appears.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Path prefix the app is mounted under.
pub const BASE_PATH: &str = "/ui";

/// Client-side routes, relative to `BASE_PATH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact,
    Login,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Contact, Route::Login];

    /// Path segment under `BASE_PATH` (empty for home).
    pub fn segment(self) -> &'static str {
        match self {
            Route::Home => "",
            Route::About => "about",
            Route::Contact => "contact",
            Route::Login => "login",
        }
    }

    /// Absolute href including the base path.
    pub fn href(self) -> String {
        match self {
            Route::Home => BASE_PATH.to_owned(),
            other => format!("{BASE_PATH}/{}", other.segment()),
        }
    }

    /// Resolve a location pathname, with or without the base prefix.
    pub fn from_path(path: &str) -> Option<Route> {
        let relative = match path.strip_prefix(BASE_PATH) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            Some(_) => return None,
            None => path,
        };
        let segment = relative.trim_matches('/');
        Route::ALL.into_iter().find(|r| r.segment() == segment)
    }

    pub fn is_protected(self) -> bool {
        self != Route::Login
    }
}

/// Outcome of a guard check for one requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Proceed,
    /// Navigate away; the requested view must not render.
    Redirect(Route),
    /// A redirect is already in flight; render nothing and do not re-fire.
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGuard {
    redirect_in_flight: bool,
}

impl RouteGuard {
    pub fn redirect_in_flight(&self) -> bool {
        self.redirect_in_flight
    }

    /// Decide whether `path` may render for `session`.
    ///
    /// Unknown paths count as protected.
    pub fn check(&mut self, session: &Session, path: &str) -> GuardDecision {
        let route = Route::from_path(path);
        if session.is_authenticated() || route == Some(Route::Login) {
            self.redirect_in_flight = false;
            return GuardDecision::Proceed;
        }
        if self.redirect_in_flight {
            return GuardDecision::Pending;
        }
        self.redirect_in_flight = true;
        GuardDecision::Redirect(Route::Login)
    }
}

/// Redirect to the login route whenever the session is missing.
pub fn install_route_guard<F>(session: ReadSignal<Session>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let guard = StoredValue::new(RouteGuard::default());
    Effect::new(move || {
        let session = session.get();
        let path = pathname.get();
        let decision = guard
            .try_update_value(|g| g.check(&session, &path))
            .unwrap_or(GuardDecision::Pending);
        if let GuardDecision::Redirect(target) = decision {
            log::debug!("guard: {path} requires a session, redirecting to {}", target.href());
            navigate(&target.href(), NavigateOptions::default());
        }
    });
}
