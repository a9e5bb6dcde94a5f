//! Reactive session store provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `App` and handed to the shell, app bar, and login page
//! via `provide_context`. It is the only code that mutates the session signal
//! or writes the session cookie.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::{Session, SessionError};
use crate::util::cookie::{CookieJar, SESSION_COOKIE, SessionCookie};
use crate::util::guard::Route;

#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    jar: StoredValue<Arc<dyn CookieJar>>,
}

impl SessionStore {
    /// Build the store, hydrating the session from any existing cookie.
    pub fn new(jar: Arc<dyn CookieJar>) -> Self {
        let session = Session::from_cookie(jar.read(SESSION_COOKIE));
        if session.is_authenticated() {
            log::info!("session restored from cookie");
        }
        Self {
            session: RwSignal::new(session),
            jar: StoredValue::new(jar),
        }
    }

    /// Read-only view of the session for guards and components.
    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Untracked snapshot of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.get_untracked()
    }

    /// Start a session for `token` and persist it to the cookie.
    ///
    /// Returns the route to navigate to next, always home.
    ///
    /// # Errors
    ///
    /// `SessionError::EmptyToken` for a blank token, leaving state untouched.
    /// `SessionError::Cookie` if the cookie write fails; the session is not
    /// changed in that case either.
    pub fn login(&self, token: &str, is_permanent: bool) -> Result<Route, SessionError> {
        let next = Session::authenticated(token, is_permanent)?;
        self.write_cookie(&SessionCookie::persist(token, is_permanent))?;
        self.session.set(next);
        log::info!("session started (permanent: {is_permanent})");
        Ok(Route::Home)
    }

    /// End the session and expire the cookie. Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// `SessionError::Cookie` if the cookie could not be expired. The
    /// in-memory session is cleared regardless.
    pub fn logout(&self) -> Result<(), SessionError> {
        let was_authenticated = self.session.with_untracked(Session::is_authenticated);
        self.session.set(Session::default());
        self.write_cookie(&SessionCookie::expire())?;
        if was_authenticated {
            log::info!("session ended");
        }
        Ok(())
    }

    fn write_cookie(&self, cookie: &SessionCookie) -> Result<(), SessionError> {
        self.jar.with_value(|jar| jar.write(cookie)).map_err(|e| {
            log::warn!("session cookie write failed: {e}");
            SessionError::from(e)
        })
    }
}
