//! Session value for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and the app bar; only `session_store` builds new
//! values. Fields are private so `is_permanent` can never outlive the token.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::cookie::CookieError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session token must not be empty")]
    EmptyToken,
    #[error(transparent)]
    Cookie(#[from] CookieError),
}

/// Authentication state: an opaque token plus its cookie lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    is_permanent: bool,
}

impl Session {
    /// Session hydrated from a cookie left by a previous visit.
    ///
    /// The cookie does not record whether it was permanent, so a hydrated
    /// session is treated as browser-session scoped.
    pub fn from_cookie(value: Option<String>) -> Self {
        Self {
            token: value.filter(|v| !v.is_empty()),
            is_permanent: false,
        }
    }

    /// Authenticated session for `token`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyToken` for an empty or blank token.
    pub fn authenticated(token: &str, is_permanent: bool) -> Result<Self, SessionError> {
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self {
            token: Some(token.to_owned()),
            is_permanent,
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_permanent(&self) -> bool {
        self.is_permanent
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
