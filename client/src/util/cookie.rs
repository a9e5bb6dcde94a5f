//! Session cookie encoding and access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only writer of the `sessionId` cookie. Browser
//! builds read and write through `document.cookie`; native builds and tests
//! use `MemoryCookieJar`.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use ::cookie::time::Duration;
use ::cookie::{Cookie, SameSite};

/// Name of the cookie holding the opaque session token.
pub const SESSION_COOKIE: &str = "sessionId";

/// `Max-Age` for permanent sessions: one year in seconds.
pub const PERMANENT_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CookieError {
    #[error("cookie store unavailable: {0}")]
    Unavailable(String),
}

/// A single `Set-Cookie` style write against the session cookie.
///
/// `value` is `None` when the write clears the cookie. `max_age` is `None`
/// for a browser-session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub value: Option<String>,
    pub max_age: Option<i64>,
}

impl SessionCookie {
    /// Cookie write that stores `token`, for one year when `permanent`.
    pub fn persist(token: &str, permanent: bool) -> Self {
        Self {
            value: Some(token.to_owned()),
            max_age: permanent.then_some(PERMANENT_MAX_AGE_SECS),
        }
    }

    /// Cookie write that expires the session cookie immediately.
    pub fn expire() -> Self {
        Self { value: None, max_age: Some(0) }
    }

    pub fn is_expiry(&self) -> bool {
        self.max_age == Some(0)
    }

    /// Build the cookie: `Path=/`, `SameSite=Strict`, `Secure`, plus
    /// `Max-Age` when set.
    pub fn to_cookie(&self) -> Cookie<'static> {
        let builder = Cookie::build((SESSION_COOKIE, self.value.clone().unwrap_or_default()))
            .path("/")
            .same_site(SameSite::Strict)
            .secure(true);
        match self.max_age {
            Some(secs) => builder.max_age(Duration::seconds(secs)).build(),
            None => builder.build(),
        }
    }

    /// Render as a percent-encoded `document.cookie` assignment string.
    pub fn to_cookie_string(&self) -> String {
        self.to_cookie().encoded().to_string()
    }
}

/// Find `name` in a `document.cookie` style string and decode its value.
///
/// Empty values are treated as absent.
pub fn parse_cookie_value(raw: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Read/write access to the cookie store.
pub trait CookieJar: Send + Sync {
    fn read(&self, name: &str) -> Option<String>;

    /// Apply a session cookie write.
    ///
    /// # Errors
    ///
    /// Returns `CookieError::Unavailable` if the host environment rejects
    /// cookie access.
    fn write(&self, cookie: &SessionCookie) -> Result<(), CookieError>;
}

/// In-process cookie jar that records every write.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    inner: Mutex<MemoryCookies>,
}

#[derive(Debug, Default)]
struct MemoryCookies {
    values: BTreeMap<String, String>,
    writes: Vec<SessionCookie>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-seeded with a session token, as if left over from a prior visit.
    pub fn with_session(token: &str) -> Self {
        let jar = Self::default();
        jar.lock().values.insert(SESSION_COOKIE.to_owned(), token.to_owned());
        jar
    }

    /// All writes applied so far, oldest first.
    pub fn writes(&self) -> Vec<SessionCookie> {
        self.lock().writes.clone()
    }

    pub fn last_write(&self) -> Option<SessionCookie> {
        self.lock().writes.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryCookies> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieJar for MemoryCookieJar {
    fn read(&self, name: &str) -> Option<String> {
        self.lock().values.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn write(&self, cookie: &SessionCookie) -> Result<(), CookieError> {
        let mut cookies = self.lock();
        match (&cookie.value, cookie.is_expiry()) {
            (Some(value), false) => {
                cookies.values.insert(SESSION_COOKIE.to_owned(), value.clone());
            }
            _ => {
                cookies.values.remove(SESSION_COOKIE);
            }
        }
        cookies.writes.push(cookie.clone());
        Ok(())
    }
}

/// Cookie jar backed by `document.cookie`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserCookieJar;

#[cfg(feature = "csr")]
impl BrowserCookieJar {
    fn document() -> Result<web_sys::HtmlDocument, CookieError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| CookieError::Unavailable("no html document".to_owned()))
    }
}

#[cfg(feature = "csr")]
impl CookieJar for BrowserCookieJar {
    fn read(&self, name: &str) -> Option<String> {
        let raw = Self::document().ok()?.cookie().ok()?;
        parse_cookie_value(&raw, name)
    }

    fn write(&self, cookie: &SessionCookie) -> Result<(), CookieError> {
        Self::document()?
            .set_cookie(&cookie.to_cookie_string())
            .map_err(|e| CookieError::Unavailable(format!("{e:?}")))
    }
}

/// The cookie jar for the current build target.
pub fn default_jar() -> Arc<dyn CookieJar> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserCookieJar)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryCookieJar::new())
    }
}
