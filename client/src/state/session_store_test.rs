use super::*;
use crate::util::cookie::{MemoryCookieJar, PERMANENT_MAX_AGE_SECS};

fn store_with(jar: &Arc<MemoryCookieJar>) -> SessionStore {
    SessionStore::new(jar.clone())
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn fresh_store_without_cookie_is_unauthenticated() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::new());
        let store = store_with(&jar);
        assert_eq!(store.snapshot(), Session::default());
        assert!(jar.writes().is_empty());
    });
}

#[test]
fn store_hydrates_token_from_existing_cookie() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::with_session("left-over"));
        let store = store_with(&jar);
        assert_eq!(store.snapshot().token(), Some("left-over"));
        assert!(!store.snapshot().is_permanent());
    });
}

// =============================================================
// login
// =============================================================

#[test]
fn login_then_read_returns_same_pair() {
    Owner::new().with(|| {
        for (token, permanent) in [("fake_token", false), ("tok1", true), ("x", false)] {
            let jar = Arc::new(MemoryCookieJar::new());
            let store = store_with(&jar);
            assert_eq!(store.login(token, permanent), Ok(Route::Home));
            let session = store.session().get_untracked();
            assert_eq!(session.token(), Some(token));
            assert_eq!(session.is_permanent(), permanent);
        }
    });
}

#[test]
fn non_permanent_login_writes_session_lifetime_cookie() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::new());
        store_with(&jar).login("fake_token", false).unwrap();
        assert_eq!(jar.last_write(), Some(SessionCookie::persist("fake_token", false)));
        assert_eq!(jar.last_write().unwrap().max_age, None);
        assert_eq!(jar.read(SESSION_COOKIE), Some("fake_token".to_owned()));
    });
}

#[test]
fn login_rejects_empty_token_without_side_effects() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::new());
        let store = store_with(&jar);
        assert_eq!(store.login("", true), Err(SessionError::EmptyToken));
        assert_eq!(store.snapshot(), Session::default());
        assert!(jar.writes().is_empty());
    });
}

// =============================================================
// logout
// =============================================================

#[test]
fn permanent_login_then_logout_scenario() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::new());
        let store = store_with(&jar);

        store.login("tok1", true).unwrap();
        assert_eq!(jar.last_write().unwrap().max_age, Some(PERMANENT_MAX_AGE_SECS));

        store.logout().unwrap();
        assert_eq!(jar.last_write().unwrap().max_age, Some(0));
        assert_eq!(store.snapshot(), Session::default());
        assert_eq!(jar.read(SESSION_COOKIE), None);
    });
}

#[test]
fn logout_is_idempotent() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::new());
        let store = store_with(&jar);
        store.login("fake_token", false).unwrap();
        for _ in 0..3 {
            store.logout().unwrap();
            assert_eq!(store.snapshot().token(), None);
            assert!(!store.snapshot().is_permanent());
        }
        assert!(jar.writes().iter().skip(1).all(SessionCookie::is_expiry));
    });
}

#[test]
fn logout_when_never_logged_in_still_expires_cookie() {
    Owner::new().with(|| {
        let jar = Arc::new(MemoryCookieJar::with_session("stale"));
        let store = store_with(&jar);
        store.logout().unwrap();
        store.logout().unwrap();
        assert_eq!(store.snapshot(), Session::default());
        assert_eq!(jar.read(SESSION_COOKIE), None);
    });
}
