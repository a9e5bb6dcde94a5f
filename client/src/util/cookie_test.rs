use super::*;

// =============================================================
// SessionCookie rendering
// =============================================================

fn reparse(cookie: &SessionCookie) -> Cookie<'static> {
    Cookie::parse_encoded(cookie.to_cookie_string()).unwrap()
}

#[test]
fn session_cookie_omits_max_age() {
    let cookie = SessionCookie::persist("fake_token", false);
    assert_eq!(cookie.max_age, None);

    let parsed = reparse(&cookie);
    assert_eq!(parsed.name(), SESSION_COOKIE);
    assert_eq!(parsed.value(), "fake_token");
    assert_eq!(parsed.max_age(), None);
}

#[test]
fn session_cookie_carries_strict_secure_root_attributes() {
    for cookie in [SessionCookie::persist("tok", false), SessionCookie::persist("tok", true), SessionCookie::expire()] {
        let parsed = reparse(&cookie);
        assert_eq!(parsed.same_site(), Some(SameSite::Strict));
        assert_eq!(parsed.secure(), Some(true));
        assert_eq!(parsed.path(), Some("/"));
    }
}

#[test]
fn permanent_cookie_lives_one_year() {
    let cookie = SessionCookie::persist("tok1", true);
    assert_eq!(cookie.max_age, Some(31_536_000));
    assert_eq!(reparse(&cookie).max_age(), Some(Duration::seconds(31_536_000)));
    assert!(cookie.to_cookie_string().contains("Max-Age=31536000"));
}

#[test]
fn expire_cookie_has_zero_max_age_and_empty_value() {
    let cookie = SessionCookie::expire();
    assert!(cookie.is_expiry());
    let parsed = reparse(&cookie);
    assert_eq!(parsed.value(), "");
    assert_eq!(parsed.max_age(), Some(Duration::ZERO));
}

#[test]
fn cookie_value_is_percent_encoded() {
    let cookie = SessionCookie::persist("a b;c", false);
    assert!(cookie.to_cookie_string().starts_with("sessionId=a%20b%3Bc"));
    assert_eq!(reparse(&cookie).value(), "a b;c");
}

// =============================================================
// parse_cookie_value
// =============================================================

#[test]
fn parse_finds_named_cookie_among_others() {
    let raw = "theme=dark; sessionId=abc123; lang=en";
    assert_eq!(parse_cookie_value(raw, SESSION_COOKIE), Some("abc123".to_owned()));
}

#[test]
fn parse_decodes_percent_encoding() {
    assert_eq!(parse_cookie_value("sessionId=a%20b%3Bc", SESSION_COOKIE), Some("a b;c".to_owned()));
}

#[test]
fn parse_treats_empty_value_as_absent() {
    assert_eq!(parse_cookie_value("sessionId=", SESSION_COOKIE), None);
}

#[test]
fn parse_missing_cookie_returns_none() {
    assert_eq!(parse_cookie_value("", SESSION_COOKIE), None);
    assert_eq!(parse_cookie_value("other=1", SESSION_COOKIE), None);
}

#[test]
fn parse_reads_back_a_written_cookie() {
    let written = SessionCookie::persist("a b;c", true).to_cookie_string();
    assert_eq!(parse_cookie_value(&written, SESSION_COOKIE), Some("a b;c".to_owned()));
}

#[test]
fn parse_does_not_match_name_prefix() {
    assert_eq!(parse_cookie_value("sessionIdOld=x", SESSION_COOKIE), None);
}

// =============================================================
// MemoryCookieJar
// =============================================================

#[test]
fn memory_jar_starts_empty() {
    let jar = MemoryCookieJar::new();
    assert_eq!(jar.read(SESSION_COOKIE), None);
    assert!(jar.writes().is_empty());
}

#[test]
fn memory_jar_persist_then_expire() {
    let jar = MemoryCookieJar::new();
    jar.write(&SessionCookie::persist("tok", false)).unwrap();
    assert_eq!(jar.read(SESSION_COOKIE), Some("tok".to_owned()));

    jar.write(&SessionCookie::expire()).unwrap();
    assert_eq!(jar.read(SESSION_COOKIE), None);
    assert_eq!(jar.writes().len(), 2);
    assert_eq!(jar.last_write(), Some(SessionCookie::expire()));
}

#[test]
fn memory_jar_with_session_is_readable() {
    let jar = MemoryCookieJar::with_session("left-over");
    assert_eq!(jar.read(SESSION_COOKIE), Some("left-over".to_owned()));
    assert!(jar.writes().is_empty());
}
