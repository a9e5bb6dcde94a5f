use super::*;

fn parse(args: &[&str]) -> ServeConfig {
    let mut argv = vec!["o11y-ui"];
    argv.extend_from_slice(args);
    ServeConfig::try_parse_from(argv).unwrap()
}

#[test]
fn flags_override_defaults() {
    let cfg = parse(&["--port", "8080", "--dir", "/srv/ui", "--dev", "--dev-upstream", "http://127.0.0.1:5173/"]);
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.dir, PathBuf::from("/srv/ui"));
    assert!(cfg.dev);
    assert_eq!(cfg.upstream_base(), "http://127.0.0.1:5173");
}

#[test]
fn invalid_port_is_rejected() {
    assert!(ServeConfig::try_parse_from(["o11y-ui", "--port", "not-a-port"]).is_err());
}

#[test]
fn validate_requires_existing_asset_dir() {
    let cfg = parse(&["--dir", "/definitely/not/here/o11y"]);
    assert!(matches!(cfg.validate(), Err(ServeError::MissingAssets(_))));
}

#[test]
fn validate_accepts_existing_asset_dir() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = parse(&["--dir", dir.path().to_str().unwrap()]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn dev_mode_ignores_asset_dir() {
    let cfg = parse(&["--dev", "--dir", "/definitely/not/here/o11y", "--dev-upstream", "http://localhost:3000"]);
    assert!(cfg.validate().is_ok());
}

#[test]
fn dev_mode_rejects_bad_upstream() {
    let cfg = parse(&["--dev", "--dev-upstream", "localhost:3000"]);
    assert!(matches!(cfg.validate(), Err(ServeError::InvalidUpstream { .. })));

    let cfg = parse(&["--dev", "--dev-upstream", "not a url"]);
    assert!(matches!(cfg.validate(), Err(ServeError::InvalidUpstream { .. })));
}
